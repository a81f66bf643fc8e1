//! Print the effective portal configuration.

use ctu_portal::config::PortalConfig;

/// Resolve the portal configuration from the environment and print it.
///
/// # Errors
///
/// Returns an error if the environment holds unparseable values.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = PortalConfig::from_env()?;
    println!("bind:      {}", config.socket_addr());
    println!("base_url:  {}", config.base_url);
    match &config.cards_dir {
        Some(dir) => println!("cards_dir: {}", dir.display()),
        None => println!("cards_dir: (unset - in-memory demo mode)"),
    }
    Ok(())
}
