//! Inspect a card store.

use std::sync::Arc;

use ctu_cards::{CardStore, JsonFileStorage};
use ctu_core::{CardId, SupplierId};

fn open(dir: &str) -> CardStore {
    CardStore::new(Arc::new(JsonFileStorage::new(dir)))
}

/// List cards in a store, one line per card.
///
/// # Errors
///
/// Never fails currently; kept fallible for symmetry with the other commands.
pub fn list(dir: &str, supplier: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let store = open(dir);
    let cards = match supplier {
        Some(id) => store.supplier_cards(&SupplierId::new(id)),
        None => store.cards(),
    };

    if cards.is_empty() {
        println!("no cards");
        return Ok(());
    }

    for card in cards {
        let mut flags = Vec::new();
        if card.is_default {
            flags.push("default");
        }
        if card.is_public {
            flags.push("public");
        }
        println!(
            "{}  {}  supplier={}  [{}]  downloads={} shares={}",
            card.id,
            card.name,
            card.supplier_id,
            flags.join(","),
            card.downloads,
            card.shares
        );
    }
    Ok(())
}

/// Print one card as pretty JSON.
///
/// # Errors
///
/// Returns an error if the card does not exist or cannot be serialized.
pub fn show(dir: &str, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = open(dir);
    let card = store
        .card(&CardId::new(id))
        .ok_or_else(|| format!("card not found: {id}"))?;
    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}
