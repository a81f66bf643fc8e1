//! Seed a card store directory with demo cards.

use std::sync::Arc;

use ctu_cards::seed::SEED_SUPPLIER_ID;
use ctu_cards::store::CARDS_KEY;
use ctu_cards::{
    BusinessCardData, CardDraft, CardStore, CardTemplate, ElementSize, JsonFileStorage, Storage,
};
use ctu_core::SupplierId;

fn demo_data(template: CardTemplate) -> BusinessCardData {
    BusinessCardData {
        company_name: "Atelier Lefort".to_owned(),
        contact_name: "Marie Lefort".to_owned(),
        job_title: "Gérante".to_owned(),
        phone: "+33 6 12 34 56 78".to_owned(),
        email: "contact@atelier-lefort.fr".to_owned(),
        website: Some("https://atelier-lefort.fr".to_owned()),
        address: Some("14 rue des Forges, 69002 Lyon".to_owned()),
        tagline: Some("Mobilier professionnel sur mesure".to_owned()),
        social_handle: None,
        primary_color: "#1d4ed8".to_owned(),
        secondary_color: "#3b82f6".to_owned(),
        accent_color: "#f59e0b".to_owned(),
        logo_url: None,
        background_url: None,
        template,
        font_size: ElementSize::Medium,
        logo_size: ElementSize::Medium,
    }
}

/// Seed `dir` with three demo cards for the demo supplier.
///
/// Refuses to touch an existing blob unless `force` is set.
///
/// # Errors
///
/// Returns an error if the store already holds data (without `force`) or if
/// persistence fails.
pub fn run(dir: &str, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let storage = JsonFileStorage::new(dir);

    if !force && storage.get(CARDS_KEY)?.is_some() {
        return Err(format!(
            "{dir} already contains a card blob; re-run with --force to overwrite"
        )
        .into());
    }
    storage.set(CARDS_KEY, "[]")?;

    let store = CardStore::new(Arc::new(storage));
    let supplier_id = SupplierId::new(SEED_SUPPLIER_ID);

    let drafts = [
        ("Carte principale", CardTemplate::Modern, true, true),
        ("Carte export", CardTemplate::Tech, false, false),
        ("Carte salon professionnel", CardTemplate::Creative, false, true),
    ];

    for (name, template, is_default, is_public) in drafts {
        let card = store.save(CardDraft {
            name: name.to_owned(),
            supplier_id: supplier_id.clone(),
            data: demo_data(template),
            is_default,
            is_public,
            tags: vec!["demo".to_owned()],
        })?;
        tracing::info!(id = %card.id, name = %card.name, "card seeded");
    }

    println!("Seeded 3 demo cards for {supplier_id} in {dir}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_then_refuse_without_force() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().to_string_lossy().into_owned();

        run(&path, false).expect("first seed");

        let store = CardStore::new(Arc::new(JsonFileStorage::new(dir.path())));
        let cards = store.supplier_cards(&SupplierId::new(SEED_SUPPLIER_ID));
        assert_eq!(cards.len(), 3);
        assert_eq!(cards.iter().filter(|c| c.is_default).count(), 1);

        // Second run without --force refuses
        assert!(run(&path, false).is_err());
        // With --force it rewrites
        run(&path, true).expect("forced reseed");
    }
}
