//! Fixed seed record for the card store.
//!
//! When the stored blob is absent or unreadable the store degrades to this
//! single example card rather than an empty gallery, so a fresh install (or a
//! corrupted one) still shows suppliers what the feature looks like.

use chrono::{TimeZone, Utc};

use ctu_core::{CardId, SupplierId};

use crate::model::{BusinessCardData, CardTemplate, ElementSize, SavedBusinessCard};

/// Supplier the seed card belongs to. Matches the demo supplier account in
/// the portal's mock user directory.
pub const SEED_SUPPLIER_ID: &str = "sup-atelier-lefort";

/// The seed gallery: a single example card.
#[must_use]
pub fn seed_cards() -> Vec<SavedBusinessCard> {
    let created = Utc
        .with_ymd_and_hms(2024, 11, 5, 9, 30, 0)
        .single()
        .unwrap_or_default();

    vec![SavedBusinessCard {
        id: CardId::new("card-seed-example"),
        name: "Carte principale".to_owned(),
        data: BusinessCardData {
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
            template: CardTemplate::Modern,
            font_size: ElementSize::Medium,
            logo_size: ElementSize::Medium,
        },
        supplier_id: SupplierId::new(SEED_SUPPLIER_ID),
        created_at: created,
        updated_at: created,
        is_default: true,
        is_public: true,
        downloads: 0,
        shares: 0,
        tags: vec!["demo".to_owned()],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_stable() {
        let a = seed_cards();
        let b = seed_cards();
        assert_eq!(a, b);
        assert_eq!(a.len(), 1);
        let card = a.first().expect("seed card");
        assert!(card.is_default);
        assert_eq!(card.supplier_id, SupplierId::new(SEED_SUPPLIER_ID));
    }
}
