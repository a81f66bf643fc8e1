//! Card store: CRUD over the persisted card gallery.
//!
//! All suppliers' cards live in one JSON array under a single namespaced key
//! and are filtered in memory by supplier id. Reads never fail: an absent or
//! unparseable blob degrades to the fixed seed gallery with a warning.
//! Mutating operations return `Result` so callers can tell "not found" from
//! "write failed" from success.
//!
//! The store assumes a single writing process per backend. Reads and writes
//! from one process go through `&self` and are short; cross-process writers
//! racing on the same file are out of scope.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use thiserror::Error;

use ctu_core::{CardId, SupplierId};

use crate::model::{CardDraft, CardPatch, SavedBusinessCard};
use crate::seed::seed_cards;
use crate::storage::{Storage, StorageError};

/// Namespaced key the card blob lives under.
pub const CARDS_KEY: &str = "business_cards";

/// Length of the random id suffix.
const ID_SUFFIX_LEN: usize = 6;

/// Errors from card store operations.
#[derive(Debug, Error)]
pub enum CardStoreError {
    /// No card with the given id exists.
    #[error("card not found: {0}")]
    NotFound(CardId),

    /// The backend rejected the write.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The gallery could not be serialized for persistence.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// CRUD service over the persisted card gallery.
///
/// Construct with any [`Storage`] backend; tests use
/// [`MemoryStorage`](crate::storage::MemoryStorage), the portal and CLI use
/// either backend depending on configuration.
#[derive(Clone)]
pub struct CardStore {
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for CardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardStore").finish_non_exhaustive()
    }
}

impl CardStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All cards in the store, across suppliers.
    #[must_use]
    pub fn cards(&self) -> Vec<SavedBusinessCard> {
        self.load()
    }

    /// All cards belonging to `supplier_id`. Never returns a card scoped to
    /// another supplier.
    #[must_use]
    pub fn supplier_cards(&self, supplier_id: &SupplierId) -> Vec<SavedBusinessCard> {
        self.load()
            .into_iter()
            .filter(|card| &card.supplier_id == supplier_id)
            .collect()
    }

    /// Look up a single card by id.
    #[must_use]
    pub fn card(&self, card_id: &CardId) -> Option<SavedBusinessCard> {
        self.load().into_iter().find(|card| &card.id == card_id)
    }

    /// Create a card from a draft.
    ///
    /// Assigns a fresh id and timestamps, zero-initializes the counters, and
    /// applies the default-flag invariant before persisting.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::Storage`] or [`CardStoreError::Serialize`]
    /// if the gallery cannot be persisted.
    pub fn save(&self, draft: CardDraft) -> Result<SavedBusinessCard, CardStoreError> {
        let mut cards = self.load();
        let now = Utc::now();

        let card = SavedBusinessCard {
            id: generate_id(&cards),
            name: draft.name,
            data: draft.data,
            supplier_id: draft.supplier_id,
            created_at: now,
            updated_at: now,
            is_default: draft.is_default,
            is_public: draft.is_public,
            downloads: 0,
            shares: 0,
            tags: draft.tags,
        };

        if card.is_default {
            clear_other_defaults(&mut cards, &card.supplier_id, &card.id);
        }
        cards.push(card.clone());
        self.persist(&cards)?;
        Ok(card)
    }

    /// Apply a partial update to an existing card.
    ///
    /// Refreshes `updated_at` and re-applies the default-flag invariant when
    /// the patch sets `is_default = true`.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::NotFound`] for an unknown id, or a
    /// storage/serialization error if persistence fails.
    pub fn update(
        &self,
        card_id: &CardId,
        patch: CardPatch,
    ) -> Result<SavedBusinessCard, CardStoreError> {
        let mut cards = self.load();
        let position = cards
            .iter()
            .position(|card| &card.id == card_id)
            .ok_or_else(|| CardStoreError::NotFound(card_id.clone()))?;

        let make_default = patch.is_default == Some(true);
        let supplier_id = {
            let Some(card) = cards.get_mut(position) else {
                return Err(CardStoreError::NotFound(card_id.clone()));
            };
            if let Some(name) = patch.name {
                card.name = name;
            }
            if let Some(data) = patch.data {
                card.data = data;
            }
            if let Some(is_default) = patch.is_default {
                card.is_default = is_default;
            }
            if let Some(is_public) = patch.is_public {
                card.is_public = is_public;
            }
            if let Some(tags) = patch.tags {
                card.tags = tags;
            }
            card.updated_at = Utc::now();
            card.supplier_id.clone()
        };

        if make_default {
            clear_other_defaults(&mut cards, &supplier_id, card_id);
        }

        self.persist(&cards)?;
        cards
            .into_iter()
            .find(|card| &card.id == card_id)
            .ok_or_else(|| CardStoreError::NotFound(card_id.clone()))
    }

    /// Delete a card. Returns whether a card was actually removed, so a
    /// second delete of the same id yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns a storage/serialization error if persistence fails.
    pub fn delete(&self, card_id: &CardId) -> Result<bool, CardStoreError> {
        let mut cards = self.load();
        let before = cards.len();
        cards.retain(|card| &card.id != card_id);
        if cards.len() == before {
            return Ok(false);
        }
        self.persist(&cards)?;
        Ok(true)
    }

    /// Duplicate an existing card under a new name.
    ///
    /// The copy keeps the source's content, visibility, and tags, but is
    /// never the default and starts with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::NotFound`] if the source does not exist, or
    /// a storage/serialization error if persistence fails.
    pub fn duplicate(
        &self,
        card_id: &CardId,
        new_name: impl Into<String>,
    ) -> Result<SavedBusinessCard, CardStoreError> {
        let source = self
            .card(card_id)
            .ok_or_else(|| CardStoreError::NotFound(card_id.clone()))?;

        self.save(CardDraft {
            name: new_name.into(),
            supplier_id: source.supplier_id,
            data: source.data,
            is_default: false,
            is_public: source.is_public,
            tags: source.tags,
        })
    }

    /// Bump the download counter by exactly one. Leaves every other field,
    /// including `updated_at`, untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::NotFound`] for an unknown id, or a
    /// storage/serialization error if persistence fails.
    pub fn increment_downloads(&self, card_id: &CardId) -> Result<u32, CardStoreError> {
        self.bump(card_id, |card| {
            card.downloads = card.downloads.saturating_add(1);
            card.downloads
        })
    }

    /// Bump the share counter by exactly one. Leaves every other field,
    /// including `updated_at`, untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::NotFound`] for an unknown id, or a
    /// storage/serialization error if persistence fails.
    pub fn increment_shares(&self, card_id: &CardId) -> Result<u32, CardStoreError> {
        self.bump(card_id, |card| {
            card.shares = card.shares.saturating_add(1);
            card.shares
        })
    }

    fn bump(
        &self,
        card_id: &CardId,
        apply: impl FnOnce(&mut SavedBusinessCard) -> u32,
    ) -> Result<u32, CardStoreError> {
        let mut cards = self.load();
        let card = cards
            .iter_mut()
            .find(|card| &card.id == card_id)
            .ok_or_else(|| CardStoreError::NotFound(card_id.clone()))?;
        let count = apply(card);
        self.persist(&cards)?;
        Ok(count)
    }

    /// Load the gallery, degrading to the seed on an absent or unreadable
    /// blob.
    fn load(&self) -> Vec<SavedBusinessCard> {
        let blob = match self.storage.get(CARDS_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return seed_cards(),
            Err(e) => {
                tracing::warn!(error = %e, "card storage unreadable, falling back to seed");
                return seed_cards();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(cards) => cards,
            Err(e) => {
                tracing::warn!(error = %e, "card blob corrupt, falling back to seed");
                seed_cards()
            }
        }
    }

    fn persist(&self, cards: &[SavedBusinessCard]) -> Result<(), CardStoreError> {
        let blob = serde_json::to_string(cards)?;
        self.storage.set(CARDS_KEY, &blob)?;
        Ok(())
    }
}

/// Clear the default flag on every card of `supplier_id` except `keep`.
fn clear_other_defaults(cards: &mut [SavedBusinessCard], supplier_id: &SupplierId, keep: &CardId) {
    for card in cards {
        if &card.supplier_id == supplier_id && &card.id != keep {
            card.is_default = false;
        }
    }
}

/// Fresh card id: millisecond timestamp plus a random alphanumeric suffix,
/// re-drawn in the unlikely event of a collision with an existing card.
fn generate_id(existing: &[SavedBusinessCard]) -> CardId {
    loop {
        let suffix: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(char::from)
            .collect();
        let id = CardId::new(format!(
            "card-{}-{}",
            Utc::now().timestamp_millis(),
            suffix.to_lowercase()
        ));
        if !existing.iter().any(|card| card.id == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use ctu_core::SupplierId;

    use super::*;
    use crate::model::{BusinessCardData, CardTemplate, ElementSize};
    use crate::seed::SEED_SUPPLIER_ID;
    use crate::storage::MemoryStorage;

    fn empty_store() -> CardStore {
        let storage = Arc::new(MemoryStorage::new());
        // An explicit empty gallery, so tests do not see the seed fallback
        storage.set(CARDS_KEY, "[]").expect("seed empty blob");
        CardStore::new(storage)
    }

    fn sample_data(company: &str) -> BusinessCardData {
        BusinessCardData {
            company_name: company.to_owned(),
            contact_name: "Test Contact".to_owned(),
            job_title: "Director".to_owned(),
            phone: "+33 1 00 00 00 00".to_owned(),
            email: "contact@example.fr".to_owned(),
            website: None,
            address: None,
            tagline: None,
            social_handle: None,
            primary_color: "#0f766e".to_owned(),
            secondary_color: "#14b8a6".to_owned(),
            accent_color: "#f97316".to_owned(),
            logo_url: None,
            background_url: None,
            template: CardTemplate::Minimal,
            font_size: ElementSize::Medium,
            logo_size: ElementSize::Medium,
        }
    }

    fn draft(name: &str, supplier: &str, is_default: bool) -> CardDraft {
        CardDraft {
            name: name.to_owned(),
            supplier_id: SupplierId::new(supplier),
            data: sample_data(name),
            is_default,
            is_public: false,
            tags: Vec::new(),
        }
    }

    fn default_count(store: &CardStore, supplier: &str) -> usize {
        store
            .supplier_cards(&SupplierId::new(supplier))
            .iter()
            .filter(|card| card.is_default)
            .count()
    }

    #[test]
    fn test_default_flag_exclusivity_across_saves_and_updates() {
        let store = empty_store();

        let a = store.save(draft("A", "s1", true)).expect("save A");
        assert_eq!(default_count(&store, "s1"), 1);

        let b = store.save(draft("B", "s1", true)).expect("save B");
        assert_eq!(default_count(&store, "s1"), 1);
        assert!(store.card(&b.id).expect("B exists").is_default);
        assert!(!store.card(&a.id).expect("A exists").is_default);

        // Promoting A back via update flips the flag the other way
        let patch = CardPatch {
            is_default: Some(true),
            ..CardPatch::default()
        };
        store.update(&a.id, patch).expect("promote A");
        assert_eq!(default_count(&store, "s1"), 1);
        assert!(store.card(&a.id).expect("A exists").is_default);
        assert!(!store.card(&b.id).expect("B exists").is_default);
    }

    #[test]
    fn test_default_flag_scoped_per_supplier() {
        let store = empty_store();
        store.save(draft("A", "s1", true)).expect("save A");
        store.save(draft("B", "s2", true)).expect("save B");
        assert_eq!(default_count(&store, "s1"), 1);
        assert_eq!(default_count(&store, "s2"), 1);
    }

    #[test]
    fn test_id_uniqueness() {
        let store = empty_store();
        let mut ids = HashSet::new();
        for i in 0..20 {
            let card = store
                .save(draft(&format!("card {i}"), "s1", false))
                .expect("save");
            assert!(ids.insert(card.id), "duplicate id issued");
        }
    }

    #[test]
    fn test_save_round_trip() {
        let store = empty_store();
        let input = draft("Round trip", "s1", false);
        let saved = store.save(input.clone()).expect("save");

        let fetched = store.card(&saved.id).expect("card exists");
        assert_eq!(fetched, saved);
        assert_eq!(fetched.name, input.name);
        assert_eq!(fetched.data, input.data);
        assert_eq!(fetched.supplier_id, input.supplier_id);
        assert_eq!(fetched.downloads, 0);
        assert_eq!(fetched.shares, 0);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn test_delete_idempotence() {
        let store = empty_store();
        let card = store.save(draft("Doomed", "s1", false)).expect("save");
        assert!(store.delete(&card.id).expect("first delete"));
        assert!(!store.delete(&card.id).expect("second delete"));
        assert!(store.card(&card.id).is_none());
    }

    #[test]
    fn test_supplier_scoping() {
        let store = empty_store();
        store.save(draft("Mine", "s1", false)).expect("save");
        store.save(draft("Theirs", "s2", false)).expect("save");

        let cards = store.supplier_cards(&SupplierId::new("s1"));
        assert_eq!(cards.len(), 1);
        assert!(cards.iter().all(|c| c.supplier_id.as_str() == "s1"));
    }

    #[test]
    fn test_counter_bump_leaves_other_fields_alone() {
        let store = empty_store();
        let saved = store.save(draft("Counted", "s1", false)).expect("save");

        assert_eq!(store.increment_downloads(&saved.id).expect("bump"), 1);
        assert_eq!(store.increment_downloads(&saved.id).expect("bump"), 2);
        assert_eq!(store.increment_shares(&saved.id).expect("bump"), 1);

        let after = store.card(&saved.id).expect("card exists");
        assert_eq!(after.downloads, 2);
        assert_eq!(after.shares, 1);
        assert_eq!(
            SavedBusinessCard {
                downloads: 0,
                shares: 0,
                ..after
            },
            saved
        );
    }

    #[test]
    fn test_update_refreshes_updated_at_only() {
        let store = empty_store();
        let saved = store.save(draft("Patch me", "s1", false)).expect("save");

        let patch = CardPatch {
            name: Some("Renamed".to_owned()),
            tags: Some(vec!["export".to_owned()]),
            ..CardPatch::default()
        };
        let updated = store.update(&saved.id, patch).expect("update");
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.tags, vec!["export".to_owned()]);
        assert_eq!(updated.created_at, saved.created_at);
        assert!(updated.updated_at >= saved.updated_at);
    }

    #[test]
    fn test_update_unknown_card_is_not_found() {
        let store = empty_store();
        let err = store
            .update(&CardId::new("card-nope"), CardPatch::default())
            .expect_err("unknown id");
        assert!(matches!(err, CardStoreError::NotFound(_)));
    }

    #[test]
    fn test_duplicate_copies_content_but_not_default_flag() {
        let store = empty_store();
        let source = store.save(draft("Original", "s1", true)).expect("save");

        let copy = store
            .duplicate(&source.id, "Original (copie)")
            .expect("duplicate");
        assert_ne!(copy.id, source.id);
        assert_eq!(copy.data, source.data);
        assert_eq!(copy.supplier_id, source.supplier_id);
        assert!(!copy.is_default);
        assert_eq!(copy.downloads, 0);

        // The source stays default; the invariant is untouched
        assert!(store.card(&source.id).expect("source").is_default);
        assert_eq!(default_count(&store, "s1"), 1);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_seed() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(CARDS_KEY, "{not json").expect("corrupt blob");
        let store = CardStore::new(storage);

        let cards = store.supplier_cards(&SupplierId::new(SEED_SUPPLIER_ID));
        assert_eq!(cards.len(), 1);
        assert!(cards.iter().any(|c| c.is_default));
    }

    #[test]
    fn test_absent_blob_serves_seed() {
        let store = CardStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.cards(), seed_cards());
    }

    #[test]
    fn test_two_card_scenario_from_review() {
        // saveCard(A, default) then saveCard(B, default) on supplier s1:
        // two cards total, only B keeps the flag.
        let store = empty_store();
        let a = store.save(draft("A", "s1", true)).expect("save A");
        let b = store.save(draft("B", "s1", true)).expect("save B");

        let cards = store.supplier_cards(&SupplierId::new("s1"));
        assert_eq!(cards.len(), 2);
        assert!(!cards.iter().find(|c| c.id == a.id).expect("A").is_default);
        assert!(cards.iter().find(|c| c.id == b.id).expect("B").is_default);
    }
}
