//! Settings operations.
//!
//! Handles both global and per-admin settings storage over the namespaced
//! key/value table: global keys are stored bare, per-admin keys as
//! `admin:<user>:<key>`.

use serde_json::Value as JsonValue;

use ctu_core::UserId;

use super::MockDb;

/// Repository for settings operations.
pub struct SettingsRepository<'a> {
    db: &'a MockDb,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Get a global setting value.
    pub async fn get_setting(&self, key: &str) -> Option<JsonValue> {
        self.db.settings.read().await.get(key).cloned()
    }

    /// Set a global setting value.
    pub async fn set_setting(&self, key: &str, value: JsonValue) {
        self.db
            .settings
            .write()
            .await
            .insert(key.to_owned(), value);
    }

    /// Get a user-specific setting value.
    pub async fn get_user_setting(&self, user_id: &UserId, key: &str) -> Option<JsonValue> {
        self.db
            .settings
            .read()
            .await
            .get(&user_key(user_id, key))
            .cloned()
    }

    /// Set a user-specific setting value.
    pub async fn set_user_setting(&self, user_id: &UserId, key: &str, value: JsonValue) {
        self.db
            .settings
            .write()
            .await
            .insert(user_key(user_id, key), value);
    }

    /// Delete a user-specific setting. Returns whether it existed.
    pub async fn delete_user_setting(&self, user_id: &UserId, key: &str) -> bool {
        self.db
            .settings
            .write()
            .await
            .remove(&user_key(user_id, key))
            .is_some()
    }

    /// Get all settings with a given prefix, sorted by key.
    pub async fn get_settings_by_prefix(&self, prefix: &str) -> Vec<(String, JsonValue)> {
        let settings = self.db.settings.read().await;
        let mut entries: Vec<(String, JsonValue)> = settings
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

fn user_key(user_id: &UserId, key: &str) -> String {
    format!("admin:{user_id}:{key}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_global_settings_round_trip() {
        let db = MockDb::seeded();
        let repository = SettingsRepository::new(&db);

        assert_eq!(
            repository.get_setting("platform:commission_pct").await,
            Some(json!(7.5))
        );

        repository
            .set_setting("platform:commission_pct", json!(8.0))
            .await;
        assert_eq!(
            repository.get_setting("platform:commission_pct").await,
            Some(json!(8.0))
        );
    }

    #[tokio::test]
    async fn test_user_settings_are_namespaced() {
        let db = MockDb::new();
        let repository = SettingsRepository::new(&db);
        let ops = UserId::new("u-admin");

        repository
            .set_user_setting(&ops, "theme", json!("dark"))
            .await;
        assert_eq!(
            repository.get_user_setting(&ops, "theme").await,
            Some(json!("dark"))
        );
        // Not visible as a global key
        assert_eq!(repository.get_setting("theme").await, None);

        assert!(repository.delete_user_setting(&ops, "theme").await);
        assert!(!repository.delete_user_setting(&ops, "theme").await);
    }

    #[tokio::test]
    async fn test_prefix_listing_is_sorted() {
        let db = MockDb::seeded();
        let repository = SettingsRepository::new(&db);
        let entries = repository.get_settings_by_prefix("platform:").await;
        assert_eq!(entries.len(), 2);
        assert!(entries.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
