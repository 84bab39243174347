//! Preference Store
//!
//! Persistent key-value storage for preference values, with summary
//! binding on read and on change.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::db::{self, Database, DatabaseConfig};

use super::summary::summary;
use super::{PreferenceCatalog, PreferenceDef, PreferenceResult, RingtoneCatalog};

/// Preference storage backed by SQLite
pub struct PreferenceStore {
    db: Database,
}

impl PreferenceStore {
    pub fn open(config: DatabaseConfig) -> PreferenceResult<Self> {
        let db = Database::open(config)?;
        Ok(Self { db })
    }

    /// In-memory store for testing
    pub fn open_in_memory() -> PreferenceResult<Self> {
        Self::open(DatabaseConfig::in_memory())
    }

    /// Store defaults for every preference that has no value yet.
    /// Returns how many were written.
    pub fn seed_defaults(&mut self, catalog: &PreferenceCatalog) -> PreferenceResult<usize> {
        let written = self.db.transaction(|conn| {
            let mut written = 0;
            for def in catalog.iter() {
                if db::get_preference(conn, &def.key)?.is_none() {
                    db::set_preference(conn, &def.key, &def.default)?;
                    written += 1;
                }
            }
            Ok(written)
        })?;

        if written > 0 {
            info!(count = written, "seeded preference defaults");
        }
        Ok(written)
    }

    pub fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(db::get_preference(self.db.conn(), key)?.map(|p| p.value))
    }

    /// Stored value, or the empty string when unset
    pub fn get_string(&self, key: &str) -> PreferenceResult<String> {
        Ok(self.get(key)?.unwrap_or_default())
    }

    pub fn get_or_default(&self, def: &PreferenceDef) -> PreferenceResult<String> {
        Ok(self.get(&def.key)?.unwrap_or_else(|| def.default.clone()))
    }

    /// When the value was last written, `None` when unset
    pub fn changed_at(&self, key: &str) -> PreferenceResult<Option<DateTime<Local>>> {
        Ok(db::get_preference(self.db.conn(), key)?.map(|p| p.updated_at))
    }

    pub fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        db::set_preference(self.db.conn(), key, value)?;
        debug!(key, "preference stored");
        Ok(())
    }

    pub fn remove(&self, key: &str) -> PreferenceResult<()> {
        db::delete_preference(self.db.conn(), key)?;
        Ok(())
    }

    /// All stored key/value pairs ordered by key
    pub fn all(&self) -> PreferenceResult<Vec<(String, String)>> {
        Ok(db::get_all_preferences(self.db.conn())?
            .into_iter()
            .map(|p| (p.key, p.value))
            .collect())
    }

    /// Summary for the stored value of a preference
    pub fn bind_summary(
        &self,
        def: &PreferenceDef,
        ringtones: &dyn RingtoneCatalog,
    ) -> PreferenceResult<Option<String>> {
        let value = self.get_string(&def.key)?;
        Ok(summary(def, &value, ringtones))
    }

    /// Store a new value and return its summary. Changes are always accepted.
    pub fn change(
        &self,
        def: &PreferenceDef,
        value: &str,
        ringtones: &dyn RingtoneCatalog,
    ) -> PreferenceResult<Option<String>> {
        self.set(&def.key, value)?;
        Ok(summary(def, value, ringtones))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{BuiltinRingtones, PreferenceError, SILENT_SUMMARY};
    use tempfile::TempDir;

    fn setup() -> (PreferenceStore, PreferenceCatalog) {
        let store = PreferenceStore::open_in_memory().unwrap();
        let catalog = PreferenceCatalog::builtin().unwrap();
        (store, catalog)
    }

    #[test]
    fn test_unset_reads_empty() {
        let (store, catalog) = setup();
        let tones = BuiltinRingtones::default();

        assert_eq!(store.get("sync_frequency").unwrap(), None);
        assert_eq!(store.get_string("sync_frequency").unwrap(), "");

        let ringtone = catalog.find("notifications_new_message_ringtone").unwrap();
        assert_eq!(
            store.bind_summary(ringtone, &tones).unwrap(),
            Some(SILENT_SUMMARY.to_string())
        );
        assert_eq!(store.get_or_default(ringtone).unwrap(), ringtone.default);
    }

    #[test]
    fn test_seed_defaults_once() {
        let (mut store, catalog) = setup();
        assert_eq!(store.seed_defaults(&catalog).unwrap(), 4);

        store.set("sync_frequency", "15").unwrap();
        assert_eq!(store.seed_defaults(&catalog).unwrap(), 0);
        assert_eq!(store.get_string("sync_frequency").unwrap(), "15");
    }

    #[test]
    fn test_seeded_summaries() {
        let (mut store, catalog) = setup();
        let tones = BuiltinRingtones::default();
        store.seed_defaults(&catalog).unwrap();

        let sync = catalog.find("sync_frequency").unwrap();
        assert_eq!(store.bind_summary(sync, &tones).unwrap(), Some("3 hours".to_string()));

        let ringtone = catalog.find("notifications_new_message_ringtone").unwrap();
        assert_eq!(
            store.bind_summary(ringtone, &tones).unwrap(),
            Some("Default notification sound".to_string())
        );
    }

    #[test]
    fn test_change_returns_summary() {
        let (store, catalog) = setup();
        let tones = BuiltinRingtones::default();
        let sync = catalog.find("sync_frequency").unwrap();

        assert_eq!(store.change(sync, "360", &tones).unwrap(), Some("6 hours".to_string()));
        assert_eq!(store.get_string("sync_frequency").unwrap(), "360");

        // Unlisted values are still stored
        assert_eq!(store.change(sync, "5", &tones).unwrap(), None);
        assert_eq!(store.get_string("sync_frequency").unwrap(), "5");
    }

    #[test]
    fn test_remove_and_all() {
        let (store, _) = setup();
        store.set("b", "2").unwrap();
        store.set("a", "1").unwrap();
        assert_eq!(
            store.all().unwrap(),
            vec![("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]
        );

        store.remove("a").unwrap();
        assert_eq!(store.all().unwrap().len(), 1);
        assert!(matches!(store.remove("a"), Err(PreferenceError::Database(_))));
    }

    #[test]
    fn test_values_persist_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.db");

        {
            let store = PreferenceStore::open(DatabaseConfig::with_path(&path)).unwrap();
            store.set("notifications_new_message", "false").unwrap();
        }

        let store = PreferenceStore::open(DatabaseConfig::with_path(&path)).unwrap();
        assert_eq!(store.get_string("notifications_new_message").unwrap(), "false");
        assert_eq!(store.database().path(), path.as_path());
    }

    #[test]
    fn test_changed_at_follows_writes() {
        let (store, _) = setup();
        assert!(store.changed_at("sync_frequency").unwrap().is_none());

        store.set("sync_frequency", "30").unwrap();
        let first = store.changed_at("sync_frequency").unwrap().unwrap();
        store.set("sync_frequency", "60").unwrap();
        let second = store.changed_at("sync_frequency").unwrap().unwrap();
        assert!(second >= first);
    }
}
