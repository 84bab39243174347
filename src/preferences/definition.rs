//! Preference Definitions
//!
//! Screens and entries loaded from the embedded resource file.

use serde::Deserialize;

use super::{PreferenceError, PreferenceResult};

const BUILTIN_RESOURCE: &str = include_str!("../../resources/preferences.json");

/// What kind of value a preference holds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PreferenceKind {
    /// "true" / "false"
    Switch,
    /// Free text
    Text,
    /// One of `values`, shown as the entry at the same index
    List { entries: Vec<String>, values: Vec<String> },
    /// Ringtone URI, empty for silent
    Ringtone,
}

impl PreferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Text => "text",
            Self::List { .. } => "list",
            Self::Ringtone => "ringtone",
        }
    }
}

/// A single preference entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreferenceDef {
    pub key: String,
    pub title: String,
    pub kind: PreferenceKind,
    pub default: String,
}

/// A group of preferences shown together
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreferenceScreen {
    pub id: String,
    pub title: String,
    pub preferences: Vec<PreferenceDef>,
}

/// All preference screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceCatalog {
    screens: Vec<PreferenceScreen>,
}

impl PreferenceCatalog {
    /// Load the screens shipped with the application
    pub fn builtin() -> PreferenceResult<Self> {
        Self::from_json(BUILTIN_RESOURCE)
    }

    pub fn from_json(json: &str) -> PreferenceResult<Self> {
        let screens: Vec<PreferenceScreen> = serde_json::from_str(json)?;
        Ok(Self { screens })
    }

    pub fn screens(&self) -> &[PreferenceScreen] {
        &self.screens
    }

    /// All entries across screens, in display order
    pub fn iter(&self) -> impl Iterator<Item = &PreferenceDef> {
        self.screens.iter().flat_map(|s| s.preferences.iter())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, key: &str) -> PreferenceResult<&PreferenceDef> {
        self.iter()
            .find(|p| p.key == key)
            .ok_or_else(|| PreferenceError::Unknown(key.to_string()))
    }

    /// Entry at a flat display index
    pub fn get(&self, index: usize) -> Option<&PreferenceDef> {
        self.iter().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_screens() {
        let catalog = PreferenceCatalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.screens().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["notifications", "data_sync"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_builtin_sync_frequency() {
        let catalog = PreferenceCatalog::builtin().unwrap();
        let def = catalog.find("sync_frequency").unwrap();
        assert_eq!(def.default, "180");

        match &def.kind {
            PreferenceKind::List { entries, values } => {
                assert_eq!(entries.len(), values.len());
                assert_eq!(entries[3], "3 hours");
                assert_eq!(values[5], "-1");
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_find_unknown() {
        let catalog = PreferenceCatalog::builtin().unwrap();
        assert!(matches!(catalog.find("missing"), Err(PreferenceError::Unknown(_))));
    }

    #[test]
    fn test_get_by_index() {
        let catalog = PreferenceCatalog::builtin().unwrap();
        assert_eq!(catalog.get(0).unwrap().key, "notifications_new_message");
        assert_eq!(catalog.get(3).unwrap().key, "sync_frequency");
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn test_invalid_resource() {
        let result = PreferenceCatalog::from_json(r#"[{"id": "x"}]"#);
        assert!(matches!(result, Err(PreferenceError::InvalidResource(_))));
    }
}
