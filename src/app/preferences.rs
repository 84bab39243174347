//! Preference panel state: selection, summaries and value changes.

use crate::db::DatabaseConfig;
use crate::preferences::{
    next_value, BuiltinRingtones, PreferenceCatalog, PreferenceDef, PreferenceResult, PreferenceStore,
};
use crate::ui::PreferenceItem;

pub struct PreferencesPanel {
    catalog: PreferenceCatalog,
    store: PreferenceStore,
    ringtones: BuiltinRingtones,
    items: Vec<PreferenceItem>,
    selected: usize,
}

impl PreferencesPanel {
    pub fn open(config: DatabaseConfig) -> PreferenceResult<Self> {
        let catalog = PreferenceCatalog::builtin()?;
        let mut store = PreferenceStore::open(config)?;
        store.seed_defaults(&catalog)?;

        let mut panel = Self {
            catalog,
            store,
            ringtones: BuiltinRingtones::default(),
            items: Vec::new(),
            selected: 0,
        };
        panel.refresh()?;
        Ok(panel)
    }

    /// Rebuild display rows from stored values
    pub fn refresh(&mut self) -> PreferenceResult<()> {
        let mut items = Vec::with_capacity(self.catalog.len());
        for screen in self.catalog.screens() {
            for def in &screen.preferences {
                items.push(PreferenceItem {
                    section: screen.title.clone(),
                    key: def.key.clone(),
                    title: def.title.clone(),
                    summary: self.store.bind_summary(def, &self.ringtones)?,
                    changed_at: self.store.changed_at(&def.key)?,
                });
            }
        }
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        Ok(())
    }

    pub fn items(&self) -> &[PreferenceItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn selected_def(&self) -> Option<&PreferenceDef> {
        self.catalog.get(self.selected)
    }

    pub fn selected_value(&self) -> PreferenceResult<String> {
        match self.selected_def() {
            Some(def) => self.store.get_string(&def.key),
            None => Ok(String::new()),
        }
    }

    /// Advance the selected preference to its next value.
    /// Returns the new summary.
    pub fn activate(&mut self) -> PreferenceResult<Option<String>> {
        let Some(def) = self.catalog.get(self.selected) else {
            return Ok(None);
        };
        let current = self.store.get_string(&def.key)?;
        let next = next_value(def, &current, &self.ringtones);
        self.change_selected(&next)
    }

    /// Store a value for the selected preference. Returns the new summary.
    pub fn change_selected(&mut self, value: &str) -> PreferenceResult<Option<String>> {
        let Some(def) = self.catalog.get(self.selected) else {
            return Ok(None);
        };
        let summary = self.store.change(def, value, &self.ringtones)?;
        let changed_at = self.store.changed_at(&def.key)?;
        if let Some(item) = self.items.get_mut(self.selected) {
            item.summary = summary.clone();
            item.changed_at = changed_at;
        }
        Ok(summary)
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> PreferencesPanel {
        PreferencesPanel::open(DatabaseConfig::in_memory()).unwrap()
    }

    #[test]
    fn test_open_seeds_and_summarizes() {
        let panel = panel();
        assert_eq!(panel.items().len(), 4);
        assert_eq!(panel.items()[0].section, "Notifications");
        assert_eq!(panel.items()[0].summary.as_deref(), Some("true"));
        assert_eq!(panel.items()[3].summary.as_deref(), Some("3 hours"));
        assert!(panel.items().iter().all(|item| item.changed_at.is_some()));
    }

    #[test]
    fn test_selection_bounds() {
        let mut panel = panel();
        panel.move_up();
        assert_eq!(panel.selected(), 0);

        for _ in 0..10 {
            panel.move_down();
        }
        assert_eq!(panel.selected(), 3);
        assert_eq!(panel.selected_def().unwrap().key, "sync_frequency");
    }

    #[test]
    fn test_activate_cycles_list() {
        let mut panel = panel();
        for _ in 0..3 {
            panel.move_down();
        }

        assert_eq!(panel.activate().unwrap().as_deref(), Some("6 hours"));
        assert_eq!(panel.activate().unwrap().as_deref(), Some("Never"));
        assert_eq!(panel.selected_value().unwrap(), "-1");
        assert_eq!(panel.items()[3].summary.as_deref(), Some("Never"));
    }

    #[test]
    fn test_activate_flips_switch() {
        let mut panel = panel();
        assert_eq!(panel.activate().unwrap().as_deref(), Some("false"));
        assert_eq!(panel.store().get_string("notifications_new_message").unwrap(), "false");
    }

    #[test]
    fn test_change_selected_unlisted_value() {
        let mut panel = panel();
        for _ in 0..3 {
            panel.move_down();
        }

        assert_eq!(panel.change_selected("7").unwrap(), None);
        assert_eq!(panel.items()[3].summary, None);
    }
}
