//! Preference Summaries
//!
//! The text shown under a preference for its current value, and the value
//! a preference moves to when it is activated.

use super::{PreferenceDef, PreferenceKind, RingtoneCatalog};

pub const SILENT_SUMMARY: &str = "Silent";

/// Summary for a preference holding `value`
pub fn summary(def: &PreferenceDef, value: &str, ringtones: &dyn RingtoneCatalog) -> Option<String> {
    match &def.kind {
        PreferenceKind::List { entries, values } => values
            .iter()
            .position(|v| v == value)
            .and_then(|i| entries.get(i))
            .cloned(),
        PreferenceKind::Ringtone if value.is_empty() => Some(SILENT_SUMMARY.to_string()),
        PreferenceKind::Ringtone => ringtones.title(value),
        PreferenceKind::Switch | PreferenceKind::Text => Some(value.to_string()),
    }
}

/// Value after activating a preference once.
///
/// Switches flip, lists and ringtones advance to the next choice and wrap.
/// Text has no successor and is returned unchanged.
pub fn next_value(def: &PreferenceDef, current: &str, ringtones: &dyn RingtoneCatalog) -> String {
    match &def.kind {
        PreferenceKind::Switch => (current != "true").to_string(),
        PreferenceKind::List { values, .. } => cycle(values, current),
        PreferenceKind::Ringtone => {
            // Silent is the first choice
            let mut choices = vec![String::new()];
            choices.extend(ringtones.uris());
            cycle(&choices, current)
        }
        PreferenceKind::Text => current.to_string(),
    }
}

fn cycle(choices: &[String], current: &str) -> String {
    if choices.is_empty() {
        return current.to_string();
    }

    let next = choices
        .iter()
        .position(|c| c == current)
        .map_or(0, |i| (i + 1) % choices.len());
    choices[next].clone()
}
