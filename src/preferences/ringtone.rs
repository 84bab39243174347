//! Ringtone lookup

/// Resolves ringtone URIs to display titles
pub trait RingtoneCatalog {
    /// Title for a URI, `None` if the ringtone can't be found
    fn title(&self, uri: &str) -> Option<String>;

    /// Known ringtone URIs, in selection order
    fn uris(&self) -> Vec<String>;
}

/// Fixed set of ringtones available without a platform media store
#[derive(Debug, Clone)]
pub struct BuiltinRingtones {
    tones: Vec<(&'static str, &'static str)>,
}

impl Default for BuiltinRingtones {
    fn default() -> Self {
        Self {
            tones: vec![
                ("content://settings/system/notification_sound", "Default notification sound"),
                ("content://media/internal/audio/media/12", "Chime"),
                ("content://media/internal/audio/media/27", "Sonar ping"),
            ],
        }
    }
}

impl RingtoneCatalog for BuiltinRingtones {
    fn title(&self, uri: &str) -> Option<String> {
        self.tones
            .iter()
            .find(|(u, _)| *u == uri)
            .map(|(_, title)| title.to_string())
    }

    fn uris(&self) -> Vec<String> {
        self.tones.iter().map(|(u, _)| u.to_string()).collect()
    }
}
