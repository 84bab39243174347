//! Audio Module
//!
//! Host volume control interface and an in-memory mixer.

pub mod mixer;

// Re-exports
pub use mixer::SoftwareMixer;

/// Audio stream whose volume can be controlled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioStream {
    Music,
    Alarm,
    Ring,
}

impl AudioStream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Alarm => "alarm",
            Self::Ring => "ring",
        }
    }
}

/// Device ringer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingerMode {
    #[default]
    Normal,
    Silent,
    Vibrate,
}

/// Volume control provided by the host platform
pub trait VolumeControl {
    /// Highest level accepted for a stream
    fn max_volume(&self, stream: AudioStream) -> u32;

    /// Current level of a stream
    fn volume(&self, stream: AudioStream) -> u32;

    /// Set the level of a stream
    fn set_volume(&mut self, stream: AudioStream, level: u32);

    fn ringer_mode(&self) -> RingerMode;
}
