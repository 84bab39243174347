//! Software Mixer
//!
//! Keeps stream levels in memory. Used when no platform audio service is
//! available.

use std::collections::HashMap;

use tracing::debug;

use super::{AudioStream, RingerMode, VolumeControl};

#[derive(Debug, Clone, Copy)]
struct StreamLevel {
    level: u32,
    max: u32,
}

/// In-memory volume control
#[derive(Debug, Clone)]
pub struct SoftwareMixer {
    streams: HashMap<AudioStream, StreamLevel>,
    ringer_mode: RingerMode,
}

impl Default for SoftwareMixer {
    fn default() -> Self {
        let mut streams = HashMap::new();
        streams.insert(AudioStream::Music, StreamLevel { level: 8, max: 15 });
        streams.insert(AudioStream::Alarm, StreamLevel { level: 6, max: 7 });
        streams.insert(AudioStream::Ring, StreamLevel { level: 5, max: 7 });

        Self {
            streams,
            ringer_mode: RingerMode::Normal,
        }
    }
}

impl SoftwareMixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ringer_mode(mut self, mode: RingerMode) -> Self {
        self.ringer_mode = mode;
        self
    }

    /// Configure a stream's level and maximum
    pub fn with_stream(mut self, stream: AudioStream, level: u32, max: u32) -> Self {
        self.streams.insert(stream, StreamLevel { level: level.min(max), max });
        self
    }
}

impl VolumeControl for SoftwareMixer {
    fn max_volume(&self, stream: AudioStream) -> u32 {
        self.streams.get(&stream).map_or(0, |s| s.max)
    }

    fn volume(&self, stream: AudioStream) -> u32 {
        self.streams.get(&stream).map_or(0, |s| s.level)
    }

    fn set_volume(&mut self, stream: AudioStream, level: u32) {
        if let Some(entry) = self.streams.get_mut(&stream) {
            entry.level = level.min(entry.max);
            debug!(stream = stream.as_str(), level = entry.level, "volume set");
        }
    }

    fn ringer_mode(&self) -> RingerMode {
        self.ringer_mode
    }
}
