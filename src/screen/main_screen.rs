//! Main Screen
//!
//! Volume slider, mute and vibration switches, start/stop buttons and the
//! settings toggle. Slider changes are forwarded to the volume control.

use tracing::debug;

use crate::audio::{AudioStream, RingerMode, VolumeControl};

use super::{EventOutcome, ScreenEvent};

/// Volume slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    pub value: u32,
    pub max: u32,
    pub activated: bool,
    pub visible: bool,
}

impl Slider {
    /// Fill ratio for rendering
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(self.value) / f64::from(self.max)
        }
    }
}

/// On/off switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub checked: bool,
    pub visible: bool,
}

/// Main screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainScreen {
    pub volume: Slider,
    pub mute: Toggle,
    pub vibration: Toggle,
    pub start_visible: bool,
    pub stop_visible: bool,
}

impl MainScreen {
    /// Build the initial controls from the current audio state
    pub fn new(audio: &dyn VolumeControl) -> Self {
        let ringer = audio.ringer_mode();

        Self {
            volume: Slider {
                value: audio.volume(AudioStream::Music),
                max: audio.max_volume(AudioStream::Music),
                activated: false,
                visible: false,
            },
            mute: Toggle {
                checked: ringer == RingerMode::Silent,
                visible: false,
            },
            vibration: Toggle {
                checked: ringer == RingerMode::Vibrate,
                visible: false,
            },
            start_visible: true,
            stop_visible: false,
        }
    }

    /// Whether the settings panel is showing
    pub fn settings_open(&self) -> bool {
        self.volume.visible
    }

    pub fn handle(&mut self, event: ScreenEvent, audio: &mut dyn VolumeControl) -> EventOutcome {
        debug!(?event, "screen event");

        match event {
            ScreenEvent::ToggleSettings => {
                self.toggle_settings(audio);
                EventOutcome::Updated
            }
            ScreenEvent::VolumeChanged(level) => {
                self.set_volume(level, audio);
                EventOutcome::Updated
            }
            ScreenEvent::VolumeUp | ScreenEvent::VolumeDown if !self.volume.activated => {
                EventOutcome::Ignored
            }
            ScreenEvent::VolumeUp => {
                let level = self.volume.value.saturating_add(1).min(self.volume.max);
                self.set_volume(level, audio);
                EventOutcome::Updated
            }
            ScreenEvent::VolumeDown => {
                let level = self.volume.value.saturating_sub(1);
                self.set_volume(level, audio);
                EventOutcome::Updated
            }
            ScreenEvent::ToggleMute => {
                self.mute.checked = !self.mute.checked;
                EventOutcome::Updated
            }
            ScreenEvent::ToggleVibration => {
                self.vibration.checked = !self.vibration.checked;
                EventOutcome::Updated
            }
            ScreenEvent::Start => {
                if self.stop_visible {
                    return EventOutcome::Ignored;
                }
                self.stop_visible = true;
                self.start_visible = false;
                EventOutcome::Updated
            }
            ScreenEvent::Stop => {
                if self.start_visible {
                    return EventOutcome::Ignored;
                }
                self.start_visible = true;
                self.stop_visible = false;
                EventOutcome::Updated
            }
            ScreenEvent::ClearAlert => EventOutcome::NothingToClear,
        }
    }

    fn toggle_settings(&mut self, audio: &mut dyn VolumeControl) {
        self.volume.value = audio.volume(AudioStream::Alarm).min(self.volume.max);

        if !self.volume.visible {
            self.volume.activated = true;
            self.volume.visible = true;
            self.mute.visible = true;
            self.vibration.visible = true;
        } else {
            self.volume.activated = false;
            self.volume.visible = false;
            audio.set_volume(AudioStream::Alarm, self.volume.value);
            audio.set_volume(AudioStream::Ring, self.volume.value);
            self.mute.visible = false;
            self.vibration.visible = false;
        }
    }

    fn set_volume(&mut self, level: u32, audio: &mut dyn VolumeControl) {
        self.volume.value = level.min(self.volume.max);
        audio.set_volume(AudioStream::Alarm, self.volume.value);
    }
}
