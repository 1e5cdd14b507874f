//! Feedback preferences
//!
//! Volume, haptics and accessibility switches consulted by `CueFeedback`.
//! Stored as JSON by whichever host owns persistence.

use serde::{Deserialize, Serialize};

use crate::feedback::Cue;

/// Player feedback preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Haptics ===
    pub haptics: bool,

    // === Accessibility ===
    /// Reduced motion (softer haptics, no flashes)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            haptics: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Parse stored settings, falling back to defaults on bad input
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded feedback settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Ignoring unreadable settings: {e}");
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Effective sound volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Vibration strength for a cue (0 when haptics are off)
    pub fn haptic_strength(&self, cue: Cue) -> f32 {
        if !self.haptics {
            return 0.0;
        }
        let base = cue.haptic_weight();
        if self.reduced_motion { base * 0.5 } else { base }
    }
}
