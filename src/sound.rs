//! Sound effect switch
//!
//! The game core decides *which* effect should play; actually producing audio
//! is left to whatever backend the presentation layer has.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Tile dropped on its slot
    Success,
    /// Tile dropped in the wrong place
    Error,
    /// Last tile placed
    Victory,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Success => "success chime",
            SoundEffect::Error => "gentle error",
            SoundEffect::Victory => "victory fanfare",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SoundEffects {
    enabled: bool,
}

impl Default for SoundEffects {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SoundEffects {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the switch, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        log::info!("Sound {}", self.label());
        self.enabled
    }

    /// "ON" / "OFF", for the sound button
    pub fn label(&self) -> &'static str {
        if self.enabled { "ON" } else { "OFF" }
    }

    /// Returns whether the effect should be heard
    pub fn play(&self, effect: SoundEffect) -> bool {
        if self.enabled {
            log::debug!("Play {}", effect.as_str());
        }
        self.enabled
    }
}
