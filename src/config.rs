//! Scene configuration, loaded from JSON the way the page hands it over.

use serde::{Deserialize, Serialize};

use crate::core::{SimError, SimResult};
use crate::input::KeyBindings;

/// Surface size for headless scenes. A canvas reports its own size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { width: 300.0, height: 150.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub arena: ArenaConfig,
    /// Delay between loop iterations. `None` picks the design's default.
    pub frame_delay_ms: Option<u64>,
    pub bindings: KeyBindings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            frame_delay_ms: None,
            bindings: KeyBindings::default(),
        }
    }
}

/// Loop delay of the occupancy demo
pub const OCCUPANCY_FRAME_DELAY_MS: u64 = 5;
/// Loop delay of the force demo
pub const FORCE_FRAME_DELAY_MS: u64 = 50;

impl SceneConfig {
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(self.arena.width > 0.0 && self.arena.height > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "arena must be positive, got {}x{}",
                self.arena.width, self.arena.height
            )));
        }
        if !(self.bindings.step > 0.0) || !self.bindings.step.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "move step must be positive, got {}",
                self.bindings.step
            )));
        }
        Ok(())
    }

    pub fn frame_delay_or(&self, default_ms: u64) -> u64 {
        self.frame_delay_ms.unwrap_or(default_ms)
    }
}
