// Generation parameters and their validation
// Checked up front, before any audio is loaded

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by configuration validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("zone count must be at least 1, got {0}")]
    ZoneCount(u32),

    #[error("sensitivity must be within [0.0, 1.0], got {0}")]
    Sensitivity(f32),
}

/// Knobs controlling beatmap generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of target zones notes are assigned to
    pub zone_count: u32,

    /// Onset detection sensitivity [0.0, 1.0]
    /// 0.0 = keep every detected onset
    /// 1.0 = keep only the strongest onsets
    pub sensitivity: f32,

    /// Minimum gap between kept onsets in milliseconds
    pub min_gap_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            zone_count: 5,
            sensitivity: 0.5,
            min_gap_ms: 300,
        }
    }
}

impl GeneratorConfig {
    /// Validate all parameters, failing fast before audio is touched
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zone_count < 1 {
            return Err(ConfigError::ZoneCount(self.zone_count));
        }
        if !self.sensitivity.is_finite() || !(0.0..=1.0).contains(&self.sensitivity) {
            return Err(ConfigError::Sensitivity(self.sensitivity));
        }
        Ok(())
    }
}
