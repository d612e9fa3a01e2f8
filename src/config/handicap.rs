//! Clock handicap configuration

use serde::{Deserialize, Serialize};

/// Parameters of the linear clock handicap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandicapConfig {
    /// When disabled both sides get `base_minutes`
    pub enabled: bool,
    /// Minutes given to the lower-rated side
    pub base_minutes: u32,
    /// Rating points per minute taken from the higher-rated side
    pub divisor: u32,
    /// The higher-rated side never drops below this many minutes
    pub min_minutes: u32,
}

impl Default for HandicapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_minutes: 60,
            divisor: 40,
            min_minutes: 1,
        }
    }
}
