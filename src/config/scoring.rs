//! Standings scoring configuration

use serde::{Deserialize, Serialize};

/// Points awarded per game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}
