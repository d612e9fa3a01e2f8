//! Clock handicaps derived from player ratings
//!
//! The stronger player pays for the rating gap with clock time: one minute
//! per `divisor` rating points, never below the configured minimum. The
//! weaker (or equal) player keeps the full base time.

use crate::config::{validate_handicap, HandicapConfig};
use crate::error::{Result, TournamentError};
use crate::types::validate_rating;
use crate::utils::rating_difference;
use tracing::debug;

/// Trait for deriving the pair of clock allowances for a game
pub trait HandicapPolicy: Send + Sync {
    /// Minutes for side A and side B, in argument order
    fn assign(&self, rating_a: i64, rating_b: i64) -> Result<(u32, u32)>;

    /// Current configuration
    fn config(&self) -> HandicapConfig;
}

/// Linear handicap with a floor on the stronger side's time
#[derive(Debug, Clone)]
pub struct LinearHandicap {
    config: HandicapConfig,
}

/// Reject parameters that could put a clock below the floor
fn checked(config: HandicapConfig) -> Result<HandicapConfig> {
    validate_handicap(&config).map_err(|e| TournamentError::Configuration {
        message: e.to_string(),
    })?;
    Ok(config)
}

impl LinearHandicap {
    pub fn new(config: HandicapConfig) -> Result<Self> {
        Ok(Self {
            config: checked(config)?,
        })
    }
}

impl Default for LinearHandicap {
    fn default() -> Self {
        Self {
            config: HandicapConfig::default(),
        }
    }
}

impl HandicapPolicy for LinearHandicap {
    fn assign(&self, rating_a: i64, rating_b: i64) -> Result<(u32, u32)> {
        let a = validate_rating(rating_a)?;
        let b = validate_rating(rating_b)?;

        let HandicapConfig {
            base_minutes,
            divisor,
            min_minutes,
            ..
        } = self.config;

        let reduction = rating_difference(a, b) / divisor;
        let reduced = base_minutes.saturating_sub(reduction).max(min_minutes);

        let minutes = match a.cmp(&b) {
            std::cmp::Ordering::Greater => (reduced, base_minutes),
            std::cmp::Ordering::Less => (base_minutes, reduced),
            std::cmp::Ordering::Equal => (base_minutes, base_minutes),
        };

        debug!(
            "Handicap for ratings {} vs {}: {} vs {} minutes",
            a, b, minutes.0, minutes.1
        );
        Ok(minutes)
    }

    fn config(&self) -> HandicapConfig {
        self.config
    }
}

/// Both sides always get the base time
#[derive(Debug, Clone)]
pub struct EqualTime {
    config: HandicapConfig,
}

impl EqualTime {
    pub fn new(base_minutes: u32) -> Result<Self> {
        Self::with_config(HandicapConfig {
            base_minutes,
            ..HandicapConfig::default()
        })
    }

    fn with_config(config: HandicapConfig) -> Result<Self> {
        Ok(Self {
            config: HandicapConfig {
                enabled: false,
                ..checked(config)?
            },
        })
    }
}

impl HandicapPolicy for EqualTime {
    fn assign(&self, rating_a: i64, rating_b: i64) -> Result<(u32, u32)> {
        validate_rating(rating_a)?;
        validate_rating(rating_b)?;
        Ok((self.config.base_minutes, self.config.base_minutes))
    }

    fn config(&self) -> HandicapConfig {
        self.config
    }
}

/// Build the policy described by a handicap configuration
pub fn policy_from_config(config: HandicapConfig) -> Result<Box<dyn HandicapPolicy>> {
    let config = checked(config)?;
    if config.enabled {
        Ok(Box::new(LinearHandicap::new(config)?))
    } else {
        Ok(Box::new(EqualTime::with_config(config)?))
    }
}

/// Compute the handicap with explicit base time and divisor and the default
/// one-minute floor
pub fn assign(rating_a: i64, rating_b: i64, base_minutes: u32, divisor: u32) -> Result<(u32, u32)> {
    LinearHandicap::new(HandicapConfig {
        base_minutes,
        divisor,
        ..HandicapConfig::default()
    })?
    .assign(rating_a, rating_b)
}
