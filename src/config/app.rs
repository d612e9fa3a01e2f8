//! Main application configuration
//!
//! This module defines the top-level configuration for the tournament tools,
//! including environment variable loading, TOML file loading and validation.

use super::{HandicapConfig, ScoringConfig};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub handicap: HandicapConfig,
    pub scoring: ScoringConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "chess-friends".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("Invalid {} value: {}", key, value)),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Handicap settings
        if let Some(enabled) = parse_var("HANDICAP_ENABLED")? {
            self.handicap.enabled = enabled;
        }
        if let Some(base) = parse_var("HANDICAP_BASE_MINUTES")? {
            self.handicap.base_minutes = base;
        }
        if let Some(divisor) = parse_var("HANDICAP_DIVISOR")? {
            self.handicap.divisor = divisor;
        }
        if let Some(min) = parse_var("HANDICAP_MIN_MINUTES")? {
            self.handicap.min_minutes = min;
        }

        // Scoring settings
        if let Some(win) = parse_var("SCORE_WIN")? {
            self.scoring.win = win;
        }
        if let Some(draw) = parse_var("SCORE_DRAW")? {
            self.scoring.draw = draw;
        }
        if let Some(loss) = parse_var("SCORE_LOSS")? {
            self.scoring.loss = loss;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    validate_handicap(&config.handicap)?;
    validate_scoring(&config.scoring)?;

    Ok(())
}

/// Validate the points table: win > draw >= loss
pub fn validate_scoring(scoring: &ScoringConfig) -> Result<()> {
    if scoring.win <= scoring.draw {
        return Err(anyhow!("A win must be worth more points than a draw"));
    }
    if scoring.draw < scoring.loss {
        return Err(anyhow!("A draw cannot be worth fewer points than a loss"));
    }
    Ok(())
}

/// Validate the handicap parameters on their own
pub fn validate_handicap(handicap: &HandicapConfig) -> Result<()> {
    if handicap.divisor == 0 {
        return Err(anyhow!("Handicap divisor must be greater than 0"));
    }
    if handicap.min_minutes == 0 {
        return Err(anyhow!("Minimum clock time must be at least 1 minute"));
    }
    if handicap.base_minutes < handicap.min_minutes {
        return Err(anyhow!(
            "Base time {} is below the minimum clock time {}",
            handicap.base_minutes,
            handicap.min_minutes
        ));
    }
    Ok(())
}
