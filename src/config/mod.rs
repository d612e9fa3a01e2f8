//! Configuration management for the tournament core
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values.

pub mod app;
pub mod handicap;
pub mod scoring;

// Re-export commonly used types
pub use app::{validate_config, validate_handicap, validate_scoring, AppConfig, ServiceSettings};
pub use handicap::HandicapConfig;
pub use scoring::ScoringConfig;
