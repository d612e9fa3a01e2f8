//! Chess Friends - round-robin chess tournaments with clock handicaps
//!
//! This crate builds round-robin schedules with the circle method, gives the
//! stronger player of every game a rating-based clock handicap, records
//! results and aggregates standings.

pub mod config;
pub mod error;
pub mod handicap;
pub mod report;
pub mod roster;
pub mod schedule;
pub mod standings;
pub mod tournament;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, TournamentError};
pub use types::*;

// Re-export key components
pub use handicap::{HandicapPolicy, LinearHandicap};
pub use schedule::{Game, Matchday, RoundRobinScheduler, Schedule};
pub use standings::{Standings, StandingsAggregator, StandingsEntry};
pub use tournament::Tournament;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
