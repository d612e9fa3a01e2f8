//! Common types used throughout the tournament core

use crate::error::{Result, TournamentError};
use crate::utils::generate_player_id;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for players
pub type PlayerId = Uuid;

/// A chess player taking part in the tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord")]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    rating: u32,
}

impl Player {
    /// Create a player with a freshly generated id
    pub fn new(first_name: &str, last_name: &str, rating: i64) -> Result<Self> {
        Self::with_id(generate_player_id(), first_name, last_name, rating)
    }

    /// Create a player with a caller-supplied id
    pub fn with_id(id: PlayerId, first_name: &str, last_name: &str, rating: i64) -> Result<Self> {
        Ok(Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            rating: validate_rating(rating)?,
        })
    }

    /// Full display name
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }
}

/// Serialized form of a player, checked on the way in
#[derive(Deserialize)]
struct PlayerRecord {
    id: PlayerId,
    first_name: String,
    last_name: String,
    rating: i64,
}

impl TryFrom<PlayerRecord> for Player {
    type Error = TournamentError;

    fn try_from(record: PlayerRecord) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            rating: checked_rating(record.rating)?,
        })
    }
}

/// Check that a rating is positive and fits the rating range
pub fn validate_rating(rating: i64) -> Result<u32> {
    Ok(checked_rating(rating)?)
}

fn checked_rating(rating: i64) -> std::result::Result<u32, TournamentError> {
    match u32::try_from(rating) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(TournamentError::InvalidRating { rating }),
    }
}

/// Outcome of a scheduled game
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    /// Not yet evaluated
    #[default]
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    /// Whether the game has a recorded outcome that counts towards standings
    pub fn is_evaluated(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "ONGOING"),
            GameResult::WhiteWins => write!(f, "WHITE_WINS"),
            GameResult::BlackWins => write!(f, "BLACK_WINS"),
            GameResult::Draw => write!(f, "DRAW"),
        }
    }
}

impl FromStr for GameResult {
    type Err = TournamentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "ONGOING" => Ok(GameResult::Ongoing),
            "WHITE_WINS" | "1_0" => Ok(GameResult::WhiteWins),
            "BLACK_WINS" | "0_1" => Ok(GameResult::BlackWins),
            "DRAW" | "1/2_1/2" => Ok(GameResult::Draw),
            other => Err(TournamentError::InvalidResult {
                reason: format!("unknown result '{}'", other),
            }),
        }
    }
}

impl TryFrom<u8> for GameResult {
    type Error = TournamentError;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(GameResult::Ongoing),
            1 => Ok(GameResult::WhiteWins),
            2 => Ok(GameResult::BlackWins),
            3 => Ok(GameResult::Draw),
            other => Err(TournamentError::InvalidResult {
                reason: format!("unknown result code {}", other),
            }),
        }
    }
}

/// Minutes on each side's clock for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockAllowance {
    pub white_minutes: u32,
    pub black_minutes: u32,
}

impl ClockAllowance {
    pub fn new(white_minutes: u32, black_minutes: u32) -> Self {
        Self {
            white_minutes,
            black_minutes,
        }
    }

    pub fn as_pair(&self) -> (u32, u32) {
        (self.white_minutes, self.black_minutes)
    }
}
