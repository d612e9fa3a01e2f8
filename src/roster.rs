//! Roster files
//!
//! A roster is a TOML document with one `[[players]]` table per player:
//!
//! ```toml
//! [[players]]
//! first_name = "John"
//! last_name = "Apple"
//! rating = 1450
//! ```
//!
//! An `id` (UUID) may be given to keep identities stable across runs;
//! otherwise one is generated.

use crate::error::{Result, TournamentError};
use crate::types::{Player, PlayerId};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    players: Vec<RosterEntry>,
}

#[derive(Debug, Deserialize)]
struct RosterEntry {
    id: Option<PlayerId>,
    first_name: String,
    last_name: String,
    rating: i64,
}

/// Parse a roster from TOML text
pub fn parse_roster(contents: &str) -> Result<Vec<Player>> {
    let file: RosterFile = toml::from_str(contents).map_err(|e| TournamentError::InvalidRoster {
        reason: e.to_string(),
    })?;

    file.players
        .into_iter()
        .map(|entry| match entry.id {
            Some(id) => Player::with_id(id, &entry.first_name, &entry.last_name, entry.rating),
            None => Player::new(&entry.first_name, &entry.last_name, entry.rating),
        })
        .collect()
}

/// Read a roster file from disk
pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    parse_roster(&contents).with_context(|| format!("Failed to load roster {}", path.display()))
}
