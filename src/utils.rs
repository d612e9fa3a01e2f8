//! Utility functions shared by the scheduler and the handicap rules

use uuid::Uuid;

/// Generate a new unique player ID
pub fn generate_player_id() -> Uuid {
    Uuid::new_v4()
}

/// Calculate the absolute difference between two ratings
pub fn rating_difference(rating1: u32, rating2: u32) -> u32 {
    rating1.abs_diff(rating2)
}

/// Number of combinations of two out of `n` players
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
