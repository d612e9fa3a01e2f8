//! Shared rosters for integration testing

#![allow(dead_code)]

use chess_friends::types::{Player, PlayerId};
use chess_friends::Schedule;

/// The eight-player club roster, in seeding order
pub fn club_roster() -> Vec<Player> {
    [
        ("John", "Apple", 1450),
        ("Jane", "Flowers", 1750),
        ("Michael", "Hunter", 1200),
        ("Emily", "Smith", 1600),
        ("David", "Porter", 1300),
        ("Sarah", "Waters", 1900),
        ("Robert", "Peters", 1550),
        ("Laura", "Howard", 1400),
    ]
    .into_iter()
    .map(|(first, last, rating)| Player::new(first, last, rating).expect("valid test player"))
    .collect()
}

/// A roster of `n` players with spread-out ratings
pub fn numbered_roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| {
            Player::new("Player", &format!("{:02}", i), 1000 + 37 * i as i64)
                .expect("valid test player")
        })
        .collect()
}

/// Find a roster player by display name
pub fn by_name<'a>(players: &'a [Player], name: &str) -> &'a Player {
    players
        .iter()
        .find(|p| p.name() == name)
        .unwrap_or_else(|| panic!("no player named {}", name))
}

/// Number of games in which the player has the white pieces
pub fn white_count(schedule: &Schedule, player: PlayerId) -> usize {
    schedule.games().filter(|g| g.white() == player).count()
}

/// Number of games the player takes part in
pub fn game_count(schedule: &Schedule, player: PlayerId) -> usize {
    schedule.games().filter(|g| g.involves(player)).count()
}
