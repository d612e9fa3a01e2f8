//! Plain-text rendering of schedules and standings

use crate::schedule::Schedule;
use crate::standings::Standings;
use crate::types::{Player, PlayerId};
use std::collections::HashMap;

fn index_roster(roster: &[Player]) -> HashMap<PlayerId, &Player> {
    roster.iter().map(|player| (player.id, player)).collect()
}

fn describe(players: &HashMap<PlayerId, &Player>, id: PlayerId, minutes: u32) -> String {
    match players.get(&id) {
        Some(player) => format!("{} ({}, {} min.)", player.name(), player.rating(), minutes),
        None => format!("{} (?, {} min.)", id, minutes),
    }
}

/// Render every matchday with its games, results and clock allowances
pub fn render_schedule(schedule: &Schedule) -> String {
    let players = index_roster(schedule.roster());
    let mut out = String::new();

    for matchday in schedule.matchdays() {
        out.push_str(&format!("--- Matchday {} ---\n", matchday.number));
        for game in &matchday.games {
            let clocks = game.clocks();
            out.push_str(&format!(
                "Game {}: ({}) {} vs. {}\n",
                game.index(),
                game.result(),
                describe(&players, game.white(), clocks.white_minutes),
                describe(&players, game.black(), clocks.black_minutes)
            ));
        }
        out.push('\n');
    }

    out
}

/// Render `Name: score (games)` lines in roster order
pub fn render_standings(roster: &[Player], standings: &Standings) -> String {
    let players = index_roster(roster);
    let mut out = String::new();

    for (id, entry) in standings.iter() {
        let name = players
            .get(&id)
            .map(|player| player.name())
            .unwrap_or_else(|| id.to_string());
        out.push_str(&format!(
            "{}: {} ({})\n",
            name, entry.score, entry.evaluated_games
        ));
    }

    out
}
