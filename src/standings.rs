//! Standings aggregation over a schedule
//!
//! Standings are never stored: they are recomputed from the schedule's
//! current results in a single pass every time they are asked for.

use crate::config::ScoringConfig;
use crate::schedule::Schedule;
use crate::types::{GameResult, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error};

/// Cumulative record of one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub score: u32,
    /// Games with a recorded (non-ongoing) result
    pub evaluated_games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Win,
    Draw,
    Loss,
}

impl StandingsEntry {
    fn record(&mut self, outcome: Outcome, scoring: &ScoringConfig) {
        self.evaluated_games += 1;
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.score += scoring.win;
            }
            Outcome::Draw => {
                self.draws += 1;
                self.score += scoring.draw;
            }
            Outcome::Loss => {
                self.losses += 1;
                self.score += scoring.loss;
            }
        }
    }
}

/// Per-player standings, iterated in roster order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    order: Vec<PlayerId>,
    entries: HashMap<PlayerId, StandingsEntry>,
}

impl Standings {
    /// Empty standings for the given players
    pub fn new(players: impl IntoIterator<Item = PlayerId>) -> Self {
        let order: Vec<PlayerId> = players.into_iter().collect();
        let entries = order
            .iter()
            .map(|id| (*id, StandingsEntry::default()))
            .collect();
        Self { order, entries }
    }

    pub fn get(&self, player: PlayerId) -> Option<&StandingsEntry> {
        self.entries.get(&player)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in roster order
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &StandingsEntry)> + '_ {
        self.order.iter().map(|id| (*id, &self.entries[id]))
    }

    /// Entries sorted by score, highest first. Equal scores keep roster order.
    pub fn ranked(&self) -> Vec<(PlayerId, StandingsEntry)> {
        let mut ranked: Vec<_> = self.iter().map(|(id, entry)| (id, *entry)).collect();
        ranked.sort_by(|a, b| b.1.score.cmp(&a.1.score));
        ranked
    }

    pub fn into_map(self) -> HashMap<PlayerId, StandingsEntry> {
        self.entries
    }
}

/// Computes standings from recorded results
#[derive(Debug, Clone, Default)]
pub struct StandingsAggregator {
    scoring: ScoringConfig,
}

impl StandingsAggregator {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Walk every game once and total up the evaluated results
    pub fn compute(&self, schedule: &Schedule) -> Standings {
        let mut standings = Standings::new(schedule.roster().iter().map(|p| p.id));
        let mut evaluated = 0usize;

        for game in schedule.games() {
            let (white, black) = match game.result() {
                GameResult::Ongoing => continue,
                GameResult::WhiteWins => (Outcome::Win, Outcome::Loss),
                GameResult::BlackWins => (Outcome::Loss, Outcome::Win),
                GameResult::Draw => (Outcome::Draw, Outcome::Draw),
            };
            evaluated += 1;

            for (player, outcome) in [(game.white(), white), (game.black(), black)] {
                match standings.entries.get_mut(&player) {
                    Some(entry) => entry.record(outcome, &self.scoring),
                    None => {
                        error!(
                            "Matchday {} game {} references player {} outside the roster",
                            game.matchday(),
                            game.index(),
                            player
                        );
                        debug_assert!(false, "schedule references unknown player {}", player);
                    }
                }
            }
        }

        debug!(
            "Computed standings for {} players from {} evaluated games",
            standings.len(),
            evaluated
        );
        standings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::RoundRobinScheduler;
    use crate::types::Player;

    fn four_player_schedule() -> (Vec<Player>, Schedule) {
        let players = vec![
            Player::new("A", "One", 1500).unwrap(),
            Player::new("B", "Two", 1500).unwrap(),
            Player::new("C", "Three", 1500).unwrap(),
            Player::new("D", "Four", 1500).unwrap(),
        ];
        let schedule = RoundRobinScheduler::default().generate(&players).unwrap();
        (players, schedule)
    }

    #[test]
    fn test_no_results_gives_zeroes() {
        let (players, schedule) = four_player_schedule();
        let standings = StandingsAggregator::default().compute(&schedule);

        assert_eq!(standings.len(), 4);
        for player in &players {
            assert_eq!(standings.get(player.id), Some(&StandingsEntry::default()));
        }
    }

    #[test]
    fn test_win_and_draw_points() {
        let (_, mut schedule) = four_player_schedule();
        schedule.set_result(1, 1, GameResult::WhiteWins).unwrap();
        schedule.set_result(1, 2, GameResult::Draw).unwrap();

        let standings = StandingsAggregator::default().compute(&schedule);
        let g1 = schedule.game(1, 1).unwrap();
        let g2 = schedule.game(1, 2).unwrap();

        let winner = standings.get(g1.white()).unwrap();
        assert_eq!((winner.score, winner.evaluated_games, winner.wins), (3, 1, 1));
        let loser = standings.get(g1.black()).unwrap();
        assert_eq!((loser.score, loser.evaluated_games, loser.losses), (0, 1, 1));

        for id in [g2.white(), g2.black()] {
            let entry = standings.get(id).unwrap();
            assert_eq!((entry.score, entry.evaluated_games, entry.draws), (1, 1, 1));
        }
    }

    #[test]
    fn test_custom_scoring() {
        let (_, mut schedule) = four_player_schedule();
        schedule.set_result(1, 1, GameResult::BlackWins).unwrap();
        schedule.set_result(1, 2, GameResult::Draw).unwrap();

        let aggregator = StandingsAggregator::new(ScoringConfig {
            win: 2,
            draw: 1,
            loss: 0,
        });
        let standings = aggregator.compute(&schedule);
        let g1 = schedule.game(1, 1).unwrap();
        assert_eq!(standings.get(g1.black()).unwrap().score, 2);
        assert_eq!(standings.get(g1.white()).unwrap().score, 0);
    }

    #[test]
    fn test_reverting_to_ongoing_removes_game() {
        let (_, mut schedule) = four_player_schedule();
        schedule.set_result(2, 1, GameResult::WhiteWins).unwrap();
        schedule.set_result(2, 1, GameResult::Ongoing).unwrap();

        let standings = StandingsAggregator::default().compute(&schedule);
        assert!(standings.iter().all(|(_, e)| *e == StandingsEntry::default()));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let (_, mut schedule) = four_player_schedule();
        schedule.set_result(1, 1, GameResult::Draw).unwrap();
        schedule.set_result(3, 2, GameResult::BlackWins).unwrap();

        let aggregator = StandingsAggregator::default();
        assert_eq!(aggregator.compute(&schedule), aggregator.compute(&schedule));
    }

    #[test]
    fn test_ranked_orders_by_score() {
        let (players, mut schedule) = four_player_schedule();
        // Matchday 1 game 1 is the anchor (players[0]) with white
        schedule.set_result(1, 1, GameResult::BlackWins).unwrap();

        let standings = StandingsAggregator::default().compute(&schedule);
        let ranked = standings.ranked();
        let winner = schedule.game(1, 1).unwrap().black();
        assert_eq!(ranked[0].0, winner);
        assert_eq!(ranked[0].1.score, 3);
        // Remaining zero scores keep roster order, anchor included
        let rest: Vec<PlayerId> = ranked[1..].iter().map(|(id, _)| *id).collect();
        let expected: Vec<PlayerId> = players
            .iter()
            .map(|p| p.id)
            .filter(|id| *id != winner)
            .collect();
        assert_eq!(rest, expected);
    }
}
