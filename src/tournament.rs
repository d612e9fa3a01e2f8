//! Tournament aggregate tying roster, schedule, handicap and scoring together

use crate::config::{
    validate_handicap, validate_scoring, AppConfig, HandicapConfig, ScoringConfig,
};
use crate::error::{Result, TournamentError};
use crate::schedule::{RoundRobinScheduler, Schedule};
use crate::standings::{Standings, StandingsAggregator};
use crate::types::{GameResult, Player};
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// A round-robin tournament and everything recorded about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    players: Vec<Player>,
    schedule: Option<Schedule>,
    handicap: HandicapConfig,
    scoring: ScoringConfig,
}

impl Tournament {
    /// Create an empty tournament. An end date before the start date is
    /// rejected with `InvalidDates`, even though dates are only bookkeeping.
    pub fn new(name: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        if end_date < start_date {
            return Err(TournamentError::InvalidDates {
                start: start_date.to_string(),
                end: end_date.to_string(),
            }
            .into());
        }

        Ok(Self {
            name: name.to_string(),
            start_date,
            end_date,
            players: Vec::new(),
            schedule: None,
            handicap: HandicapConfig::default(),
            scoring: ScoringConfig::default(),
        })
    }

    /// Use the handicap and scoring settings of an application config
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.handicap = config.handicap;
        self.scoring = config.scoring;
        self
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Add a player to the roster; the roster is frozen once scheduled
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.schedule.is_some() {
            return Err(TournamentError::InvalidRoster {
                reason: format!(
                    "cannot add {} after the schedule has been generated",
                    player.name()
                ),
            }
            .into());
        }
        self.players.push(player);
        Ok(())
    }

    pub fn add_players(&mut self, players: impl IntoIterator<Item = Player>) -> Result<()> {
        for player in players {
            self.add_player(player)?;
        }
        Ok(())
    }

    /// Build the round-robin schedule for the current roster
    pub fn generate_schedule(&mut self) -> Result<&Schedule> {
        if let Some(existing) = &self.schedule {
            if existing.games().any(|game| game.result().is_evaluated()) {
                warn!(
                    "Regenerating schedule for '{}' discards recorded results",
                    self.name
                );
            }
        }

        let scheduler = RoundRobinScheduler::with_config(self.handicap)?;
        let schedule = scheduler.generate(&self.players)?;
        info!(
            "Tournament '{}' ({} to {}) scheduled",
            self.name, self.start_date, self.end_date
        );
        Ok(self.schedule.insert(schedule))
    }

    /// Record a game result by 1-based matchday and game number
    pub fn set_result(&mut self, matchday: usize, game: usize, result: GameResult) -> Result<()> {
        self.schedule
            .as_mut()
            .ok_or_else(|| TournamentError::InvalidResult {
                reason: "no schedule has been generated".to_string(),
            })?
            .set_result(matchday, game, result)
    }

    pub fn white_wins(&mut self, matchday: usize, game: usize) -> Result<()> {
        self.set_result(matchday, game, GameResult::WhiteWins)
    }

    pub fn black_wins(&mut self, matchday: usize, game: usize) -> Result<()> {
        self.set_result(matchday, game, GameResult::BlackWins)
    }

    pub fn draw(&mut self, matchday: usize, game: usize) -> Result<()> {
        self.set_result(matchday, game, GameResult::Draw)
    }

    /// Current standings; all zero until a schedule exists
    pub fn standings(&self) -> Standings {
        match &self.schedule {
            Some(schedule) => StandingsAggregator::new(self.scoring).compute(schedule),
            None => Standings::new(self.players.iter().map(|p| p.id)),
        }
    }

    /// Save the tournament as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| TournamentError::Persistence {
            message: format!("Failed to serialize: {}", e),
        })?;
        std::fs::write(path, json).map_err(|e| TournamentError::Persistence {
            message: format!("Failed to write {}: {}", path.display(), e),
        })?;
        info!("Saved tournament '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Load a tournament saved with [`Tournament::save`]
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::Persistence {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&contents).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Parse and re-validate a serialized tournament
    pub fn from_json(contents: &str) -> Result<Self> {
        let tournament: Tournament =
            serde_json::from_str(contents).map_err(|e| TournamentError::Persistence {
                message: format!("Failed to parse: {}", e),
            })?;

        if tournament.end_date < tournament.start_date {
            return Err(TournamentError::InvalidDates {
                start: tournament.start_date.to_string(),
                end: tournament.end_date.to_string(),
            }
            .into());
        }
        validate_handicap(&tournament.handicap).map_err(|e| TournamentError::Persistence {
            message: format!("Stored handicap settings are invalid: {}", e),
        })?;
        validate_scoring(&tournament.scoring).map_err(|e| TournamentError::Persistence {
            message: format!("Stored scoring settings are invalid: {}", e),
        })?;
        if let Some(schedule) = &tournament.schedule {
            schedule.validate().map_err(|e| TournamentError::Persistence {
                message: format!("Stored schedule is inconsistent: {}", e),
            })?;
            if schedule.roster() != tournament.players.as_slice() {
                return Err(TournamentError::Persistence {
                    message: "Stored schedule roster does not match the tournament roster"
                        .to_string(),
                }
                .into());
            }
        }

        Ok(tournament)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn small_tournament() -> Tournament {
        let mut tournament = Tournament::new("Club", date(2025, 5, 1), date(2025, 9, 1)).unwrap();
        tournament
            .add_players([
                Player::new("A", "One", 1500).unwrap(),
                Player::new("B", "Two", 1580).unwrap(),
                Player::new("C", "Three", 1420).unwrap(),
            ])
            .unwrap();
        tournament
    }

    #[test]
    fn test_end_before_start_rejected() {
        let err = Tournament::new("Backwards", date(2025, 9, 1), date(2025, 5, 30)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TournamentError>(),
            Some(TournamentError::InvalidDates { .. })
        ));
    }

    #[test]
    fn test_roster_frozen_after_scheduling() {
        let mut tournament = small_tournament();
        tournament.generate_schedule().unwrap();
        let err = tournament
            .add_player(Player::new("Late", "Comer", 1500).unwrap())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TournamentError>(),
            Some(TournamentError::InvalidRoster { .. })
        ));
    }

    #[test]
    fn test_result_before_schedule_rejected() {
        let mut tournament = small_tournament();
        let err = tournament.white_wins(1, 1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TournamentError>(),
            Some(TournamentError::InvalidResult { .. })
        ));
        assert!(tournament.standings().iter().all(|(_, e)| e.score == 0));
    }

    #[test]
    fn test_convenience_setters() {
        let mut tournament = small_tournament();
        tournament.generate_schedule().unwrap();
        tournament.white_wins(1, 1).unwrap();
        tournament.black_wins(2, 1).unwrap();
        tournament.draw(3, 1).unwrap();

        let schedule = tournament.schedule().unwrap();
        assert_eq!(schedule.game(1, 1).unwrap().result(), GameResult::WhiteWins);
        assert_eq!(schedule.game(2, 1).unwrap().result(), GameResult::BlackWins);
        assert_eq!(schedule.game(3, 1).unwrap().result(), GameResult::Draw);

        let total: u32 = tournament.standings().iter().map(|(_, e)| e.score).sum();
        assert_eq!(total, 3 + 3 + 2);
    }

    #[test]
    fn test_config_is_applied() {
        let mut config = AppConfig::default();
        config.handicap.enabled = false;
        config.scoring.win = 2;

        let mut tournament = small_tournament().with_config(&config);
        tournament.generate_schedule().unwrap();
        tournament.white_wins(1, 1).unwrap();

        let schedule = tournament.schedule().unwrap();
        assert!(schedule
            .games()
            .all(|game| game.clocks().as_pair() == (60, 60)));
        let winner = schedule.game(1, 1).unwrap().white();
        assert_eq!(tournament.standings().get(winner).unwrap().score, 2);
    }

    #[test]
    fn test_json_round_trip_keeps_results() {
        let mut tournament = small_tournament();
        tournament.generate_schedule().unwrap();
        tournament.draw(1, 1).unwrap();

        let json = serde_json::to_string(&tournament).unwrap();
        let restored = Tournament::from_json(&json).unwrap();
        assert_eq!(restored, tournament);
        assert_eq!(restored.standings(), tournament.standings());
    }

    #[test]
    fn test_tampered_json_rejected() {
        let mut tournament = small_tournament();
        tournament.generate_schedule().unwrap();
        let mut value = serde_json::to_value(&tournament).unwrap();
        value["players"].as_array_mut().unwrap().pop();

        let err = Tournament::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TournamentError>(),
            Some(TournamentError::Persistence { .. })
        ));
    }

    fn assert_persistence_error(json: &str) {
        let err = Tournament::from_json(json).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TournamentError>(),
            Some(TournamentError::Persistence { .. })
        ));
    }

    #[test]
    fn test_tampered_settings_rejected() {
        let tournament = small_tournament();

        let mut value = serde_json::to_value(&tournament).unwrap();
        value["handicap"]["enabled"] = serde_json::json!(false);
        value["handicap"]["base_minutes"] = serde_json::json!(0);
        assert_persistence_error(&value.to_string());

        let mut value = serde_json::to_value(&tournament).unwrap();
        value["scoring"]["win"] = serde_json::json!(1);
        value["scoring"]["draw"] = serde_json::json!(1);
        assert_persistence_error(&value.to_string());
    }

    #[test]
    fn test_tampered_rating_rejected_before_scheduling() {
        let tournament = small_tournament();
        let mut value = serde_json::to_value(&tournament).unwrap();
        value["players"][1]["rating"] = serde_json::json!(0);
        assert_persistence_error(&value.to_string());
    }
}
