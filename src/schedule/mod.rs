//! Tournament schedule: matchdays, games and result recording
//!
//! A `Schedule` is produced once by the round-robin scheduler and owned by
//! the caller afterwards. The only mutation it allows is recording a game
//! result; pairings and clock allowances are fixed at creation.

pub mod round_robin;

pub use round_robin::RoundRobinScheduler;

use crate::error::{Result, TournamentError};
use crate::types::{ClockAllowance, GameResult, Player, PlayerId};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// A scheduled pairing for one matchday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    matchday: usize,
    index: usize,
    white: PlayerId,
    black: PlayerId,
    clocks: ClockAllowance,
    result: GameResult,
}

impl Game {
    pub(crate) fn new(
        matchday: usize,
        index: usize,
        white: PlayerId,
        black: PlayerId,
        clocks: ClockAllowance,
    ) -> Self {
        Self {
            matchday,
            index,
            white,
            black,
            clocks,
            result: GameResult::Ongoing,
        }
    }

    /// 1-based matchday number
    pub fn matchday(&self) -> usize {
        self.matchday
    }

    /// 1-based position within the matchday
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn white(&self) -> PlayerId {
        self.white
    }

    pub fn black(&self) -> PlayerId {
        self.black
    }

    pub fn clocks(&self) -> ClockAllowance {
        self.clocks
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.white == player || self.black == player
    }
}

/// One round of games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchday {
    pub number: usize,
    pub games: Vec<Game>,
}

impl Matchday {
    /// Whether the player has a game on this matchday
    pub fn plays(&self, player: PlayerId) -> bool {
        self.games.iter().any(|game| game.involves(player))
    }
}

/// The full round-robin schedule together with the roster it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    roster: Vec<Player>,
    matchdays: Vec<Matchday>,
}

impl Schedule {
    pub(crate) fn new(roster: Vec<Player>, matchdays: Vec<Matchday>) -> Self {
        Self { roster, matchdays }
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn matchdays(&self) -> &[Matchday] {
        &self.matchdays
    }

    /// Look up a roster player by id
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|player| player.id == id)
    }

    /// All games in matchday order
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.matchdays.iter().flat_map(|matchday| matchday.games.iter())
    }

    pub fn game_count(&self) -> usize {
        self.matchdays.iter().map(|matchday| matchday.games.len()).sum()
    }

    /// Look up a game by 1-based matchday and game numbers
    pub fn game(&self, matchday: usize, game: usize) -> Option<&Game> {
        self.matchdays
            .get(matchday.checked_sub(1)?)?
            .games
            .get(game.checked_sub(1)?)
    }

    /// Record the result of a game addressed by 1-based matchday and game numbers
    pub fn set_result(&mut self, matchday: usize, game: usize, result: GameResult) -> Result<()> {
        let target = matchday
            .checked_sub(1)
            .and_then(|md| self.matchdays.get_mut(md))
            .and_then(|md| game.checked_sub(1).and_then(|g| md.games.get_mut(g)))
            .ok_or_else(|| TournamentError::InvalidResult {
                reason: format!("no game {} on matchday {}", game, matchday),
            })?;

        target.result = result;
        info!(
            "Matchday {} game {} result set to {}",
            matchday, game, result
        );
        Ok(())
    }

    /// Check the structural invariants of a schedule that did not come
    /// straight out of the scheduler
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for player in &self.roster {
            if !ids.insert(player.id) {
                return Err(anyhow!("duplicate player {} in roster", player.id));
            }
            if player.rating() == 0 {
                return Err(anyhow!("player {} has a zero rating", player.name()));
            }
        }

        let mut pairs = HashSet::new();
        for (md_idx, matchday) in self.matchdays.iter().enumerate() {
            if matchday.number != md_idx + 1 {
                return Err(anyhow!(
                    "matchday at position {} is numbered {}",
                    md_idx + 1,
                    matchday.number
                ));
            }

            let mut booked = HashSet::new();
            for (game_idx, game) in matchday.games.iter().enumerate() {
                if game.matchday != matchday.number || game.index != game_idx + 1 {
                    return Err(anyhow!(
                        "game {} on matchday {} carries position {}/{}",
                        game_idx + 1,
                        matchday.number,
                        game.matchday,
                        game.index
                    ));
                }
                for side in [game.white, game.black] {
                    if !ids.contains(&side) {
                        return Err(anyhow!("game references unknown player {}", side));
                    }
                    if !booked.insert(side) {
                        return Err(anyhow!(
                            "player {} plays twice on matchday {}",
                            side,
                            matchday.number
                        ));
                    }
                }
                let pair = if game.white < game.black {
                    (game.white, game.black)
                } else {
                    (game.black, game.white)
                };
                if !pairs.insert(pair) {
                    return Err(anyhow!(
                        "pairing {} vs {} is scheduled more than once",
                        game.white,
                        game.black
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_schedule() -> Schedule {
        let white = Player::new("Ann", "White", 1500).unwrap();
        let black = Player::new("Bob", "Black", 1400).unwrap();
        let game = Game::new(1, 1, white.id, black.id, ClockAllowance::new(58, 60));
        Schedule::new(
            vec![white, black],
            vec![Matchday {
                number: 1,
                games: vec![game],
            }],
        )
    }

    #[test]
    fn test_new_game_is_ongoing() {
        let schedule = two_player_schedule();
        let game = schedule.game(1, 1).unwrap();
        assert_eq!(game.result(), GameResult::Ongoing);
        assert_eq!(game.clocks().as_pair(), (58, 60));
    }

    #[test]
    fn test_set_result() {
        let mut schedule = two_player_schedule();
        schedule.set_result(1, 1, GameResult::Draw).unwrap();
        assert_eq!(schedule.game(1, 1).unwrap().result(), GameResult::Draw);

        // Results can be corrected, clocks stay untouched
        schedule.set_result(1, 1, GameResult::WhiteWins).unwrap();
        let game = schedule.game(1, 1).unwrap();
        assert_eq!(game.result(), GameResult::WhiteWins);
        assert_eq!(game.clocks().as_pair(), (58, 60));
    }

    #[test]
    fn test_set_result_on_missing_game() {
        let mut schedule = two_player_schedule();
        for (matchday, game) in [(0, 1), (1, 0), (2, 1), (1, 2)] {
            let err = schedule
                .set_result(matchday, game, GameResult::Draw)
                .unwrap_err();
            assert!(matches!(
                err.downcast_ref::<TournamentError>(),
                Some(TournamentError::InvalidResult { .. })
            ));
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_schedule() {
        assert!(two_player_schedule().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_player() {
        let mut schedule = two_player_schedule();
        schedule.roster.pop();
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_repeated_pairing() {
        let mut schedule = two_player_schedule();
        let first = &schedule.matchdays[0].games[0];
        let rematch = Game::new(2, 1, first.black, first.white, first.clocks);
        schedule.matchdays.push(Matchday {
            number: 2,
            games: vec![rematch],
        });
        assert!(schedule.validate().is_err());
    }
}
