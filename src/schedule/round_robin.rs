//! Round-robin schedule generation using the circle method
//!
//! The first player is the anchor. The remaining players (plus a bye slot
//! when the roster is odd) sit on a circle that is addressed through a
//! per-round offset instead of being physically rotated. Each round the
//! anchor meets the slot at the offset and the other slots pair up
//! symmetrically around it, which gives every pair exactly one meeting in
//! `slots - 1` rounds.

use super::{Game, Matchday, Schedule};
use crate::config::HandicapConfig;
use crate::error::{Result, TournamentError};
use crate::handicap::{policy_from_config, HandicapPolicy, LinearHandicap};
use crate::types::{ClockAllowance, Player};
use crate::utils::pair_count;
use std::collections::HashSet;
use tracing::{debug, info};

/// Index into the roster, `None` marks the bye
type Slot = Option<usize>;

/// Builds complete round-robin schedules and attaches clock handicaps
pub struct RoundRobinScheduler {
    handicap: Box<dyn HandicapPolicy>,
}

impl RoundRobinScheduler {
    pub fn new(handicap: Box<dyn HandicapPolicy>) -> Self {
        Self { handicap }
    }

    pub fn with_config(config: HandicapConfig) -> Result<Self> {
        Ok(Self::new(policy_from_config(config)?))
    }

    /// Generate the full schedule for an ordered roster
    pub fn generate(&self, players: &[Player]) -> Result<Schedule> {
        validate_roster(players)?;

        let mut slots: Vec<Slot> = (0..players.len()).map(Some).collect();
        if players.len() % 2 == 1 {
            slots.push(None);
        }

        let anchor = slots[0];
        let circle = &slots[1..];
        let span = circle.len();
        let mut matchdays = Vec::with_capacity(span);

        for round in 0..span {
            let number = round + 1;
            let mut games = Vec::with_capacity(slots.len() / 2);

            for (white, black) in round_pairings(anchor, circle, round) {
                let (Some(white), Some(black)) = (white, black) else {
                    debug!("Matchday {}: bye", number);
                    continue;
                };
                let white = &players[white];
                let black = &players[black];
                let (white_minutes, black_minutes) = self
                    .handicap
                    .assign(i64::from(white.rating()), i64::from(black.rating()))?;

                debug!(
                    "Matchday {} game {}: {} vs {}",
                    number,
                    games.len() + 1,
                    white.name(),
                    black.name()
                );
                games.push(Game::new(
                    number,
                    games.len() + 1,
                    white.id,
                    black.id,
                    ClockAllowance::new(white_minutes, black_minutes),
                ));
            }

            matchdays.push(Matchday { number, games });
        }

        let schedule = Schedule::new(players.to_vec(), matchdays);
        debug_assert_eq!(schedule.game_count(), pair_count(players.len()));
        info!(
            "Generated round-robin schedule: {} players, {} matchdays, {} games",
            players.len(),
            schedule.matchdays().len(),
            schedule.game_count()
        );
        Ok(schedule)
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(Box::new(LinearHandicap::default()))
    }
}

impl std::fmt::Debug for RoundRobinScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundRobinScheduler")
            .field("handicap", &self.handicap.config())
            .finish()
    }
}

/// Pairings for one round as (white, black) slots, anchor game first.
///
/// The anchor plays white in even-indexed rounds. For the symmetric games
/// the far side of the circle is white at odd distances and the near side
/// at even distances.
fn round_pairings(anchor: Slot, circle: &[Slot], round: usize) -> Vec<(Slot, Slot)> {
    let span = circle.len();
    let mut pairings = Vec::with_capacity((span + 1) / 2);

    let opponent = circle[round % span];
    pairings.push(if round % 2 == 0 {
        (anchor, opponent)
    } else {
        (opponent, anchor)
    });

    for distance in 1..(span + 1) / 2 {
        let near = circle[(round + distance) % span];
        let far = circle[(round + span - distance) % span];
        pairings.push(if distance % 2 == 1 {
            (far, near)
        } else {
            (near, far)
        });
    }

    pairings
}

fn validate_roster(players: &[Player]) -> Result<()> {
    if players.len() < 2 {
        return Err(TournamentError::InvalidRoster {
            reason: format!("need at least 2 players, got {}", players.len()),
        }
        .into());
    }

    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if !seen.insert(player.id) {
            return Err(TournamentError::InvalidRoster {
                reason: format!("player {} ({}) appears more than once", player.name(), player.id),
            }
            .into());
        }
    }

    Ok(())
}
