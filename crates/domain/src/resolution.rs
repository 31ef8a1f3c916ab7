//! Contest resolution rules.
//!
//! Each side rolls a d20 against its own target number:
//! - roll equal to the effective base: 2 successes (big success)
//! - roll under the effective base: 1 success
//! - roll over: no success
//!
//! Every mastery then adds one success regardless of the roll. The side with
//! more successes wins by the difference (the degree). Equal successes fall
//! back to the higher raw roll with degree 0, and equal rolls are a tie.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::aggregates::ContestFrame;
use crate::error::DomainError;
use crate::value_objects::{DiceRolls, TargetNumber};

/// Base successes for rolling exactly the effective base
pub const BIG_SUCCESS: u32 = 2;

/// Who won a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContestWinner {
    Player,
    Resistance,
    /// Equal successes and equal rolls
    Tie,
}

impl fmt::Display for ContestWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Player => "Player",
            Self::Resistance => "Resistance",
            Self::Tie => "Tie",
        };
        f.write_str(name)
    }
}

/// Winner, degree and success totals from one pair of rolls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjudication {
    pub winner: ContestWinner,
    pub degree: u32,
    pub player_successes: u32,
    pub resistance_successes: u32,
}

/// Immutable result of resolving a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    /// The player's d20 roll
    pub player_roll: u8,
    /// The resistance's d20 roll
    pub resistance_roll: u8,
    /// Player's base successes plus masteries
    pub player_successes: u32,
    /// Resistance's base successes plus masteries
    pub resistance_successes: u32,
    pub winner: ContestWinner,
    /// Gap in successes; 0 when decided by the tiebreak or tied outright
    pub degree: u32,
}

/// Count the successes one side earns with `roll` against `target`.
pub fn count_successes(roll: u8, target: &TargetNumber) -> u32 {
    let effective = target.effective_base();
    let base_successes = match roll.cmp(&effective) {
        Ordering::Equal => BIG_SUCCESS,
        Ordering::Less => 1,
        Ordering::Greater => 0,
    };
    base_successes.saturating_add(target.masteries)
}

/// Decide a contest from both rolls and both target numbers.
///
/// Successes are compared first; on equal successes the higher raw roll wins
/// with degree 0; equal rolls as well make a tie.
pub fn adjudicate(
    player_roll: u8,
    resistance_roll: u8,
    player_target: &TargetNumber,
    resistance_target: &TargetNumber,
) -> Adjudication {
    let player_successes = count_successes(player_roll, player_target);
    let resistance_successes = count_successes(resistance_roll, resistance_target);

    let (winner, degree) = match player_successes.cmp(&resistance_successes) {
        Ordering::Greater => (
            ContestWinner::Player,
            player_successes - resistance_successes,
        ),
        Ordering::Less => (
            ContestWinner::Resistance,
            resistance_successes - player_successes,
        ),
        Ordering::Equal => match player_roll.cmp(&resistance_roll) {
            Ordering::Greater => (ContestWinner::Player, 0),
            Ordering::Less => (ContestWinner::Resistance, 0),
            Ordering::Equal => (ContestWinner::Tie, 0),
        },
    };

    Adjudication {
        winner,
        degree,
        player_successes,
        resistance_successes,
    }
}

/// Resolve a framed contest with the given rolls.
///
/// Deterministic: the same frame and rolls always give the same result.
///
/// # Errors
///
/// Returns `DomainError::NotReady` if the player has not submitted an
/// ability; the frame is not touched.
pub fn resolve(frame: &ContestFrame, rolls: DiceRolls) -> Result<ResolutionResult, DomainError> {
    if !frame.is_ready_for_resolution() {
        return Err(DomainError::not_ready(
            "player ability and rating are required before resolution",
        ));
    }
    let player_target = frame.player_target_number().ok_or_else(|| {
        DomainError::not_ready("player rating is required before resolution")
    })?;

    let adjudication = adjudicate(
        rolls.player_roll(),
        rolls.resistance_roll(),
        &player_target,
        &frame.resistance(),
    );

    Ok(ResolutionResult {
        player_roll: rolls.player_roll(),
        resistance_roll: rolls.resistance_roll(),
        player_successes: adjudication.player_successes,
        resistance_successes: adjudication.resistance_successes,
        winner: adjudication.winner,
        degree: adjudication.degree,
    })
}
