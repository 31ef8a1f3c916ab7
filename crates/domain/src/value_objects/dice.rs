//! Dice roll value objects
//!
//! A contest is decided by one d20 per side. The domain never generates
//! randomness itself; rolls arrive from the caller or from the engine's dice port.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of faces on each contest die
pub const DIE_SIZE: u8 = 20;

/// A pair of d20 results, one for the player and one for the resistance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DiceRollsData")]
pub struct DiceRolls {
    player_roll: u8,
    resistance_roll: u8,
}

impl DiceRolls {
    /// Create a validated roll pair.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if either value is outside 1..=20.
    pub fn new(player_roll: u8, resistance_roll: u8) -> Result<Self, DomainError> {
        check_face("Player roll", player_roll)?;
        check_face("Resistance roll", resistance_roll)?;
        Ok(Self {
            player_roll,
            resistance_roll,
        })
    }

    #[inline]
    pub fn player_roll(&self) -> u8 {
        self.player_roll
    }

    #[inline]
    pub fn resistance_roll(&self) -> u8 {
        self.resistance_roll
    }
}

fn check_face(field: &'static str, value: u8) -> Result<(), DomainError> {
    if (1..=DIE_SIZE).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::out_of_range(field, value, "1..=20"))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiceRollsData {
    player_roll: u8,
    resistance_roll: u8,
}

impl TryFrom<DiceRollsData> for DiceRolls {
    type Error = DomainError;

    fn try_from(data: DiceRollsData) -> Result<Self, Self::Error> {
        Self::new(data.player_roll, data.resistance_roll)
    }
}
