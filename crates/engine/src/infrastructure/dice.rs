//! Dice roller implementations.

use std::sync::{Mutex, PoisonError};

use questworlds_domain::DIE_SIZE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::DiceRollerPort;

/// System dice - uses the thread-local RNG.
pub struct SystemDiceRoller;

impl SystemDiceRoller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemDiceRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRollerPort for SystemDiceRoller {
    fn roll_d20(&self) -> u8 {
        rand::thread_rng().gen_range(1..=DIE_SIZE)
    }
}

/// Seeded dice - reproducible sequence of rolls for a given seed.
pub struct SeededDiceRoller {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededDiceRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceRollerPort for SeededDiceRoller {
    fn roll_d20(&self) -> u8 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(1..=DIE_SIZE)
    }
}

/// Fixed dice - replays preset faces in order, cycling when exhausted.
///
/// Useful for physical dice entered by hand and for tests.
pub struct FixedDiceRoller {
    faces: Vec<u8>,
    next: Mutex<usize>,
}

impl FixedDiceRoller {
    /// Replay `faces` in order. Returns `None` for an empty list.
    pub fn new(faces: impl Into<Vec<u8>>) -> Option<Self> {
        let faces = faces.into();
        if faces.is_empty() {
            return None;
        }
        Some(Self {
            faces,
            next: Mutex::new(0),
        })
    }

    /// One player roll followed by one resistance roll.
    pub fn pair(player_roll: u8, resistance_roll: u8) -> Self {
        Self {
            faces: vec![player_roll, resistance_roll],
            next: Mutex::new(0),
        }
    }
}

impl DiceRollerPort for FixedDiceRoller {
    fn roll_d20(&self) -> u8 {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let face = self.faces[*next % self.faces.len()];
        *next = next.wrapping_add(1);
        face
    }
}
