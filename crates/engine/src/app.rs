//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    dice::{SeededDiceRoller, SystemDiceRoller},
    ports::DiceRollerPort,
    settings::EngineSettings,
};
use crate::use_cases;

/// Main application state.
///
/// Holds the dice roller and all use cases built around it.
pub struct App {
    pub use_cases: UseCases,
    pub dice: Arc<dyn DiceRollerPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub contest: use_cases::ContestUseCases,
}

impl App {
    /// Compose the application from settings.
    ///
    /// A configured seed selects reproducible dice; otherwise the thread RNG.
    pub fn new(settings: &EngineSettings) -> Self {
        let dice: Arc<dyn DiceRollerPort> = match settings.dice_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded dice roller");
                Arc::new(SeededDiceRoller::new(seed))
            }
            None => Arc::new(SystemDiceRoller::new()),
        };
        Self::with_dice(dice)
    }

    /// Compose the application around an explicit dice roller.
    pub fn with_dice(dice: Arc<dyn DiceRollerPort>) -> Self {
        let use_cases = UseCases {
            contest: use_cases::ContestUseCases::from_dice(dice.clone()),
        };
        Self { use_cases, dice }
    }
}
