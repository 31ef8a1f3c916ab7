//! QuestWorlds contest rules.
//!
//! Framing (ratings, modifiers, target numbers, the contest frame),
//! resolution (successes, winner and degree) and outcome interpretation.
//! Everything here is pure: dice values are always supplied by the caller.

pub mod aggregates;
pub mod error;
pub mod outcome;
pub mod resolution;
pub mod value_objects;

pub use aggregates::ContestFrame;
pub use error::DomainError;

pub use outcome::{
    benefit_consequence_modifier, interpret, summarize, ContestOutcome, BENEFIT_MODIFIERS,
    CONSEQUENCE_MODIFIERS,
};
pub use resolution::{
    adjudicate, count_successes, resolve, Adjudication, ContestWinner, ResolutionResult,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    DiceRolls, Modifier, ModifierType, Rating, RatingParseError, TargetNumber,
    ALLOWED_MODIFIER_VALUES, DIE_SIZE, MAX_RATING_BASE, MIN_RATING_BASE,
};
