//! Value objects for contest framing
//!
//! Immutable, validated-by-construction types shared by framing, resolution
//! and outcome interpretation.

mod dice;
mod modifier;
mod rating;
mod target_number;

pub use dice::{DiceRolls, DIE_SIZE};
pub use modifier::{Modifier, ModifierType, ALLOWED_MODIFIER_VALUES};
pub use rating::{Rating, RatingParseError, MAX_RATING_BASE, MIN_RATING_BASE};
pub use target_number::TargetNumber;
