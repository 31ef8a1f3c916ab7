//! Target numbers for dice resolution
//!
//! The effective base is the base plus the accumulated modifier, clamped to
//! the face range of a d20. Masteries are never clamped.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rating::{format_notation, Rating, MAX_RATING_BASE, MIN_RATING_BASE};

/// A target number: what one side of a contest must roll under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetNumber {
    /// Base value before modifiers are applied
    pub base: u8,
    /// Each mastery adds one success during resolution
    pub masteries: u32,
    /// Total modifier applied to the base
    pub modifier: i32,
}

impl TargetNumber {
    pub fn new(base: u8, masteries: u32, modifier: i32) -> Self {
        Self {
            base,
            masteries,
            modifier,
        }
    }

    /// Derive a target number from a rating, copying its base and masteries.
    pub fn from_rating(rating: Rating, modifier: i32) -> Self {
        Self::new(rating.base(), rating.masteries(), modifier)
    }

    /// The value rolls are compared against: `base + modifier` clamped to 1..=20.
    pub fn effective_base(&self) -> u8 {
        let raw = i64::from(self.base) + i64::from(self.modifier);
        let clamped = raw.clamp(i64::from(MIN_RATING_BASE), i64::from(MAX_RATING_BASE));
        // The clamp bounds fit in u8
        clamped as u8
    }
}

impl From<Rating> for TargetNumber {
    fn from(rating: Rating) -> Self {
        Self::from_rating(rating, 0)
    }
}

/// Rating notation of the base and masteries; the modifier is not shown.
impl fmt::Display for TargetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_notation(self.base, self.masteries))
    }
}
