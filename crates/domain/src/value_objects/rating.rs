//! Ability rating value object and notation parsing
//!
//! Supports ratings like "15", "5M", "6M2" (case-insensitive). Each mastery
//! stands for twenty points of ability folded into a guaranteed success, so
//! the base never has to exceed the die size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::DomainError;

/// Lowest permitted rating base
pub const MIN_RATING_BASE: u8 = 1;

/// Highest permitted rating base (the die size)
pub const MAX_RATING_BASE: u8 = 20;

/// Error when a rating notation string does not match `digits[M[digits]]`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingParseError {
    /// The notation string is empty
    #[error("Empty rating notation")]
    Empty,
    /// Invalid format - expected N, NM or NMk
    #[error("Invalid rating notation: {0}")]
    InvalidFormat(String),
    /// A number in the notation does not fit in its field
    #[error("Rating notation number too large: {0}")]
    Overflow(String),
}

/// An ability rating: a base value (1-20) plus zero or more masteries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rating {
    base: u8,
    masteries: u32,
}

impl Rating {
    /// Create a new rating.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if `base` is not within 1..=20.
    pub fn new(base: u8, masteries: u32) -> Result<Self, DomainError> {
        if !(MIN_RATING_BASE..=MAX_RATING_BASE).contains(&base) {
            return Err(DomainError::out_of_range("Rating base", base, "1..=20"));
        }
        Ok(Self { base, masteries })
    }

    /// Parse rating notation such as "15", "5M", "6M2" or "10m".
    ///
    /// Supported formats:
    /// - "N" - base N, no masteries
    /// - "NM" - base N, one mastery
    /// - "NMk" - base N, k masteries
    ///
    /// Surrounding whitespace is not accepted.
    pub fn parse(notation: &str) -> Result<Self, DomainError> {
        if notation.is_empty() {
            return Err(RatingParseError::Empty.into());
        }

        // Manual parsing keeps regex out of the domain layer
        let digits_end = notation
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(notation.len());
        let (base_str, rest) = notation.split_at(digits_end);

        if base_str.is_empty() {
            return Err(RatingParseError::InvalidFormat(format!(
                "Missing base value in '{}'",
                notation
            ))
            .into());
        }

        let masteries = match rest.strip_prefix(&['M', 'm'][..]) {
            None if rest.is_empty() => 0,
            None => {
                return Err(RatingParseError::InvalidFormat(format!(
                    "Unexpected '{}' in '{}'",
                    rest, notation
                ))
                .into());
            }
            Some("") => 1,
            Some(count) => {
                if !count.chars().all(|c| c.is_ascii_digit()) {
                    return Err(RatingParseError::InvalidFormat(format!(
                        "Invalid mastery count '{}' in '{}'",
                        count, notation
                    ))
                    .into());
                }
                count
                    .parse::<u32>()
                    .map_err(|_| RatingParseError::Overflow(count.to_string()))?
            }
        };

        // All digits at this point, so a failed parse can only be overflow
        let base = base_str.parse::<u32>().unwrap_or(u32::MAX);
        let base = u8::try_from(base)
            .map_err(|_| DomainError::out_of_range("Rating base", base, "1..=20"))?;

        Self::new(base, masteries)
    }

    /// Returns the base value (1-20).
    #[inline]
    pub fn base(&self) -> u8 {
        self.base
    }

    /// Returns the number of masteries.
    #[inline]
    pub fn masteries(&self) -> u32 {
        self.masteries
    }
}

/// Format a base and mastery count in rating notation.
///
/// The `M` is omitted at zero masteries and written bare at exactly one.
pub(crate) fn format_notation(base: impl fmt::Display, masteries: u32) -> String {
    match masteries {
        0 => base.to_string(),
        1 => format!("{}M", base),
        n => format!("{}M{}", base, n),
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_notation(self.base, self.masteries))
    }
}

impl FromStr for Rating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rating {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> String {
        rating.to_string()
    }
}
