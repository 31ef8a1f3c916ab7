//! Contest modifiers
//!
//! A modifier shifts the player's target number by ±5 or ±10 and records why.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The only magnitudes a single modifier may carry
pub const ALLOWED_MODIFIER_VALUES: [i32; 4] = [-10, -5, 5, 10];

/// Why a modifier was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierType {
    /// Penalty when an ability doesn't quite fit the situation (-5 or -10)
    Stretch,
    /// Bonus or penalty based on circumstances
    Situational,
    /// Bonus from supporting abilities or help
    Augment,
    /// Penalty from obstacles or opposition
    Hindrance,
    /// Carried forward from a previous contest outcome
    BenefitConsequence,
}

impl ModifierType {
    pub const ALL: [ModifierType; 5] = [
        ModifierType::Stretch,
        ModifierType::Situational,
        ModifierType::Augment,
        ModifierType::Hindrance,
        ModifierType::BenefitConsequence,
    ];

    /// Canonical name, as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stretch => "Stretch",
            Self::Situational => "Situational",
            Self::Augment => "Augment",
            Self::Hindrance => "Hindrance",
            Self::BenefitConsequence => "BenefitConsequence",
        }
    }
}

impl fmt::Display for ModifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModifierType {
    type Err = DomainError;

    /// Case-insensitive; `_` and `-` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "stretch" => Ok(Self::Stretch),
            "situational" => Ok(Self::Situational),
            "augment" => Ok(Self::Augment),
            "hindrance" => Ok(Self::Hindrance),
            "benefitconsequence" => Ok(Self::BenefitConsequence),
            _ => Err(DomainError::parse(format!("Invalid modifier type: {}", s))),
        }
    }
}

/// A validated adjustment to the player's target number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ModifierData")]
pub struct Modifier {
    #[serde(rename = "type")]
    modifier_type: ModifierType,
    value: i32,
}

impl Modifier {
    /// Create a new modifier.
    ///
    /// # Errors
    ///
    /// - `DomainError::OutOfRange` if `value` is not one of -10, -5, 5, 10
    /// - `DomainError::Validation` if a stretch carries a positive value
    pub fn new(modifier_type: ModifierType, value: i32) -> Result<Self, DomainError> {
        if !ALLOWED_MODIFIER_VALUES.contains(&value) {
            return Err(DomainError::out_of_range(
                "Modifier value",
                value,
                "one of -10, -5, 5, 10",
            ));
        }
        if modifier_type == ModifierType::Stretch && value > 0 {
            return Err(DomainError::validation("Stretch must be negative"));
        }
        Ok(Self {
            modifier_type,
            value,
        })
    }

    #[inline]
    pub fn modifier_type(&self) -> ModifierType {
        self.modifier_type
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.modifier_type, self.value)
    }
}

impl FromStr for Modifier {
    type Err = DomainError;

    /// Parse `TYPE:VALUE`, e.g. "augment:+5" or "Stretch:-10".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (type_str, value_str) = s.split_once(':').ok_or_else(|| {
            DomainError::parse(format!("Expected TYPE:VALUE modifier, got '{}'", s))
        })?;
        let modifier_type: ModifierType = type_str.parse()?;
        let value: i32 = value_str.trim().parse().map_err(|_| {
            DomainError::parse(format!("Invalid modifier value: '{}'", value_str))
        })?;
        Self::new(modifier_type, value)
    }
}

/// Unvalidated wire shape, checked on deserialization
#[derive(Deserialize)]
struct ModifierData {
    #[serde(rename = "type")]
    modifier_type: ModifierType,
    value: i32,
}

impl TryFrom<ModifierData> for Modifier {
    type Error = DomainError;

    fn try_from(data: ModifierData) -> Result<Self, Self::Error> {
        Self::new(data.modifier_type, data.value)
    }
}
