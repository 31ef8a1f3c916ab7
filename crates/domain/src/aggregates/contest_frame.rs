//! Contest frame aggregate - one framed contest awaiting resolution
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the prize and resistance are fixed at construction
//! - **Valid by construction**: `new()` rejects an empty prize
//! - **Append-only modifiers**: applied modifiers are never removed or reordered
//!
//! A frame has a single owner. Ability submission, modifier application and
//! resolution are expected to happen sequentially; the owner is responsible
//! for discarding the frame once it has been resolved.

use serde::Serialize;

use crate::error::DomainError;
use crate::value_objects::{Modifier, Rating, TargetNumber};

/// A framed contest: the prize at stake, the resistance, and the player's side
///
/// # Invariants
///
/// - `prize` is never empty or whitespace-only
/// - `player_ability_name` and `player_rating` are either both set or both unset
///
/// # Example
///
/// ```
/// use questworlds_domain::{ContestFrame, Modifier, ModifierType, Rating, TargetNumber};
///
/// let resistance = TargetNumber::from(Rating::parse("14").unwrap());
/// let mut frame = ContestFrame::new("Sneak past guards", resistance).unwrap();
/// assert!(!frame.is_ready_for_resolution());
///
/// frame.set_player_ability("Stealth", Rating::parse("10M").unwrap()).unwrap();
/// frame.apply_modifier(Modifier::new(ModifierType::Augment, 5).unwrap());
///
/// assert!(frame.is_ready_for_resolution());
/// assert_eq!(frame.player_target_number().unwrap().effective_base(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestFrame {
    prize: String,
    resistance: TargetNumber,
    player_ability_name: Option<String>,
    player_rating: Option<Rating>,
    modifiers: Vec<Modifier>,
}

impl ContestFrame {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Frame a new contest.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the prize is empty or whitespace-only.
    pub fn new(prize: impl Into<String>, resistance: TargetNumber) -> Result<Self, DomainError> {
        let prize = prize.into();
        if prize.trim().is_empty() {
            return Err(DomainError::validation("Prize cannot be empty"));
        }
        Ok(Self {
            prize,
            resistance,
            player_ability_name: None,
            player_rating: None,
            modifiers: Vec::new(),
        })
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn prize(&self) -> &str {
        &self.prize
    }

    #[inline]
    pub fn resistance(&self) -> TargetNumber {
        self.resistance
    }

    #[inline]
    pub fn player_ability_name(&self) -> Option<&str> {
        self.player_ability_name.as_deref()
    }

    #[inline]
    pub fn player_rating(&self) -> Option<Rating> {
        self.player_rating
    }

    /// Applied modifiers, in the order they were applied.
    #[inline]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Sum of every applied modifier value, saturating at the `i32` bounds.
    pub fn total_modifier(&self) -> i32 {
        saturating_total(self.modifiers.iter().map(Modifier::value))
    }

    /// The player's target number after all modifiers, or `None` before an
    /// ability has been submitted.
    pub fn player_target_number(&self) -> Option<TargetNumber> {
        self.player_rating
            .map(|rating| TargetNumber::from_rating(rating, self.total_modifier()))
    }

    /// True once the player has submitted an ability and rating.
    pub fn is_ready_for_resolution(&self) -> bool {
        !self.prize.trim().is_empty()
            && self.player_ability_name.is_some()
            && self.player_rating.is_some()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Submit the player's ability, replacing any earlier submission.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or whitespace-only;
    /// the frame is left unchanged.
    pub fn set_player_ability(
        &mut self,
        name: impl Into<String>,
        rating: Rating,
    ) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Ability name cannot be empty"));
        }
        self.player_ability_name = Some(name);
        self.player_rating = Some(rating);
        Ok(())
    }

    /// Append a modifier. There is no limit and no deduplication.
    pub fn apply_modifier(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }
}

fn saturating_total(values: impl IntoIterator<Item = i32>) -> i32 {
    values.into_iter().fold(0, i32::saturating_add)
}
