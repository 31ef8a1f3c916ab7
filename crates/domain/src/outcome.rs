//! Outcome interpretation - turning a resolution into benefits and consequences.
//!
//! Victory grants a bonus of +5 per degree step (capped at +20) to carry into
//! a later contest; defeat imposes the mirror-image penalty. A tie grants
//! neither.

use serde::Serialize;

use crate::aggregates::ContestFrame;
use crate::error::DomainError;
use crate::resolution::{ContestWinner, ResolutionResult};

/// Bonus by degree of victory (index = degree, clamped to 0..=3)
pub const BENEFIT_MODIFIERS: [i32; 4] = [5, 10, 15, 20];

/// Penalty by degree of defeat (index = degree, clamped to 0..=3)
pub const CONSEQUENCE_MODIFIERS: [i32; 4] = [-5, -10, -15, -20];

const MAX_DEGREE_INDEX: u32 = 3;

/// Complete outcome of a contest, ready for display.
///
/// Serialize-only: the modifier and summary are derived by `interpret`, so an
/// outcome cannot be read back from JSON.
///
/// ```compile_fail
/// let outcome: questworlds_domain::ContestOutcome = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestOutcome {
    // Contest context
    pub prize: String,
    pub player_ability_name: String,
    /// Player rating in notation form, e.g. "5M2"
    pub player_rating: String,
    /// Resistance in notation form, e.g. "14M"
    pub resistance_target_number: String,

    // Resolution details
    pub player_roll: u8,
    pub resistance_roll: u8,
    pub player_successes: u32,
    pub resistance_successes: u32,

    // Outcome
    pub winner: ContestWinner,
    pub degree: u32,
    /// Carry-forward modifier; `None` for a tie
    pub benefit_consequence_modifier: Option<i32>,
    pub summary: String,
}

impl ContestOutcome {
    /// True only when the player won outright or on the tiebreak.
    pub fn is_player_victory(&self) -> bool {
        self.winner == ContestWinner::Player
    }
}

/// Look up the benefit or consequence modifier for a result.
///
/// Degrees above 3 use the largest entry. Returns `None` for a tie.
pub fn benefit_consequence_modifier(winner: ContestWinner, degree: u32) -> Option<i32> {
    let index = degree.min(MAX_DEGREE_INDEX) as usize;
    match winner {
        ContestWinner::Player => Some(BENEFIT_MODIFIERS[index]),
        ContestWinner::Resistance => Some(CONSEQUENCE_MODIFIERS[index]),
        ContestWinner::Tie => None,
    }
}

/// Short human-readable description of a result.
pub fn summarize(winner: ContestWinner, degree: u32) -> String {
    match winner {
        ContestWinner::Player => format!("{} Degrees of Victory for the player!", degree),
        ContestWinner::Resistance => format!("{} Degrees of Defeat for the player.", degree),
        ContestWinner::Tie => "The contest is a tie.".to_string(),
    }
}

/// Combine a resolution result with its frame into a displayable outcome.
///
/// # Errors
///
/// Returns `DomainError::NotReady` if the frame has no player ability, which
/// means the result cannot have come from this frame.
pub fn interpret(
    result: &ResolutionResult,
    frame: &ContestFrame,
) -> Result<ContestOutcome, DomainError> {
    let (ability_name, rating) = frame
        .player_ability_name()
        .zip(frame.player_rating())
        .ok_or_else(|| DomainError::not_ready("frame has no player ability to report"))?;

    Ok(ContestOutcome {
        prize: frame.prize().to_string(),
        player_ability_name: ability_name.to_string(),
        player_rating: rating.to_string(),
        resistance_target_number: frame.resistance().to_string(),
        player_roll: result.player_roll,
        resistance_roll: result.resistance_roll,
        player_successes: result.player_successes,
        resistance_successes: result.resistance_successes,
        winner: result.winner,
        degree: result.degree,
        benefit_consequence_modifier: benefit_consequence_modifier(result.winner, result.degree),
        summary: summarize(result.winner, result.degree),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Rating, TargetNumber};

    fn frame_with(resistance: TargetNumber, rating: Rating) -> ContestFrame {
        let mut frame = ContestFrame::new("Sneak past guards", resistance).unwrap();
        frame.set_player_ability("Stealth", rating).unwrap();
        frame
    }

    fn result(winner: ContestWinner, degree: u32) -> ResolutionResult {
        ResolutionResult {
            player_roll: 10,
            resistance_roll: 15,
            player_successes: 1,
            resistance_successes: 0,
            winner,
            degree,
        }
    }

    #[test]
    fn victory_maps_to_benefit_table() {
        assert_eq!(benefit_consequence_modifier(ContestWinner::Player, 0), Some(5));
        assert_eq!(benefit_consequence_modifier(ContestWinner::Player, 1), Some(10));
        assert_eq!(benefit_consequence_modifier(ContestWinner::Player, 2), Some(15));
        assert_eq!(benefit_consequence_modifier(ContestWinner::Player, 3), Some(20));
    }

    #[test]
    fn defeat_maps_to_consequence_table() {
        assert_eq!(benefit_consequence_modifier(ContestWinner::Resistance, 0), Some(-5));
        assert_eq!(benefit_consequence_modifier(ContestWinner::Resistance, 1), Some(-10));
        assert_eq!(benefit_consequence_modifier(ContestWinner::Resistance, 2), Some(-15));
        assert_eq!(benefit_consequence_modifier(ContestWinner::Resistance, 3), Some(-20));
    }

    #[test]
    fn large_degrees_clamp_to_last_entry() {
        assert_eq!(benefit_consequence_modifier(ContestWinner::Player, 4), Some(20));
        assert_eq!(benefit_consequence_modifier(ContestWinner::Resistance, 9), Some(-20));
        assert_eq!(
            benefit_consequence_modifier(ContestWinner::Player, u32::MAX),
            Some(20)
        );
    }

    #[test]
    fn tie_has_no_modifier() {
        assert_eq!(benefit_consequence_modifier(ContestWinner::Tie, 0), None);
    }

    #[test]
    fn summaries() {
        assert_eq!(
            summarize(ContestWinner::Player, 2),
            "2 Degrees of Victory for the player!"
        );
        assert_eq!(
            summarize(ContestWinner::Resistance, 1),
            "1 Degrees of Defeat for the player."
        );
        assert_eq!(summarize(ContestWinner::Tie, 0), "The contest is a tie.");
    }

    #[test]
    fn interpret_includes_contest_context() {
        let frame = frame_with(TargetNumber::new(14, 1, 0), Rating::new(5, 2).unwrap());
        let outcome = interpret(&result(ContestWinner::Player, 1), &frame).unwrap();

        assert_eq!(outcome.prize, "Sneak past guards");
        assert_eq!(outcome.player_ability_name, "Stealth");
        assert_eq!(outcome.player_rating, "5M2");
        assert_eq!(outcome.resistance_target_number, "14M");
    }

    #[test]
    fn interpret_copies_resolution_details() {
        let frame = frame_with(TargetNumber::new(14, 0, 0), Rating::new(15, 0).unwrap());
        let resolution = ResolutionResult {
            player_roll: 8,
            resistance_roll: 17,
            player_successes: 3,
            resistance_successes: 1,
            winner: ContestWinner::Player,
            degree: 2,
        };
        let outcome = interpret(&resolution, &frame).unwrap();

        assert_eq!(outcome.player_roll, 8);
        assert_eq!(outcome.resistance_roll, 17);
        assert_eq!(outcome.player_successes, 3);
        assert_eq!(outcome.resistance_successes, 1);
        assert_eq!(outcome.winner, ContestWinner::Player);
        assert_eq!(outcome.degree, 2);
        assert_eq!(outcome.benefit_consequence_modifier, Some(15));
        assert!(outcome.is_player_victory());
        assert_eq!(outcome.summary, "2 Degrees of Victory for the player!");
    }

    #[test]
    fn interpret_defeat_and_tie() {
        let frame = frame_with(TargetNumber::new(14, 0, 0), Rating::new(15, 0).unwrap());

        let defeat = interpret(&result(ContestWinner::Resistance, 3), &frame).unwrap();
        assert_eq!(defeat.benefit_consequence_modifier, Some(-20));
        assert!(!defeat.is_player_victory());
        assert!(defeat.summary.contains("Defeat"));

        let tie = interpret(&result(ContestWinner::Tie, 0), &frame).unwrap();
        assert_eq!(tie.benefit_consequence_modifier, None);
        assert!(!tie.is_player_victory());
        assert!(tie.summary.to_lowercase().contains("tie"));
    }

    #[test]
    fn interpret_requires_player_ability() {
        let frame = ContestFrame::new("Sneak past guards", TargetNumber::new(14, 0, 0)).unwrap();
        assert!(matches!(
            interpret(&result(ContestWinner::Player, 0), &frame),
            Err(DomainError::NotReady(_))
        ));
    }

    #[test]
    fn outcome_serializes_tie_modifier_as_null() {
        let frame = frame_with(TargetNumber::new(14, 0, 0), Rating::new(15, 0).unwrap());
        let outcome = interpret(&result(ContestWinner::Tie, 0), &frame).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["benefitConsequenceModifier"], serde_json::Value::Null);
        assert_eq!(json["winner"], "Tie");
        assert_eq!(json["resistanceTargetNumber"], "14");
        assert_eq!(json["summary"], "The contest is a tie.");
    }
}
