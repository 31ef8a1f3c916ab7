//! Contest use cases.
//!
//! Handles contest resolution. The flow is:
//! 1. The GM frames a contest (prize + resistance)
//! 2. The player submits an ability and rating
//! 3. Modifiers are applied
//! 4. Dice are rolled (server-side, or supplied by the caller)
//! 5. The result is interpreted into benefits or consequences

use std::sync::Arc;

use questworlds_domain::{ContestFrame, ContestOutcome, DiceRolls, DomainError, ResolutionResult};

use crate::infrastructure::ports::DiceRollerPort;

/// Container for contest use cases.
pub struct ContestUseCases {
    pub resolve: Arc<ResolveContest>,
    pub interpret: Arc<InterpretOutcome>,
    pub run: Arc<RunContest>,
}

impl ContestUseCases {
    pub fn new(
        resolve: Arc<ResolveContest>,
        interpret: Arc<InterpretOutcome>,
        run: Arc<RunContest>,
    ) -> Self {
        Self {
            resolve,
            interpret,
            run,
        }
    }

    /// Wire every contest use case around one dice roller.
    pub fn from_dice(dice: Arc<dyn DiceRollerPort>) -> Self {
        let resolve = Arc::new(ResolveContest::new(dice));
        let interpret = Arc::new(InterpretOutcome::new());
        let run = Arc::new(RunContest::new(resolve.clone(), interpret.clone()));
        Self::new(resolve, interpret, run)
    }
}

/// Resolve a contest use case.
///
/// Turns a ready frame and a pair of rolls into a `ResolutionResult`. The
/// rolls are either supplied (deterministic) or drawn from the dice port.
pub struct ResolveContest {
    dice: Arc<dyn DiceRollerPort>,
}

impl ResolveContest {
    pub fn new(dice: Arc<dyn DiceRollerPort>) -> Self {
        Self { dice }
    }

    /// Resolve with freshly rolled dice.
    ///
    /// Readiness is checked before any dice are drawn, so an incomplete
    /// frame never consumes rolls.
    pub fn execute(&self, frame: &ContestFrame) -> Result<ResolutionResult, ContestError> {
        ensure_ready(frame)?;

        let player_roll = self.dice.roll_d20();
        let resistance_roll = self.dice.roll_d20();
        tracing::debug!(player_roll, resistance_roll, "Rolled contest dice");

        let rolls = DiceRolls::new(player_roll, resistance_roll).map_err(|_| {
            ContestError::InvalidDice {
                player_roll,
                resistance_roll,
            }
        })?;

        self.execute_with_rolls(frame, rolls)
    }

    /// Resolve with the given rolls. Deterministic.
    pub fn execute_with_rolls(
        &self,
        frame: &ContestFrame,
        rolls: DiceRolls,
    ) -> Result<ResolutionResult, ContestError> {
        ensure_ready(frame)?;

        let result = questworlds_domain::resolve(frame, rolls)?;

        tracing::info!(
            prize = %frame.prize(),
            player_roll = result.player_roll,
            resistance_roll = result.resistance_roll,
            player_successes = result.player_successes,
            resistance_successes = result.resistance_successes,
            winner = %result.winner,
            degree = result.degree,
            "Contest resolved"
        );

        Ok(result)
    }
}

/// Interpret a resolution into a displayable outcome.
pub struct InterpretOutcome;

impl InterpretOutcome {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        result: &ResolutionResult,
        frame: &ContestFrame,
    ) -> Result<ContestOutcome, ContestError> {
        let outcome = questworlds_domain::interpret(result, frame)?;
        tracing::debug!(
            modifier = ?outcome.benefit_consequence_modifier,
            summary = %outcome.summary,
            "Contest outcome interpreted"
        );
        Ok(outcome)
    }
}

impl Default for InterpretOutcome {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve and interpret in one step.
pub struct RunContest {
    resolve: Arc<ResolveContest>,
    interpret: Arc<InterpretOutcome>,
}

impl RunContest {
    pub fn new(resolve: Arc<ResolveContest>, interpret: Arc<InterpretOutcome>) -> Self {
        Self { resolve, interpret }
    }

    /// Roll, resolve and interpret.
    pub fn execute(&self, frame: &ContestFrame) -> Result<ContestOutcome, ContestError> {
        let result = self.resolve.execute(frame)?;
        self.interpret.execute(&result, frame)
    }

    /// Resolve with the given rolls, then interpret.
    pub fn execute_with_rolls(
        &self,
        frame: &ContestFrame,
        rolls: DiceRolls,
    ) -> Result<ContestOutcome, ContestError> {
        let result = self.resolve.execute_with_rolls(frame, rolls)?;
        self.interpret.execute(&result, frame)
    }
}

fn ensure_ready(frame: &ContestFrame) -> Result<(), ContestError> {
    if frame.is_ready_for_resolution() {
        Ok(())
    } else {
        tracing::warn!(prize = %frame.prize(), "Rejected resolution of incomplete contest");
        Err(ContestError::NotReady)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContestError {
    #[error("Contest is not ready for resolution - player ability required")]
    NotReady,
    #[error("Dice roller produced an invalid pair: ({player_roll}, {resistance_roll})")]
    InvalidDice { player_roll: u8, resistance_roll: u8 },
    #[error(transparent)]
    Domain(DomainError),
}

impl From<DomainError> for ContestError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotReady(_) => Self::NotReady,
            other => Self::Domain(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockDiceRollerPort;
    use questworlds_domain::{ContestWinner, Modifier, ModifierType, Rating, TargetNumber};

    fn framed(resistance: &str) -> ContestFrame {
        let resistance = TargetNumber::from(Rating::parse(resistance).unwrap());
        ContestFrame::new("Sneak past guards", resistance).unwrap()
    }

    fn ready(resistance: &str, ability: &str, rating: &str) -> ContestFrame {
        let mut frame = framed(resistance);
        frame
            .set_player_ability(ability, Rating::parse(rating).unwrap())
            .unwrap();
        frame
    }

    fn dice_returning(faces: Vec<u8>) -> MockDiceRollerPort {
        let mut dice = MockDiceRollerPort::new();
        let count = faces.len();
        let mut faces = faces.into_iter();
        dice.expect_roll_d20()
            .times(count)
            .returning(move || faces.next().unwrap_or(1));
        dice
    }

    #[test]
    fn execute_draws_player_then_resistance() {
        let resolve = ResolveContest::new(Arc::new(dice_returning(vec![5, 20])));
        let mut frame = ready("14", "Stealth", "10M");
        frame.apply_modifier(Modifier::new(ModifierType::Augment, 5).unwrap());
        frame.apply_modifier(Modifier::new(ModifierType::Stretch, -5).unwrap());

        let result = resolve.execute(&frame).unwrap();

        assert_eq!(result.player_roll, 5);
        assert_eq!(result.resistance_roll, 20);
        assert_eq!(result.player_successes, 2);
        assert_eq!(result.resistance_successes, 0);
        assert_eq!(result.winner, ContestWinner::Player);
        assert_eq!(result.degree, 2);
    }

    #[test]
    fn execute_rejects_unready_frame_without_rolling() {
        let mut dice = MockDiceRollerPort::new();
        dice.expect_roll_d20().never();
        let resolve = ResolveContest::new(Arc::new(dice));
        let frame = framed("14");

        let err = resolve.execute(&frame).unwrap_err();

        assert!(matches!(err, ContestError::NotReady));
        assert!(!frame.is_ready_for_resolution());
    }

    #[test]
    fn unready_frame_can_be_completed_and_retried() {
        let resolve = ResolveContest::new(Arc::new(dice_returning(vec![3, 3])));
        let mut frame = framed("14");
        assert!(resolve.execute(&frame).is_err());

        frame
            .set_player_ability("Stealth", Rating::parse("10").unwrap())
            .unwrap();
        let result = resolve.execute(&frame).unwrap();
        assert_eq!(result.winner, ContestWinner::Tie);
    }

    #[test]
    fn execute_reports_misbehaving_dice() {
        let resolve = ResolveContest::new(Arc::new(dice_returning(vec![0, 21])));
        let frame = ready("14", "Stealth", "10");

        let err = resolve.execute(&frame).unwrap_err();

        assert!(matches!(
            err,
            ContestError::InvalidDice {
                player_roll: 0,
                resistance_roll: 21
            }
        ));
    }

    #[test]
    fn execute_with_rolls_never_touches_dice() {
        let mut dice = MockDiceRollerPort::new();
        dice.expect_roll_d20().never();
        let resolve = ResolveContest::new(Arc::new(dice));
        let frame = ready("10", "Swordplay", "10");

        let result = resolve
            .execute_with_rolls(&frame, DiceRolls::new(8, 5).unwrap())
            .unwrap();

        assert_eq!(result.player_successes, 1);
        assert_eq!(result.resistance_successes, 1);
        assert_eq!(result.winner, ContestWinner::Player);
        assert_eq!(result.degree, 0);
    }

    #[test]
    fn execute_with_rolls_rejects_unready_frame() {
        let resolve = ResolveContest::new(Arc::new(MockDiceRollerPort::new()));
        let err = resolve
            .execute_with_rolls(&framed("14"), DiceRolls::new(7, 7).unwrap())
            .unwrap_err();
        assert!(matches!(err, ContestError::NotReady));
        assert_eq!(
            err.to_string(),
            "Contest is not ready for resolution - player ability required"
        );
    }

    #[test]
    fn interpret_builds_outcome() {
        let frame = ready("14M", "Stealth", "5M2");
        let result = ResolutionResult {
            player_roll: 10,
            resistance_roll: 15,
            player_successes: 3,
            resistance_successes: 1,
            winner: ContestWinner::Player,
            degree: 2,
        };

        let outcome = InterpretOutcome::new().execute(&result, &frame).unwrap();

        assert_eq!(outcome.player_rating, "5M2");
        assert_eq!(outcome.resistance_target_number, "14M");
        assert_eq!(outcome.benefit_consequence_modifier, Some(15));
    }

    #[test]
    fn interpret_rejects_frame_without_ability() {
        let result = ResolutionResult {
            player_roll: 10,
            resistance_roll: 15,
            player_successes: 1,
            resistance_successes: 0,
            winner: ContestWinner::Player,
            degree: 1,
        };
        let err = InterpretOutcome::new()
            .execute(&result, &framed("14"))
            .unwrap_err();
        assert!(matches!(err, ContestError::NotReady));
    }

    #[test]
    fn run_contest_resolves_and_interprets() {
        let use_cases = ContestUseCases::from_dice(Arc::new(dice_returning(vec![18, 14])));
        let frame = ready("14", "Stealth", "10");

        let outcome = use_cases.run.execute(&frame).unwrap();

        // Player rolls over 10: 0 successes; resistance hits 14 exactly: 2
        assert_eq!(outcome.winner, ContestWinner::Resistance);
        assert_eq!(outcome.degree, 2);
        assert_eq!(outcome.benefit_consequence_modifier, Some(-15));
        assert_eq!(outcome.summary, "2 Degrees of Defeat for the player.");
    }

    #[test]
    fn domain_errors_other_than_readiness_pass_through() {
        let err: ContestError = DomainError::validation("Prize cannot be empty").into();
        assert!(matches!(err, ContestError::Domain(DomainError::Validation(_))));
        assert_eq!(err.to_string(), "Validation failed: Prize cannot be empty");
    }
}
