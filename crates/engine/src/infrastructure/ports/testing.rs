//! Testability ports for injecting randomness.

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of d20 results for contest resolution.
///
/// Implementations must return a uniformly distributed value in 1..=20 on
/// every call, independently of earlier calls. A roller shared between
/// concurrently resolved contests must tolerate concurrent calls.
#[cfg_attr(test, mockall::automock)]
pub trait DiceRollerPort: Send + Sync {
    fn roll_d20(&self) -> u8;
}
