//! Port traits for infrastructure boundaries.
//!
//! The dice source is the only abstraction in the engine. Everything else
//! is concrete types.

mod testing;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use testing::MockDiceRollerPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::DiceRollerPort;
