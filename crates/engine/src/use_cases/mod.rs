//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod contest;

// Re-export main types
pub use contest::{ContestError, ContestUseCases, InterpretOutcome, ResolveContest, RunContest};
