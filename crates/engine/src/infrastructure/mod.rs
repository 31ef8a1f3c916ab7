//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod dice;
pub mod ports;
pub mod settings;
