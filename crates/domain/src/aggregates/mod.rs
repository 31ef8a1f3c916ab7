//! Aggregates - mutable domain objects with a single owner

pub mod contest_frame;

pub use contest_frame::ContestFrame;
