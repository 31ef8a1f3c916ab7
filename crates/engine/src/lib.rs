//! QuestWorlds Engine library.
//!
//! Runs contests on top of `questworlds-domain`.
//!
//! ## Structure
//!
//! - `use_cases/` - Contest resolution and outcome orchestration
//! - `infrastructure/` - Dice roller port and adapters, settings
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
