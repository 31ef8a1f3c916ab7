//! Engine settings loaded from the environment.
//!
//! | Variable                | Meaning                                   | Default                  |
//! |-------------------------|-------------------------------------------|--------------------------|
//! | `QUESTWORLDS_DICE_SEED` | Seed for reproducible dice (`u64`)        | unset: thread RNG        |
//! | `QUESTWORLDS_LOG`       | Log filter when `RUST_LOG` is unset       | `questworlds_engine=info`|
//! | `QUESTWORLDS_OUTPUT`    | `text` or `json`                          | `text`                   |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DICE_SEED_VAR: &str = "QUESTWORLDS_DICE_SEED";
pub const LOG_FILTER_VAR: &str = "QUESTWORLDS_LOG";
pub const OUTPUT_VAR: &str = "QUESTWORLDS_OUTPUT";

pub const DEFAULT_LOG_FILTER: &str = "questworlds_engine=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got '{value}'")]
    InvalidSeed { var: &'static str, value: String },
    #[error("{var} must be 'text' or 'json', got '{value}'")]
    InvalidOutput { var: &'static str, value: String },
}

/// How contest outcomes are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The one-line summary plus roll details
    #[default]
    Text,
    /// The full outcome as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// All configurable engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Seed for the dice roller. None = thread RNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice_seed: Option<u64>,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,

    pub output: OutputFormat,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            dice_seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl EngineSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut settings = Self::default();

        if let Some(value) = read(DICE_SEED_VAR) {
            let seed = value.parse().map_err(|_| ConfigError::InvalidSeed {
                var: DICE_SEED_VAR,
                value: value.clone(),
            })?;
            settings.dice_seed = Some(seed);
        }

        if let Some(value) = read(LOG_FILTER_VAR) {
            settings.log_filter = value;
        }

        if let Some(value) = read(OUTPUT_VAR) {
            settings.output = value.parse().map_err(|_| ConfigError::InvalidOutput {
                var: OUTPUT_VAR,
                value: value.clone(),
            })?;
        }

        Ok(settings)
    }
}
