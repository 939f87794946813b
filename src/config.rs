//! Runner configuration.
//!
//! Values come from `JARGON_*` environment variables; anything unset falls
//! back to its default. The binary then layers command-line flags on top.
//!
//! # Environment Variables
//!
//! - `JARGON_DATA_FILE`: file read by the continuation snippet
//!   (default: `resources/testfile`)
//! - `JARGON_SEED`: seed for the random number snippet (default: entropy)
//! - `JARGON_SAMPLE_SIZE`: how many random numbers to take (default: 10)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Default file read by the continuation snippet.
pub const DEFAULT_DATA_FILE: &str = "resources/testfile";

/// Default number of random values taken by the lazy evaluation snippet.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Settings shared by every snippet run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// File read by the continuation snippet.
    pub data_file: PathBuf,
    /// Seed for reproducible random output. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Number of random values the lazy evaluation snippet prints.
    pub sample_size: usize,
}

impl RunnerConfig {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value is present but cannot
    /// be parsed.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let data_file = get_optional(&lookup, "JARGON_DATA_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from);
        let seed = get_optional_parsed::<u64, _>(&lookup, "JARGON_SEED")?;
        let sample_size = get_optional_parsed(&lookup, "JARGON_SAMPLE_SIZE")?
            .unwrap_or(DEFAULT_SAMPLE_SIZE);

        Ok(Self {
            data_file,
            seed,
            sample_size,
        })
    }

    /// Replaces the data file.
    #[must_use]
    pub fn with_data_file(self, data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..self
        }
    }

    /// Replaces the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the sample size.
    #[must_use]
    pub const fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            seed: None,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

fn get_optional<L>(lookup: &L, key: &str) -> Option<String>
where
    L: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Gets an optional variable and parses it.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is set but cannot be parsed.
fn get_optional_parsed<T, L>(lookup: &L, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    L: Fn(&str) -> Option<String>,
{
    get_optional(lookup, key)
        .map(|value| parse_value(key, &value))
        .transpose()
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
}
