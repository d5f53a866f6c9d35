//! Run settings resolved from flags, then environment, then defaults.

use std::env;

use crate::tape::DEFAULT_TAPE_SIZE;

/// Environment variable consulted when `--tape-size` is not given.
pub const TAPE_SIZE_ENV: &str = "BF_TAPE_SIZE";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("BF_TAPE_SIZE must be a positive number of cells, got '{0}'")]
    InvalidTapeSize(String),
}

/// Everything a single run needs besides the program itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tape_size: usize,
    /// Suppress wraparound warnings.
    pub quiet: bool,
    /// Print a step-by-step table of operations to stderr.
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tape_size: DEFAULT_TAPE_SIZE,
            quiet: false,
            debug: false,
        }
    }
}

impl Settings {
    /// Resolve settings against the process environment.
    pub fn from_env(tape_size: Option<usize>, quiet: bool, debug: bool) -> Result<Self, ConfigError> {
        let env_tape_size = env::var(TAPE_SIZE_ENV).ok();
        Ok(Self {
            tape_size: resolve_tape_size(tape_size, env_tape_size.as_deref())?,
            quiet,
            debug,
        })
    }
}

/// Flags win over the environment; the environment wins over the default.
/// A zero-sized tape is never valid.
pub fn resolve_tape_size(flag: Option<usize>, env_value: Option<&str>) -> Result<usize, ConfigError> {
    if let Some(size) = flag {
        return Ok(size);
    }

    match env_value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_TAPE_SIZE),
        Some(raw) => match raw.parse::<usize>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(ConfigError::InvalidTapeSize(raw.to_string())),
        },
    }
}
