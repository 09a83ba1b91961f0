//! Configuration resolved from the environment

use std::ffi::OsString;
use std::path::PathBuf;

/// Overrides where puzzle inputs are read from
pub const INPUT_DIR_VAR: &str = "AOC_INPUT_DIR";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one `day-N` folder per puzzle
    pub input_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let input_dir = lookup(INPUT_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_input_dir);
        Self { input_dir }
    }

    /// Folder with the inputs for `day`
    pub fn day_dir(&self, day: u8) -> PathBuf {
        self.input_dir.join(format!("day-{day}"))
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("inputs")
}
