//! Run configuration from environment variables.
//!
//! | Variable             | Default                           |
//! |----------------------|-----------------------------------|
//! | `ASSASSINS_DATA_DIR` | `data`                            |
//! | `ASSASSINS_TARGETS`  | `3`                               |
//! | `ASSASSINS_MODE`     | `rotation` (or `tiered`, `mutual`)|
//! | `ASSASSINS_WEEK`     | latest week in the data + 1       |
//! | `ASSASSINS_OUTPUT`   | `emails/targets_week_<week>.txt`  |
//! | `ASSASSINS_SEED`     | unset: fresh randomness each run  |

use crate::logic::AssignmentMode;
use crate::models::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

pub const DATA_DIR_VAR: &str = "ASSASSINS_DATA_DIR";
pub const TARGETS_VAR: &str = "ASSASSINS_TARGETS";
pub const MODE_VAR: &str = "ASSASSINS_MODE";
pub const WEEK_VAR: &str = "ASSASSINS_WEEK";
pub const OUTPUT_VAR: &str = "ASSASSINS_OUTPUT";
pub const SEED_VAR: &str = "ASSASSINS_SEED";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunConfig {
    pub data_dir: PathBuf,
    pub target_count: usize,
    pub mode: AssignmentMode,
    /// None: derive from the data (latest week + 1).
    pub game_week: Option<u32>,
    /// None: `emails/targets_week_<week>.txt`.
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_target_count() -> usize {
    3
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            target_count: default_target_count(),
            mode: AssignmentMode::default(),
            game_week: None,
            output: None,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match get(MODE_VAR) {
            Some(value) => AssignmentMode::from_name(&value).ok_or(ConfigError::InvalidSetting {
                key: MODE_VAR.to_string(),
                value,
            })?,
            None => AssignmentMode::default(),
        };

        Ok(Self {
            data_dir: get(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            target_count: parse_setting(TARGETS_VAR, get(TARGETS_VAR))?
                .unwrap_or_else(default_target_count),
            mode,
            game_week: parse_setting(WEEK_VAR, get(WEEK_VAR))?,
            output: get(OUTPUT_VAR).map(PathBuf::from),
            seed: parse_setting(SEED_VAR, get(SEED_VAR))?,
        })
    }

    /// Week to write notifications for, given the latest week with data.
    pub fn resolve_game_week(&self, latest_week: Option<u32>) -> u32 {
        self.game_week
            .unwrap_or_else(|| latest_week.unwrap_or(0).saturating_add(1))
    }

    pub fn resolve_output(&self, game_week: u32) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("emails/targets_week_{}.txt", game_week)))
    }
}

fn parse_setting<T: FromStr>(key: &str, value: Option<String>) -> Result<Option<T>, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidSetting {
                key: key.to_string(),
                value,
            }),
        None => Ok(None),
    }
}
