//! Error taxonomy: configuration, data integrity, and storage failures.

use crate::models::player::PlayerId;
use std::fmt;

/// Which half of the ranked player list a tier covers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tier {
    Top,
    Bottom,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Top => write!(f, "top"),
            Tier::Bottom => write!(f, "bottom"),
        }
    }
}

/// The kind of raw event a data-integrity error was found in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventKind {
    Kill,
    Bonus,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Kill => write!(f, "kill"),
            EventKind::Bonus => write!(f, "bonus"),
        }
    }
}

/// Invalid parameters for ranking or assignment. Always reported, never corrected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Target count must satisfy `0 < target_count < players`. `tier` is set
    /// when the rotation failed inside one tier of a tiered assignment.
    InvalidTargetCount {
        target_count: usize,
        players: usize,
        tier: Option<Tier>,
    },
    /// Ranking or assignment was given no players at all.
    EmptyPlayerSet,
    /// Mutual grouping needs `players % group_size == 0`.
    UnevenGroups { players: usize, group_size: usize },
    /// The same player appears twice in an assignment subset.
    DuplicatePlayerInSubset(PlayerId),
    /// A configuration value could not be parsed.
    InvalidSetting { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTargetCount {
                target_count,
                players,
                tier: None,
            } => write!(
                f,
                "Invalid number of targets {} for {} players",
                target_count, players
            ),
            ConfigError::InvalidTargetCount {
                target_count,
                players,
                tier: Some(tier),
            } => write!(
                f,
                "Invalid number of targets {} for {} players in the {} tier",
                target_count, players, tier
            ),
            ConfigError::EmptyPlayerSet => write!(f, "Empty player set"),
            ConfigError::UnevenGroups {
                players,
                group_size,
            } => write!(
                f,
                "Active player count {} not evenly divisible into groups of {}",
                players, group_size
            ),
            ConfigError::DuplicatePlayerInSubset(id) => {
                write!(f, "Player {} listed more than once for assignment", id)
            }
            ConfigError::InvalidSetting { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Raw data that cannot be folded into scores. Aborts the whole aggregation pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataIntegrityError {
    /// An event references a player id that was never loaded.
    UnknownPlayer { player_id: PlayerId, event: EventKind },
    /// Score data was attached to a player id that is not in the ledger.
    NoSuchPlayer(PlayerId),
    /// Two player records share an id.
    DuplicatePlayer(PlayerId),
    /// Player ids are positive; 0 is reserved.
    InvalidPlayerId,
    /// Weeks are 1-indexed.
    InvalidWeek { week: u32, event: EventKind },
}

impl fmt::Display for DataIntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataIntegrityError::UnknownPlayer { player_id, event } => {
                write!(f, "{} event references unknown player {}", event, player_id)
            }
            DataIntegrityError::NoSuchPlayer(id) => write!(f, "No player with id {}", id),
            DataIntegrityError::DuplicatePlayer(id) => write!(f, "Duplicate player id {}", id),
            DataIntegrityError::InvalidPlayerId => write!(f, "Player id 0 is not allowed"),
            DataIntegrityError::InvalidWeek { week, event } => {
                write!(f, "{} event has invalid week number {}", event, week)
            }
        }
    }
}

impl std::error::Error for DataIntegrityError {}

/// Failure reading raw data at the data-access boundary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageError {
    Io { path: String, message: String },
    Parse { path: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io { path, message } => write!(f, "Error reading '{}': {}", path, message),
            StorageError::Parse { path, message } => {
                write!(f, "Error parsing '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Any failure of a weekly run. The variant names the phase that failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    Configuration(ConfigError),
    DataIntegrity(DataIntegrityError),
    Storage(StorageError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Configuration(e) => write!(f, "Configuration error: {}", e),
            GameError::DataIntegrity(e) => write!(f, "Data integrity error: {}", e),
            GameError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Configuration(e) => Some(e),
            GameError::DataIntegrity(e) => Some(e),
            GameError::Storage(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        GameError::Configuration(e)
    }
}

impl From<DataIntegrityError> for GameError {
    fn from(e: DataIntegrityError) -> Self {
        GameError::DataIntegrity(e)
    }
}

impl From<StorageError> for GameError {
    fn from(e: StorageError) -> Self {
        GameError::Storage(e)
    }
}
