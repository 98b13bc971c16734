//! Data-access boundary: where players, kills and bonuses are loaded from.

use crate::models::{BonusEvent, KillEvent, PlayerRecord, StorageError};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Source of the raw game data for one run.
pub trait GameStore {
    fn load_players(&self) -> Result<Vec<PlayerRecord>, StorageError>;
    fn load_kill_events(&self) -> Result<Vec<KillEvent>, StorageError>;
    fn load_bonus_events(&self) -> Result<Vec<BonusEvent>, StorageError>;
}

/// Reads `players.csv`, `kills.csv` and `bonuses.csv` from one directory.
///
/// Headers follow the game database columns:
/// - players: `Id,FirstName,LastName,Email,WeekEliminated`
/// - kills: `AssassinId,TargetId,WeekNumber`
/// - bonuses: `AssassinId,TargetId,WeekNumber,BonusPoints,BonusName,BonusDescription`
#[derive(Clone, Debug)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub const PLAYERS_FILE: &'static str = "players.csv";
    pub const KILLS_FILE: &'static str = "kills.csv";
    pub const BONUSES_FILE: &'static str = "bonuses.csv";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_table<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>, StorageError> {
        let path = self.dir.join(file_name);
        let display = path.display().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(|e| StorageError::Io {
                path: display.clone(),
                message: e.to_string(),
            })?;
        let rows = reader
            .deserialize()
            .collect::<Result<Vec<T>, csv::Error>>()
            .map_err(|e| StorageError::Parse {
                path: display.clone(),
                message: e.to_string(),
            })?;
        log::debug!("Loaded {} rows from {}", rows.len(), display);
        Ok(rows)
    }
}

impl GameStore for CsvStore {
    fn load_players(&self) -> Result<Vec<PlayerRecord>, StorageError> {
        self.read_table(Self::PLAYERS_FILE)
    }

    fn load_kill_events(&self) -> Result<Vec<KillEvent>, StorageError> {
        self.read_table(Self::KILLS_FILE)
    }

    fn load_bonus_events(&self) -> Result<Vec<BonusEvent>, StorageError> {
        self.read_table(Self::BONUSES_FILE)
    }
}

/// In-memory store, for tests and for callers that already hold the records.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub players: Vec<PlayerRecord>,
    pub kills: Vec<KillEvent>,
    pub bonuses: Vec<BonusEvent>,
}

impl MemoryStore {
    pub fn new(players: Vec<PlayerRecord>, kills: Vec<KillEvent>, bonuses: Vec<BonusEvent>) -> Self {
        Self {
            players,
            kills,
            bonuses,
        }
    }
}

impl GameStore for MemoryStore {
    fn load_players(&self) -> Result<Vec<PlayerRecord>, StorageError> {
        Ok(self.players.clone())
    }

    fn load_kill_events(&self) -> Result<Vec<KillEvent>, StorageError> {
        Ok(self.kills.clone())
    }

    fn load_bonus_events(&self) -> Result<Vec<BonusEvent>, StorageError> {
        Ok(self.bonuses.clone())
    }
}
