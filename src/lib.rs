//! Office assassins game master: weekly scoring, rankings and target assignments.

pub mod config;
pub mod logic;
pub mod models;
pub mod report;
pub mod store;

pub use config::RunConfig;
pub use logic::{
    aggregate_scores, assign_ranks, assignment_for, career_summary, compare_players,
    distinct_weeks, load_ledger, mutual_from_order, ranked_players, rotation_from_order,
    run_assignment, AssignmentGraph, AssignmentMode, CareerSummary, PlayerRanking, PlayerSnapshot,
    RankingMode, TargetAssigner, TargetSnapshot, WeekSummary,
};
pub use models::{
    Bonus, BonusEvent, ConfigError, DataIntegrityError, EventKind, FrozenLedger, GameError,
    KillEvent, Player, PlayerId, PlayerLedger, PlayerRecord, StorageError, Tier, WeekScore,
};
pub use report::write_notifications;
pub use store::{CsvStore, GameStore, MemoryStore};
