//! Game logic: score aggregation, ranking, target assignment, summaries.

mod aggregate;
mod assignment;
mod ranking;
mod run;
mod summary;

pub use aggregate::{aggregate_scores, distinct_weeks};
pub use assignment::{
    mutual_from_order, rotation_from_order, AssignmentGraph, AssignmentMode, TargetAssigner,
};
pub use ranking::{assign_ranks, compare_players, PlayerRanking, RankingMode};
pub use run::{load_ledger, run_assignment};
pub use summary::{
    assignment_for, career_summary, ranked_players, CareerSummary, PlayerSnapshot,
    TargetSnapshot, WeekSummary,
};
