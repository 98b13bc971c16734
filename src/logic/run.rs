//! One weekly run: load, aggregate, freeze, then assign.

use crate::logic::aggregate::aggregate_scores;
use crate::logic::assignment::{AssignmentGraph, AssignmentMode, TargetAssigner};
use crate::models::{FrozenLedger, GameError, PlayerLedger};
use crate::store::GameStore;
use rand::Rng;

/// Load everything from the store and build the read-only ledger.
///
/// Storage errors abort before any scoring happens.
pub fn load_ledger<S: GameStore + ?Sized>(store: &S) -> Result<FrozenLedger, GameError> {
    let records = store.load_players()?;
    let kills = store.load_kill_events()?;
    let bonuses = store.load_bonus_events()?;
    log::info!(
        "Loaded data for {} players, {} kills, {} bonuses",
        records.len(),
        kills.len(),
        bonuses.len()
    );

    let mut ledger = PlayerLedger::from_records(records)?;
    aggregate_scores(&mut ledger, &kills, &bonuses)?;
    Ok(ledger.freeze())
}

/// Assign targets to every active player with the chosen algorithm.
pub fn run_assignment<R: Rng + ?Sized>(
    ledger: &mut FrozenLedger,
    mode: AssignmentMode,
    target_count: usize,
    rng: &mut R,
) -> Result<AssignmentGraph, GameError> {
    let assigner = TargetAssigner::for_active_players(ledger, target_count)?;
    let graph = match mode {
        AssignmentMode::Rotation => assigner.assign_rotation(rng),
        AssignmentMode::Tiered => assigner.assign_tiered(ledger, rng)?,
        AssignmentMode::Mutual => assigner.assign_mutual(rng)?,
    };
    log::info!(
        "Assigned {} targets each to {} players ({} mode)",
        target_count,
        graph.len(),
        mode
    );
    Ok(graph)
}
