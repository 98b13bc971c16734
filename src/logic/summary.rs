//! Read-only views handed to report and notification generators.

use crate::logic::assignment::AssignmentGraph;
use crate::logic::ranking::compare_players;
use crate::models::{Bonus, DataIntegrityError, FrozenLedger, Player, PlayerId};
use serde::Serialize;

/// A player's standing at the time of the snapshot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub week_eliminated: u32,
    pub rank: i32,
    pub total_score: i32,
    pub total_kills: i32,
    pub total_deaths: i32,
}

impl PlayerSnapshot {
    pub fn from_player(p: &Player) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            email: p.email.clone(),
            week_eliminated: p.week_eliminated,
            rank: p.rank(),
            total_score: p.total_score(),
            total_kills: p.total_kills(),
            total_deaths: p.total_deaths(),
        }
    }

    pub fn is_eliminated(&self) -> bool {
        self.week_eliminated != 0
    }
}

/// Just enough to tell an assassin who to go after.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TargetSnapshot {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
}

/// One week of a career summary.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WeekSummary {
    pub week: u32,
    pub kills: i32,
    pub deaths: i32,
    pub score: i32,
    pub killed_ids: Vec<PlayerId>,
    pub killed_by_ids: Vec<PlayerId>,
    pub bonuses: Vec<Bonus>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CareerSummary {
    pub player_id: PlayerId,
    pub total_score: i32,
    pub total_kills: i32,
    pub total_deaths: i32,
    /// Oldest week first.
    pub per_week: Vec<WeekSummary>,
}

/// All players, best first, using the ranking comparator.
pub fn ranked_players(ledger: &FrozenLedger) -> Vec<PlayerSnapshot> {
    let mut players: Vec<&Player> = ledger.players().collect();
    players.sort_by(|a, b| compare_players(a, b));
    players.into_iter().map(PlayerSnapshot::from_player).collect()
}

/// The targets assigned to a player, in assignment order. Empty if the
/// player received no targets in this run.
pub fn assignment_for(
    ledger: &FrozenLedger,
    graph: &AssignmentGraph,
    player_id: PlayerId,
) -> Result<Vec<TargetSnapshot>, DataIntegrityError> {
    if !ledger.contains(player_id) {
        return Err(DataIntegrityError::NoSuchPlayer(player_id));
    }
    graph
        .targets_for(player_id)
        .unwrap_or_default()
        .iter()
        .map(|&id| {
            ledger
                .player(id)
                .map(|target| TargetSnapshot {
                    id,
                    first_name: target.first_name.clone(),
                    last_name: target.last_name.clone(),
                })
                .ok_or(DataIntegrityError::NoSuchPlayer(id))
        })
        .collect()
}

/// Career totals plus a week-by-week breakdown.
pub fn career_summary(
    ledger: &FrozenLedger,
    player_id: PlayerId,
) -> Result<CareerSummary, DataIntegrityError> {
    let player = ledger
        .player(player_id)
        .ok_or(DataIntegrityError::NoSuchPlayer(player_id))?;
    let per_week = player
        .score_data()
        .iter()
        .map(|(&week, s)| WeekSummary {
            week,
            kills: s.kills(),
            deaths: s.deaths(),
            score: s.score(),
            killed_ids: s.target_player_ids().to_vec(),
            killed_by_ids: s.assassin_player_ids().to_vec(),
            bonuses: s.bonuses().to_vec(),
        })
        .collect();
    Ok(CareerSummary {
        player_id,
        total_score: player.total_score(),
        total_kills: player.total_kills(),
        total_deaths: player.total_deaths(),
        per_week,
    })
}
