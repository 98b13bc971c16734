//! Player: identity, elimination status, rank, and per-week score history.

use crate::models::events::PlayerRecord;
use crate::models::score::WeekScore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Unique identifier for a player. Positive; matches the id in the raw data.
pub type PlayerId = u32;

/// A player and their whole score history.
///
/// Career totals are summed from `score_data` on demand; there is no
/// separately stored total that could drift from the weekly records.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// 0 while active, otherwise the week the player was eliminated.
    pub week_eliminated: u32,
    rank: i32,
    /// Keyed by week number.
    score_data: BTreeMap<u32, WeekScore>,
}

impl Player {
    pub fn new(
        id: PlayerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        week_eliminated: u32,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            week_eliminated,
            rank: 0,
            score_data: BTreeMap::new(),
        }
    }

    pub fn from_record(record: PlayerRecord) -> Self {
        Self::new(
            record.id,
            record.first_name,
            record.last_name,
            record.email,
            record.week_eliminated,
        )
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_eliminated(&self) -> bool {
        self.week_eliminated != 0
    }

    /// Rank from the last ranking pass: 1..k for active players, -1..-m for
    /// eliminated ones, 0 if never ranked.
    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub(crate) fn set_rank(&mut self, rank: i32) {
        self.rank = rank;
    }

    /// Attach score data for a week. Existing data for that week is replaced.
    pub fn attach_score(&mut self, week: u32, score: WeekScore) {
        self.score_data.insert(week, score);
    }

    pub fn score_data(&self) -> &BTreeMap<u32, WeekScore> {
        &self.score_data
    }

    pub fn week_score(&self, week: u32) -> Option<&WeekScore> {
        self.score_data.get(&week)
    }

    pub fn total_score(&self) -> i32 {
        self.score_data.values().map(WeekScore::score).sum()
    }

    pub fn total_kills(&self) -> i32 {
        self.score_data.values().map(WeekScore::kills).sum()
    }

    pub fn total_deaths(&self) -> i32 {
        self.score_data.values().map(WeekScore::deaths).sum()
    }

    pub fn total_bonus_points(&self) -> i32 {
        self.score_data.values().map(WeekScore::bonus_points).sum()
    }
}
