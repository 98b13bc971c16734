//! WeekScore and Bonus: one player's scoring record for one week.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Bonus points (possibly negative) earned in a week.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    /// The player this bonus relates to, if any.
    pub target_id: Option<PlayerId>,
    pub points: i32,
    pub name: String,
    pub description: String,
}

/// Kills, deaths and bonuses for one (player, week) pair.
///
/// `kills`, `deaths` and `score` are computed from the lists on every call,
/// so they can never go stale.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct WeekScore {
    target_player_ids: Vec<PlayerId>,
    assassin_player_ids: Vec<PlayerId>,
    bonuses: Vec<Bonus>,
}

impl WeekScore {
    /// Empty week with no events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a target this player killed.
    pub fn add_target_killed(&mut self, player_id: PlayerId) {
        self.target_player_ids.push(player_id);
    }

    /// Record an assassin who killed this player.
    pub fn add_assassin_killer(&mut self, player_id: PlayerId) {
        self.assassin_player_ids.push(player_id);
    }

    /// Record a bonus earned this week.
    pub fn add_bonus(&mut self, bonus: Bonus) {
        self.bonuses.push(bonus);
    }

    /// Targets killed this week, in event order.
    pub fn target_player_ids(&self) -> &[PlayerId] {
        &self.target_player_ids
    }

    /// Assassins who killed this player this week.
    pub fn assassin_player_ids(&self) -> &[PlayerId] {
        &self.assassin_player_ids
    }

    /// Bonuses earned this week.
    pub fn bonuses(&self) -> &[Bonus] {
        &self.bonuses
    }

    /// Number of kills credited this week.
    pub fn kills(&self) -> i32 {
        self.target_player_ids.len() as i32
    }

    /// Number of times this player was killed this week.
    pub fn deaths(&self) -> i32 {
        self.assassin_player_ids.len() as i32
    }

    /// Sum of all bonus points this week.
    pub fn bonus_points(&self) -> i32 {
        self.bonuses.iter().map(|b| b.points).sum()
    }

    /// kills - deaths + bonus points.
    pub fn score(&self) -> i32 {
        self.kills() - self.deaths() + self.bonus_points()
    }

    /// True if nothing happened this week.
    pub fn is_empty(&self) -> bool {
        self.target_player_ids.is_empty()
            && self.assassin_player_ids.is_empty()
            && self.bonuses.is_empty()
    }
}
