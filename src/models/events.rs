//! Raw records supplied by the data-access boundary.
//!
//! Field names map onto the game database columns, so the same
//! structs deserialize straight from CSV exports of those tables.

use crate::models::player::PlayerId;
use crate::models::score::Bonus;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the players table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// 0 while active. A missing column or blank cell reads as 0.
    #[serde(default, deserialize_with = "zero_if_blank")]
    pub week_eliminated: u32,
}

fn zero_if_blank<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

/// `assassin_id` killed `target_id` during `week_number`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KillEvent {
    pub assassin_id: PlayerId,
    pub target_id: PlayerId,
    pub week_number: u32,
}

impl KillEvent {
    pub fn new(assassin_id: PlayerId, target_id: PlayerId, week_number: u32) -> Self {
        Self {
            assassin_id,
            target_id,
            week_number,
        }
    }
}

/// A bonus awarded to `assassin_id` for `week_number`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BonusEvent {
    pub assassin_id: PlayerId,
    #[serde(default)]
    pub target_id: Option<PlayerId>,
    pub week_number: u32,
    #[serde(rename = "BonusPoints")]
    pub points: i32,
    #[serde(rename = "BonusName")]
    pub name: String,
    #[serde(rename = "BonusDescription", default)]
    pub description: String,
}

impl BonusEvent {
    /// The bonus record this event attaches to the assassin's week.
    pub fn to_bonus(&self) -> Bonus {
        Bonus {
            target_id: self.target_id,
            points: self.points,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}
