//! PlayerLedger (construction phase) and FrozenLedger (read-only phase).

use crate::models::error::DataIntegrityError;
use crate::models::events::PlayerRecord;
use crate::models::player::{Player, PlayerId};
use crate::models::score::WeekScore;
use std::collections::{BTreeMap, BTreeSet};

/// All players of a game while their scores are being built.
#[derive(Clone, Debug, Default)]
pub struct PlayerLedger {
    players: BTreeMap<PlayerId, Player>,
}

impl PlayerLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from loaded player rows. Ids must be positive and unique.
    pub fn from_records(
        records: impl IntoIterator<Item = PlayerRecord>,
    ) -> Result<Self, DataIntegrityError> {
        let mut ledger = Self::new();
        for record in records {
            ledger.insert(Player::from_record(record))?;
        }
        Ok(ledger)
    }

    /// Add a player. Rejects id 0 and ids already present.
    pub fn insert(&mut self, player: Player) -> Result<(), DataIntegrityError> {
        if player.id == 0 {
            return Err(DataIntegrityError::InvalidPlayerId);
        }
        if self.players.contains_key(&player.id) {
            return Err(DataIntegrityError::DuplicatePlayer(player.id));
        }
        self.players.insert(player.id, player);
        Ok(())
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Whether a player with this id has been loaded.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    /// Attach score data for a player's week, replacing whatever was there.
    pub fn attach_score(
        &mut self,
        id: PlayerId,
        week: u32,
        score: WeekScore,
    ) -> Result<(), DataIntegrityError> {
        let player = self
            .players
            .get_mut(&id)
            .ok_or(DataIntegrityError::NoSuchPlayer(id))?;
        player.attach_score(week, score);
        Ok(())
    }

    /// Players in id order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// End the construction phase. Score data is fixed from here on.
    pub fn freeze(self) -> FrozenLedger {
        FrozenLedger {
            players: self.players,
        }
    }
}

/// Read-only ledger used for ranking, assignment and reporting.
///
/// Only ranks can still change, and only through the ranking engine.
#[derive(Clone, Debug, Default)]
pub struct FrozenLedger {
    players: BTreeMap<PlayerId, Player>,
}

impl FrozenLedger {
    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    /// Players in id order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Players not yet eliminated, in id order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.values().filter(|p| !p.is_eliminated())
    }

    /// Ids of the active players, ascending.
    pub fn active_ids(&self) -> Vec<PlayerId> {
        self.active_players().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Every week that has score data for at least one player.
    pub fn weeks(&self) -> BTreeSet<u32> {
        self.players
            .values()
            .flat_map(|p| p.score_data().keys().copied())
            .collect()
    }

    /// Highest week with score data, if any.
    pub fn latest_week(&self) -> Option<u32> {
        self.weeks().into_iter().next_back()
    }

    /// Overwrite ranks. Ids not in the ledger are ignored.
    pub(crate) fn set_ranks(&mut self, ranks: &[(PlayerId, i32)]) {
        for &(id, rank) in ranks {
            if let Some(p) = self.players.get_mut(&id) {
                p.set_rank(rank);
            }
        }
    }
}
