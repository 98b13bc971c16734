//! Player ranking.
//!
//! Players are ordered by:
//! 1. higher total score,
//! 2. then more kills,
//! 3. then fewer deaths,
//! 4. then lower player id, so the order is always reproducible.
//!
//! How eliminated players are numbered is decided by [`RankingMode`], kept
//! apart from the comparator so a different elimination scheme only touches
//! the mode.

use crate::models::{ConfigError, FrozenLedger, Player, PlayerId};
use std::cmp::Ordering;

/// How eliminated players take part in a ranking.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RankingMode {
    /// Active players get 1..k, eliminated players get -1..-m, each group in
    /// comparator order. Eliminated players are not ranked by elimination week.
    #[default]
    SignedEliminated,
    /// Eliminated players are dropped before ranking; the rest get 1..k.
    ActiveOnly,
}

/// Total order used for every ranking: best player first.
pub fn compare_players(a: &Player, b: &Player) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.total_kills().cmp(&a.total_kills()))
        .then_with(|| a.total_deaths().cmp(&b.total_deaths()))
        .then_with(|| a.id.cmp(&b.id))
}

/// A sorted, numbered view over a set of players.
#[derive(Clone, Debug)]
pub struct PlayerRanking<'a> {
    ranked: Vec<(&'a Player, i32)>,
    mode: RankingMode,
}

impl<'a> PlayerRanking<'a> {
    /// Rank the given players. Fails on an empty collection.
    pub fn new(
        players: impl IntoIterator<Item = &'a Player>,
        mode: RankingMode,
    ) -> Result<Self, ConfigError> {
        let mut ordered: Vec<&Player> = players.into_iter().collect();
        if ordered.is_empty() {
            return Err(ConfigError::EmptyPlayerSet);
        }
        if mode == RankingMode::ActiveOnly {
            ordered.retain(|p| !p.is_eliminated());
        }
        ordered.sort_by(|a, b| compare_players(a, b));

        let mut rank_number = 1;
        let mut eliminated_rank_number = -1;
        let ranked = ordered
            .into_iter()
            .map(|p| {
                if p.is_eliminated() {
                    let rank = eliminated_rank_number;
                    eliminated_rank_number -= 1;
                    (p, rank)
                } else {
                    let rank = rank_number;
                    rank_number += 1;
                    (p, rank)
                }
            })
            .collect();

        Ok(Self { ranked, mode })
    }

    pub fn mode(&self) -> RankingMode {
        self.mode
    }

    /// Players in comparator order (active and eliminated interleaved).
    pub fn ordered(&self) -> impl Iterator<Item = &'a Player> + '_ {
        self.ranked.iter().map(|(p, _)| *p)
    }

    /// (player id, rank) pairs in comparator order.
    pub fn ranks(&self) -> Vec<(PlayerId, i32)> {
        self.ranked.iter().map(|(p, r)| (p.id, *r)).collect()
    }

    pub fn rank_of(&self, id: PlayerId) -> Option<i32> {
        self.ranked.iter().find(|(p, _)| p.id == id).map(|(_, r)| *r)
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Rank every player in the ledger and store the ranks on the players.
/// Active players get 1..k, eliminated players -1..-m.
pub fn assign_ranks(ledger: &mut FrozenLedger) -> Result<(), ConfigError> {
    let ranks = PlayerRanking::new(ledger.players(), RankingMode::SignedEliminated)?.ranks();
    ledger.set_ranks(&ranks);
    Ok(())
}
