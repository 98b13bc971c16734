//! Target assignment: rotation, tiered rotation, and mutual groups.
//!
//! All algorithms take the randomness source as a parameter. Given the same
//! shuffled order they always produce the same graph, which is what the
//! `*_from_order` functions expose.

use crate::logic::ranking::{assign_ranks, PlayerRanking, RankingMode};
use crate::models::{
    ConfigError, DataIntegrityError, FrozenLedger, GameError, Player, PlayerId, Tier,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Which algorithm to use for a week's assignments.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMode {
    #[default]
    Rotation,
    Tiered,
    Mutual,
}

impl AssignmentMode {
    /// Parse a mode name. `random` is accepted as an alias for rotation.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rotation" | "random" => Some(AssignmentMode::Rotation),
            "tiered" => Some(AssignmentMode::Tiered),
            "mutual" => Some(AssignmentMode::Mutual),
            _ => None,
        }
    }
}

impl fmt::Display for AssignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentMode::Rotation => write!(f, "rotation"),
            AssignmentMode::Tiered => write!(f, "tiered"),
            AssignmentMode::Mutual => write!(f, "mutual"),
        }
    }
}

/// Assassin id -> ordered target ids, for one assignment run.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AssignmentGraph {
    targets: BTreeMap<PlayerId, Vec<PlayerId>>,
}

impl AssignmentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets of one assassin, or `None` if they received none.
    pub fn targets_for(&self, assassin_id: PlayerId) -> Option<&[PlayerId]> {
        self.targets.get(&assassin_id).map(Vec::as_slice)
    }

    /// (assassin, targets) pairs in assassin id order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &[PlayerId])> {
        self.targets.iter().map(|(id, t)| (*id, t.as_slice()))
    }

    /// Number of assassins with targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    fn insert(&mut self, assassin_id: PlayerId, targets: Vec<PlayerId>) {
        self.targets.insert(assassin_id, targets);
    }

    fn extend(&mut self, other: AssignmentGraph) {
        self.targets.extend(other.targets);
    }
}

/// Ring assignment over an already shuffled order: the player at position
/// `i` targets positions `i+1 ..= i+target_count`, wrapping around.
///
/// Neighbouring players share `target_count - 1` targets.
pub fn rotation_from_order(
    order: &[PlayerId],
    target_count: usize,
) -> Result<AssignmentGraph, ConfigError> {
    validate_target_count(target_count, order.len())?;
    Ok(rotation_in_tier(order, target_count))
}

/// Mutual groups over an already shuffled order: consecutive groups of
/// `target_count + 1`, every member targeting every other member.
pub fn mutual_from_order(
    order: &[PlayerId],
    target_count: usize,
) -> Result<AssignmentGraph, ConfigError> {
    validate_target_count(target_count, order.len())?;
    let group_size = target_count + 1;
    if order.len() % group_size != 0 {
        return Err(ConfigError::UnevenGroups {
            players: order.len(),
            group_size,
        });
    }
    let mut graph = AssignmentGraph::new();
    for group in order.chunks_exact(group_size) {
        for &assassin_id in group {
            let targets = group.iter().copied().filter(|&t| t != assassin_id).collect();
            graph.insert(assassin_id, targets);
        }
    }
    Ok(graph)
}

fn validate_target_count(target_count: usize, players: usize) -> Result<(), ConfigError> {
    if players == 0 {
        return Err(ConfigError::EmptyPlayerSet);
    }
    if target_count == 0 || target_count >= players {
        return Err(ConfigError::InvalidTargetCount {
            target_count,
            players,
            tier: None,
        });
    }
    Ok(())
}

/// Assigns targets among a fixed set of active players.
#[derive(Clone, Debug)]
pub struct TargetAssigner {
    player_ids: Vec<PlayerId>,
    target_count: usize,
}

impl TargetAssigner {
    /// Requires a non-empty subset without duplicates and
    /// `0 < target_count < player_ids.len()`.
    pub fn new(player_ids: Vec<PlayerId>, target_count: usize) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for &id in &player_ids {
            if !seen.insert(id) {
                return Err(ConfigError::DuplicatePlayerInSubset(id));
            }
        }
        validate_target_count(target_count, player_ids.len())?;
        Ok(Self {
            player_ids,
            target_count,
        })
    }

    /// Assigner over every active player in the ledger.
    pub fn for_active_players(
        ledger: &FrozenLedger,
        target_count: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(ledger.active_ids(), target_count)
    }

    /// The players this assigner covers, in the order given.
    pub fn player_ids(&self) -> &[PlayerId] {
        &self.player_ids
    }

    /// Targets handed to each player.
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Shuffle the players and assign each the next `target_count` players on the ring.
    pub fn assign_rotation<R: Rng + ?Sized>(&self, rng: &mut R) -> AssignmentGraph {
        let mut order = self.player_ids.clone();
        order.shuffle(rng);
        rotation_in_tier(&order, self.target_count)
    }

    /// Rank the players (eliminated ones excluded), split at the midpoint,
    /// and run rotation assignment inside each half.
    ///
    /// Both tiers are checked before anything is assigned. On success the
    /// ledger's ranks are recomputed so reports see the ranking used here.
    pub fn assign_tiered<R: Rng + ?Sized>(
        &self,
        ledger: &mut FrozenLedger,
        rng: &mut R,
    ) -> Result<AssignmentGraph, GameError> {
        let players = self
            .player_ids
            .iter()
            .map(|&id| ledger.player(id).ok_or(DataIntegrityError::NoSuchPlayer(id)))
            .collect::<Result<Vec<&Player>, _>>()?;
        let ranked: Vec<PlayerId> = PlayerRanking::new(players, RankingMode::ActiveOnly)?
            .ordered()
            .map(|p| p.id)
            .collect();

        let (top, bottom) = ranked.split_at(ranked.len() / 2);
        for (tier, ids) in [(Tier::Top, top), (Tier::Bottom, bottom)] {
            validate_target_count(self.target_count, ids.len())
                .map_err(|e| in_tier(e, tier))?;
        }
        let (mut top, mut bottom) = (top.to_vec(), bottom.to_vec());

        assign_ranks(ledger)?;

        top.shuffle(rng);
        bottom.shuffle(rng);
        let mut graph = rotation_in_tier(&top, self.target_count);
        graph.extend(rotation_in_tier(&bottom, self.target_count));
        Ok(graph)
    }

    /// Shuffle the players into groups of `target_count + 1` whose members all
    /// target each other. Fails unless the player count divides evenly.
    pub fn assign_mutual<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<AssignmentGraph, ConfigError> {
        let group_size = self.target_count + 1;
        if self.player_ids.len() % group_size != 0 {
            return Err(ConfigError::UnevenGroups {
                players: self.player_ids.len(),
                group_size,
            });
        }
        let mut order = self.player_ids.clone();
        order.shuffle(rng);
        mutual_from_order(&order, self.target_count)
    }
}

/// Tag a rotation failure with the tier it happened in.
fn in_tier(error: ConfigError, tier: Tier) -> ConfigError {
    match error {
        ConfigError::InvalidTargetCount {
            target_count,
            players,
            ..
        } => ConfigError::InvalidTargetCount {
            target_count,
            players,
            tier: Some(tier),
        },
        other => other,
    }
}

/// Ring assignment for a list already known to satisfy `0 < target_count < len`.
fn rotation_in_tier(order: &[PlayerId], target_count: usize) -> AssignmentGraph {
    let n = order.len();
    let mut graph = AssignmentGraph::new();
    for (i, &assassin_id) in order.iter().enumerate() {
        let targets = (1..=target_count).map(|j| order[(i + j) % n]).collect();
        graph.insert(assassin_id, targets);
    }
    graph
}
