//! Score aggregation: fold raw kill and bonus events into per-player, per-week scores.

use crate::models::{
    BonusEvent, DataIntegrityError, EventKind, GameError, KillEvent, PlayerId, PlayerLedger,
    WeekScore,
};
use std::collections::{BTreeMap, BTreeSet};

/// Distinct week numbers present in the event data, oldest first.
pub fn distinct_weeks(kills: &[KillEvent], bonuses: &[BonusEvent]) -> BTreeSet<u32> {
    kills
        .iter()
        .map(|k| k.week_number)
        .chain(bonuses.iter().map(|b| b.week_number))
        .collect()
}

/// Fold all events into the ledger's players.
///
/// - A kill is credited to the assassin unless they were eliminated in an
///   earlier week. A kill in the week of elimination still counts.
/// - Every kill is recorded as a death for the target.
/// - Bonuses always attach to the assassin's week.
///
/// All events are validated before anything is attached, so an unknown
/// player id or week 0 leaves the ledger untouched. One `WeekScore` is
/// attached per (player, week) pair that has at least one event.
pub fn aggregate_scores(
    ledger: &mut PlayerLedger,
    kills: &[KillEvent],
    bonuses: &[BonusEvent],
) -> Result<(), GameError> {
    validate_events(ledger, kills, bonuses)?;

    let mut scores: BTreeMap<(PlayerId, u32), WeekScore> = BTreeMap::new();
    let mut late_kills = 0usize;

    for kill in kills {
        let week = kill.week_number;
        let counts_for_assassin = ledger
            .player(kill.assassin_id)
            .map(|p| !p.is_eliminated() || p.week_eliminated >= week)
            .unwrap_or(false);
        if counts_for_assassin {
            scores
                .entry((kill.assassin_id, week))
                .or_default()
                .add_target_killed(kill.target_id);
        } else {
            late_kills += 1;
            log::debug!(
                "Kill of {} by {} in week {} not scored: assassin already eliminated",
                kill.target_id,
                kill.assassin_id,
                week
            );
        }
        scores
            .entry((kill.target_id, week))
            .or_default()
            .add_assassin_killer(kill.assassin_id);
    }

    for bonus in bonuses {
        scores
            .entry((bonus.assassin_id, bonus.week_number))
            .or_default()
            .add_bonus(bonus.to_bonus());
    }

    let attached = scores.len();
    for ((player_id, week), score) in scores {
        ledger.attach_score(player_id, week, score)?;
    }

    log::info!(
        "Aggregated {} kills and {} bonuses into {} weekly scores ({} late kills not scored)",
        kills.len(),
        bonuses.len(),
        attached,
        late_kills
    );
    Ok(())
}

fn validate_events(
    ledger: &PlayerLedger,
    kills: &[KillEvent],
    bonuses: &[BonusEvent],
) -> Result<(), DataIntegrityError> {
    let known = |player_id: PlayerId, event: EventKind| {
        if ledger.contains(player_id) {
            Ok(())
        } else {
            Err(DataIntegrityError::UnknownPlayer { player_id, event })
        }
    };

    for kill in kills {
        if kill.week_number == 0 {
            return Err(DataIntegrityError::InvalidWeek {
                week: 0,
                event: EventKind::Kill,
            });
        }
        known(kill.assassin_id, EventKind::Kill)?;
        known(kill.target_id, EventKind::Kill)?;
    }

    for bonus in bonuses {
        if bonus.week_number == 0 {
            return Err(DataIntegrityError::InvalidWeek {
                week: 0,
                event: EventKind::Bonus,
            });
        }
        known(bonus.assassin_id, EventKind::Bonus)?;
        if let Some(target_id) = bonus.target_id {
            known(target_id, EventKind::Bonus)?;
        }
    }

    Ok(())
}
