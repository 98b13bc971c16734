//! Integration tests for score aggregation and the player ledger.

use office_assassins::{
    aggregate_scores, distinct_weeks, BonusEvent, DataIntegrityError, EventKind, GameError,
    KillEvent, PlayerLedger, PlayerRecord, WeekScore,
};

fn record(id: u32, week_eliminated: u32) -> PlayerRecord {
    PlayerRecord {
        id,
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("p{id}@example.com"),
        week_eliminated,
    }
}

fn ledger_with(eliminated: &[(u32, u32)], n: u32) -> PlayerLedger {
    PlayerLedger::from_records((1..=n).map(|id| {
        let week = eliminated
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, w)| *w)
            .unwrap_or(0);
        record(id, week)
    }))
    .unwrap()
}

fn bonus(assassin_id: u32, target_id: Option<u32>, week_number: u32, points: i32) -> BonusEvent {
    BonusEvent {
        assassin_id,
        target_id,
        week_number,
        points,
        name: "Bonus".to_string(),
        description: "test bonus".to_string(),
    }
}

#[test]
fn kill_counts_for_assassin_and_target() {
    let mut ledger = ledger_with(&[], 3);
    let kills = [KillEvent::new(1, 2, 1), KillEvent::new(1, 3, 1)];
    aggregate_scores(&mut ledger, &kills, &[]).unwrap();

    let assassin = ledger.player(1).unwrap();
    assert_eq!(assassin.total_kills(), 2);
    assert_eq!(assassin.total_deaths(), 0);
    assert_eq!(assassin.total_score(), 2);
    assert_eq!(assassin.week_score(1).unwrap().target_player_ids(), &[2, 3]);

    let victim = ledger.player(2).unwrap();
    assert_eq!(victim.total_deaths(), 1);
    assert_eq!(victim.total_score(), -1);
    assert_eq!(victim.week_score(1).unwrap().assassin_player_ids(), &[1]);
}

#[test]
fn kill_after_elimination_is_not_scored_but_death_is() {
    // Player 1 eliminated in week 2, kills player 2 in week 3.
    let mut ledger = ledger_with(&[(1, 2)], 2);
    aggregate_scores(&mut ledger, &[KillEvent::new(1, 2, 3)], &[]).unwrap();

    let assassin = ledger.player(1).unwrap();
    assert_eq!(assassin.total_kills(), 0);
    assert!(assassin.week_score(3).is_none());

    let target = ledger.player(2).unwrap();
    assert_eq!(target.week_score(3).unwrap().deaths(), 1);
}

#[test]
fn kill_in_week_of_elimination_still_counts() {
    let mut ledger = ledger_with(&[(1, 2)], 2);
    aggregate_scores(&mut ledger, &[KillEvent::new(1, 2, 2)], &[]).unwrap();
    assert_eq!(ledger.player(1).unwrap().week_score(2).unwrap().kills(), 1);
}

#[test]
fn eliminated_target_still_records_death() {
    let mut ledger = ledger_with(&[(2, 1)], 2);
    aggregate_scores(&mut ledger, &[KillEvent::new(1, 2, 4)], &[]).unwrap();
    assert_eq!(ledger.player(2).unwrap().total_deaths(), 1);
    assert_eq!(ledger.player(1).unwrap().total_kills(), 1);
}

#[test]
fn bonuses_attach_to_assassin_even_when_eliminated() {
    let mut ledger = ledger_with(&[(1, 1)], 2);
    let bonuses = [bonus(1, Some(2), 3, 5), bonus(1, None, 3, -2)];
    aggregate_scores(&mut ledger, &[], &bonuses).unwrap();

    let p = ledger.player(1).unwrap();
    let week = p.week_score(3).unwrap();
    assert_eq!(week.bonuses().len(), 2);
    assert_eq!(week.bonus_points(), 3);
    assert_eq!(p.total_score(), 3);
    assert!(ledger.player(2).unwrap().score_data().is_empty());
}

#[test]
fn unknown_player_aborts_without_touching_ledger() {
    let mut ledger = ledger_with(&[], 2);
    let kills = [KillEvent::new(1, 2, 1), KillEvent::new(1, 99, 1)];
    let err = aggregate_scores(&mut ledger, &kills, &[]).unwrap_err();
    assert_eq!(
        err,
        GameError::DataIntegrity(DataIntegrityError::UnknownPlayer {
            player_id: 99,
            event: EventKind::Kill,
        })
    );
    assert!(ledger.players().all(|p| p.score_data().is_empty()));
}

#[test]
fn unknown_bonus_target_is_a_data_integrity_error() {
    let mut ledger = ledger_with(&[], 2);
    let err = aggregate_scores(&mut ledger, &[], &[bonus(1, Some(7), 1, 1)]).unwrap_err();
    assert!(matches!(
        err,
        GameError::DataIntegrity(DataIntegrityError::UnknownPlayer {
            player_id: 7,
            event: EventKind::Bonus
        })
    ));
}

#[test]
fn week_zero_is_rejected() {
    let mut ledger = ledger_with(&[], 2);
    let err = aggregate_scores(&mut ledger, &[KillEvent::new(1, 2, 0)], &[]).unwrap_err();
    assert!(matches!(
        err,
        GameError::DataIntegrity(DataIntegrityError::InvalidWeek { week: 0, .. })
    ));
}

#[test]
fn duplicate_and_zero_player_ids_are_rejected() {
    assert_eq!(
        PlayerLedger::from_records(vec![record(1, 0), record(1, 0)]).unwrap_err(),
        DataIntegrityError::DuplicatePlayer(1)
    );
    assert_eq!(
        PlayerLedger::from_records(vec![record(0, 0)]).unwrap_err(),
        DataIntegrityError::InvalidPlayerId
    );
}

#[test]
fn totals_match_kills_minus_deaths_plus_bonuses() {
    let mut ledger = ledger_with(&[(4, 2)], 5);
    let kills = [
        KillEvent::new(1, 2, 1),
        KillEvent::new(2, 1, 1),
        KillEvent::new(3, 4, 1),
        KillEvent::new(4, 5, 2),
        KillEvent::new(4, 1, 3),
        KillEvent::new(1, 3, 3),
        KillEvent::new(5, 3, 3),
    ];
    let bonuses = [bonus(1, Some(3), 3, 2), bonus(5, None, 1, -1), bonus(3, None, 2, 4)];
    aggregate_scores(&mut ledger, &kills, &bonuses).unwrap();

    for p in ledger.players() {
        assert_eq!(
            p.total_score(),
            p.total_kills() - p.total_deaths() + p.total_bonus_points(),
            "player {}",
            p.id
        );
        for week in p.score_data().values() {
            assert_eq!(week.kills() as usize, week.target_player_ids().len());
            assert_eq!(week.deaths() as usize, week.assassin_player_ids().len());
        }
    }
    // Late kill of player 1 by player 4 (eliminated week 2) is not scored.
    assert_eq!(ledger.player(4).unwrap().total_kills(), 1);
    assert_eq!(ledger.player(1).unwrap().total_deaths(), 2);
}

#[test]
fn aggregation_is_independent_of_event_order() {
    let kills = vec![
        KillEvent::new(1, 2, 1),
        KillEvent::new(3, 1, 1),
        KillEvent::new(2, 3, 2),
        KillEvent::new(1, 3, 2),
    ];
    let bonuses = vec![bonus(2, None, 2, 3), bonus(1, Some(2), 1, 1)];

    let mut forward = ledger_with(&[], 3);
    aggregate_scores(&mut forward, &kills, &bonuses).unwrap();

    let mut reversed_kills = kills.clone();
    reversed_kills.reverse();
    let mut reversed_bonuses = bonuses.clone();
    reversed_bonuses.reverse();
    let mut backward = ledger_with(&[], 3);
    aggregate_scores(&mut backward, &reversed_kills, &reversed_bonuses).unwrap();

    for (a, b) in forward.players().zip(backward.players()) {
        assert_eq!(a.total_score(), b.total_score());
        assert_eq!(a.total_kills(), b.total_kills());
        assert_eq!(a.total_deaths(), b.total_deaths());
        for (week, score) in a.score_data() {
            let other = b.week_score(*week).unwrap();
            assert_eq!(score.kills(), other.kills());
            assert_eq!(score.deaths(), other.deaths());
            assert_eq!(score.score(), other.score());
        }
    }
}

#[test]
fn only_weeks_with_events_get_scores() {
    let mut ledger = ledger_with(&[], 3);
    aggregate_scores(&mut ledger, &[KillEvent::new(1, 2, 1), KillEvent::new(1, 2, 3)], &[]).unwrap();
    let weeks: Vec<u32> = ledger.player(1).unwrap().score_data().keys().copied().collect();
    assert_eq!(weeks, vec![1, 3]);
    assert!(ledger.player(3).unwrap().score_data().is_empty());
}

#[test]
fn distinct_weeks_merges_kills_and_bonuses() {
    let weeks = distinct_weeks(
        &[KillEvent::new(1, 2, 3), KillEvent::new(2, 1, 1)],
        &[bonus(1, None, 2, 1), bonus(1, None, 3, 1)],
    );
    assert_eq!(weeks.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn attach_score_overwrites_week() {
    let mut ledger = ledger_with(&[], 2);
    let mut first = WeekScore::new();
    first.add_target_killed(2);
    first.add_target_killed(2);
    ledger.attach_score(1, 1, first).unwrap();
    assert_eq!(ledger.player(1).unwrap().total_kills(), 2);

    let mut second = WeekScore::new();
    second.add_assassin_killer(2);
    ledger.attach_score(1, 1, second).unwrap();
    let p = ledger.player(1).unwrap();
    assert_eq!(p.total_kills(), 0);
    assert_eq!(p.total_deaths(), 1);
    assert_eq!(p.total_score(), -1);

    assert_eq!(
        ledger.attach_score(42, 1, WeekScore::new()).unwrap_err(),
        DataIntegrityError::NoSuchPlayer(42)
    );
}
