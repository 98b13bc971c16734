//! Integration tests for the CSV store, the load pipeline, and run configuration.

use office_assassins::{
    distinct_weeks, load_ledger, AssignmentMode, ConfigError, CsvStore, GameError, GameStore,
    RunConfig, StorageError,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

fn write_game(dir: &Path, kills: &str) {
    fs::write(
        dir.join("players.csv"),
        "Id,FirstName,LastName,Email,WeekEliminated\n\
         1,Ada,Ames,ada@example.com,0\n\
         2,Ben,Bell,ben@example.com,2\n\
         3,Cy,Cole,cy@example.com,0\n\
         4,Di,Dunn,di@example.com,\n",
    )
    .unwrap();
    fs::write(dir.join("kills.csv"), kills).unwrap();
    fs::write(
        dir.join("bonuses.csv"),
        "AssassinId,TargetId,WeekNumber,BonusPoints,BonusName,BonusDescription\n\
         1,,1,3,Early Bird,First kill of the game\n\
         3,2,2,-1,Friendly Fire,\n",
    )
    .unwrap();
}

#[test]
fn csv_store_reads_all_tables() {
    let temp = tempfile::tempdir().unwrap();
    write_game(temp.path(), "AssassinId,TargetId,WeekNumber\n1,2,1\n2,3,3\n3,1,2\n");
    let store = CsvStore::new(temp.path());

    let players = store.load_players().unwrap();
    assert_eq!(players.len(), 4);
    assert_eq!(players[1].first_name, "Ben");
    assert_eq!(players[1].week_eliminated, 2);
    // Blank elimination cell means still active.
    assert_eq!(players[3].week_eliminated, 0);

    let kills = store.load_kill_events().unwrap();
    assert_eq!(kills.len(), 3);
    assert_eq!((kills[0].assassin_id, kills[0].target_id, kills[0].week_number), (1, 2, 1));

    let bonuses = store.load_bonus_events().unwrap();
    assert_eq!(bonuses[0].target_id, None);
    assert_eq!(bonuses[0].points, 3);
    assert_eq!(bonuses[1].target_id, Some(2));
    assert_eq!(bonuses[1].points, -1);
    assert_eq!(bonuses[1].description, "");
}

#[test]
fn load_ledger_scores_csv_data() {
    let temp = tempfile::tempdir().unwrap();
    // Ben (eliminated week 2) kills Cy in week 3: not scored for Ben.
    write_game(temp.path(), "AssassinId,TargetId,WeekNumber\n1,2,1\n2,3,3\n3,1,2\n");
    let ledger = load_ledger(&CsvStore::new(temp.path())).unwrap();

    let ada = ledger.player(1).unwrap();
    assert_eq!((ada.total_kills(), ada.total_deaths(), ada.total_score()), (1, 1, 3));
    let ben = ledger.player(2).unwrap();
    assert_eq!((ben.total_kills(), ben.total_deaths()), (0, 1));
    let cy = ledger.player(3).unwrap();
    assert_eq!((cy.total_kills(), cy.total_deaths(), cy.total_score()), (1, 1, -1));
    assert_eq!(ledger.latest_week(), Some(3));
    assert_eq!(ledger.active_ids(), vec![1, 3, 4]);
    assert!(!ledger.player(4).unwrap().is_eliminated());
}

#[test]
fn blank_week_eliminated_loads_as_active() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("players.csv"),
        "Id,FirstName,LastName,Email,WeekEliminated\n1,Ada,Ames,a@x,\n2,Ben,Bell,b@x, \n",
    )
    .unwrap();
    let players = CsvStore::new(temp.path()).load_players().unwrap();
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.week_eliminated == 0));
}

#[test]
fn missing_week_eliminated_column_loads_as_active() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("players.csv"),
        "Id,FirstName,LastName,Email\n1,Ada,Ames,a@x\n",
    )
    .unwrap();
    let players = CsvStore::new(temp.path()).load_players().unwrap();
    assert_eq!(players[0].week_eliminated, 0);
}

#[test]
fn ledger_weeks_match_event_weeks() {
    let temp = tempfile::tempdir().unwrap();
    write_game(temp.path(), "AssassinId,TargetId,WeekNumber\n1,2,1\n2,3,3\n3,1,2\n");
    let store = CsvStore::new(temp.path());
    let ledger = load_ledger(&store).unwrap();
    let weeks = distinct_weeks(
        &store.load_kill_events().unwrap(),
        &store.load_bonus_events().unwrap(),
    );
    assert_eq!(ledger.weeks(), weeks);
}

#[test]
fn missing_file_is_a_storage_error() {
    let temp = tempfile::tempdir().unwrap();
    let err = load_ledger(&CsvStore::new(temp.path())).unwrap_err();
    assert!(matches!(err, GameError::Storage(StorageError::Io { .. })));
}

#[test]
fn malformed_row_is_a_storage_error() {
    let temp = tempfile::tempdir().unwrap();
    write_game(temp.path(), "AssassinId,TargetId,WeekNumber\n1,two,1\n");
    let err = load_ledger(&CsvStore::new(temp.path())).unwrap_err();
    assert!(matches!(err, GameError::Storage(StorageError::Parse { .. })));
}

#[test]
fn unknown_player_in_csv_is_a_data_integrity_error() {
    let temp = tempfile::tempdir().unwrap();
    write_game(temp.path(), "AssassinId,TargetId,WeekNumber\n1,9,1\n");
    let err = load_ledger(&CsvStore::new(temp.path())).unwrap_err();
    assert!(matches!(err, GameError::DataIntegrity(_)));
}

fn config_from(vars: &[(&str, &str)]) -> Result<RunConfig, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    RunConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn config_defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.data_dir, PathBuf::from("data"));
    assert_eq!(config.target_count, 3);
    assert_eq!(config.mode, AssignmentMode::Rotation);
    assert_eq!(config.resolve_game_week(Some(4)), 5);
    assert_eq!(config.resolve_game_week(None), 1);
    assert_eq!(config.resolve_game_week(Some(u32::MAX)), u32::MAX);
    assert_eq!(
        config.resolve_output(5),
        PathBuf::from("emails/targets_week_5.txt")
    );
}

#[test]
fn config_reads_every_setting() {
    let config = config_from(&[
        ("ASSASSINS_DATA_DIR", "/srv/game"),
        ("ASSASSINS_TARGETS", "4"),
        ("ASSASSINS_MODE", "tiered"),
        ("ASSASSINS_WEEK", "5"),
        ("ASSASSINS_OUTPUT", "out.txt"),
        ("ASSASSINS_SEED", "99"),
    ])
    .unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/srv/game"));
    assert_eq!(config.target_count, 4);
    assert_eq!(config.mode, AssignmentMode::Tiered);
    assert_eq!(config.resolve_game_week(Some(2)), 5);
    assert_eq!(config.resolve_output(5), PathBuf::from("out.txt"));
    assert_eq!(config.seed, Some(99));
}

#[test]
fn config_rejects_bad_values() {
    assert_eq!(
        config_from(&[("ASSASSINS_TARGETS", "three")]).unwrap_err(),
        ConfigError::InvalidSetting {
            key: "ASSASSINS_TARGETS".to_string(),
            value: "three".to_string()
        }
    );
    assert!(matches!(
        config_from(&[("ASSASSINS_MODE", "bracket")]),
        Err(ConfigError::InvalidSetting { .. })
    ));
    assert!(config_from(&[("ASSASSINS_SEED", "-1")]).is_err());
}
