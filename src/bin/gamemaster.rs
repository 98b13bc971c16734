//! Weekly batch run: load game data, rank players, assign targets, write e-mails.
//! Run with: cargo run --bin gamemaster
//! Configure with ASSASSINS_* env vars (see `office_assassins::config`).

use office_assassins::{
    assign_ranks, load_ledger, run_assignment, write_notifications, AssignmentGraph, CsvStore,
    FrozenLedger, PlayerRanking, RankingMode, RunConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = RunConfig::from_env()?;
    let store = CsvStore::new(&config.data_dir);
    log::info!("Loading game data from {}", store.dir().display());

    let mut ledger = load_ledger(&store)?;
    assign_ranks(&mut ledger)?;
    log_rankings(&ledger)?;

    let graph = match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            run_assignment(&mut ledger, config.mode, config.target_count, &mut rng)?
        }
        None => run_assignment(
            &mut ledger,
            config.mode,
            config.target_count,
            &mut rand::thread_rng(),
        )?,
    };
    log_assignments(&ledger, &graph);

    let game_week = config.resolve_game_week(ledger.latest_week());
    let output = config.resolve_output(game_week);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(&output)?);
    let written = write_notifications(&mut writer, &ledger, &graph, game_week)?;
    log::info!(
        "Wrote {} week {} notification(s) to {}",
        written,
        game_week,
        output.display()
    );
    Ok(())
}

/// Active-player ranking table: (rank) id: name ... score/kills/deaths.
fn log_rankings(ledger: &FrozenLedger) -> Result<(), Box<dyn Error>> {
    let ranking = PlayerRanking::new(ledger.players(), RankingMode::ActiveOnly)?;
    log::info!("========== Player Rankings ==========");
    for (rank, p) in ranking.ordered().enumerate() {
        log::info!(
            "({}) {}: {} ... {}/{}/{}",
            rank + 1,
            p.id,
            p.full_name(),
            p.total_score(),
            p.total_kills(),
            p.total_deaths()
        );
    }
    Ok(())
}

fn log_assignments(ledger: &FrozenLedger, graph: &AssignmentGraph) {
    for (assassin_id, targets) in graph.iter() {
        let name = ledger
            .player(assassin_id)
            .map(|p| p.full_name())
            .unwrap_or_default();
        log::debug!("{} ({}) -> {:?}", name, assassin_id, targets);
    }
}
