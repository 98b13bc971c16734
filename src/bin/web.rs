//! Read-only standings server: rankings, career summaries and this week's targets as JSON.
//! Run with: cargo run --bin web
//! Loads and scores the game once at startup (ASSASSINS_* env vars), then serves the
//! frozen result. Listens on 0.0.0.0:8080 by default; override with HOST and PORT.

use actix_web::{
    get,
    web::{Data, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use office_assassins::{
    assign_ranks, assignment_for, career_summary, load_ledger, ranked_players, run_assignment,
    AssignmentGraph, AssignmentMode, CsvStore, FrozenLedger, GameError, PlayerId, RunConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Everything computed at startup. Never mutated while serving.
struct Standings {
    ledger: FrozenLedger,
    assignments: AssignmentGraph,
    mode: AssignmentMode,
    generated_at: DateTime<Utc>,
}

type AppState = Data<Standings>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
    players: usize,
    mode: AssignmentMode,
    generated_at: DateTime<Utc>,
}

/// Path segment: player id (e.g. /api/players/{id}/summary)
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

#[get("/api/health")]
async fn api_health(state: AppState) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "office-assassins",
        players: state.ledger.len(),
        mode: state.mode,
        generated_at: state.generated_at,
    })
}

/// All players, best first, with ranks (negative for eliminated players).
#[get("/api/rankings")]
async fn api_rankings(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(ranked_players(&state.ledger))
}

/// Career totals and weekly breakdown for one player.
#[get("/api/players/{id}/summary")]
async fn api_player_summary(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    match career_summary(&state.ledger, path.id) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// This week's targets for one player.
#[get("/api/players/{id}/targets")]
async fn api_player_targets(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    match assignment_for(&state.ledger, &state.assignments, path.id) {
        Ok(targets) => HttpResponse::Ok().json(targets),
        Err(e) => HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn build_standings(config: &RunConfig) -> Result<Standings, GameError> {
    let mut ledger = load_ledger(&CsvStore::new(&config.data_dir))?;
    assign_ranks(&mut ledger)?;
    let assignments = match config.seed {
        Some(seed) => run_assignment(
            &mut ledger,
            config.mode,
            config.target_count,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => run_assignment(
            &mut ledger,
            config.mode,
            config.target_count,
            &mut rand::thread_rng(),
        )?,
    };
    Ok(Standings {
        ledger,
        assignments,
        mode: config.mode,
        generated_at: Utc::now(),
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let standings = RunConfig::from_env()
        .map_err(GameError::from)
        .and_then(|config| build_standings(&config))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!(
        "Serving standings for {} players at http://{}:{}",
        standings.ledger.len(),
        bind.0,
        bind.1
    );

    let state = Data::new(standings);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_rankings)
            .service(api_player_summary)
            .service(api_player_targets)
    })
    .bind(bind)?
    .run()
    .await
}
