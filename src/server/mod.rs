use crate::analysis::MatchupAdvisor;
use crate::data::dataset::{ChampionDataset, MatchupOverrides};
use anyhow::Context;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub mod routes;

/// Everything a request handler may read. Built once at startup.
pub struct AppState {
    pub dataset: ChampionDataset,
    pub overrides: MatchupOverrides,
    pub ddragon_version: String,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl AppState {
    pub fn advisor(&self) -> MatchupAdvisor<'_> {
        MatchupAdvisor::new(&self.dataset, &self.overrides)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(routes::index))
        .route("/api/health", get(routes::health))
        .route("/api/meta", get(routes::meta))
        .route("/api/champions", get(routes::champions))
        .route("/api/matchup", get(routes::matchup))
        .route("/api/counters", get(routes::counters))
        .nest_service("/static", static_files)
        .fallback(routes::not_found)
        .with_state(state)
}

pub async fn run_server(bind: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let champions = state.dataset.len();
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let local_addr = listener.local_addr()?;

    log::info!(
        "VS.LOL server listening on http://{} ({} champions)",
        local_addr,
        champions
    );
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
