use super::AppState;
use crate::api::endpoints::champion_icon_base;
use crate::api::models::{ChampionListItem, ErrorBody, MatchupResponse, MetaResponse};
use crate::data::models::CounterEntry;
use crate::error::AppError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

type SharedState = State<Arc<AppState>>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ChampionNotFound(_) => (StatusCode::NOT_FOUND, "Champion not found.".to_string()),
            AppError::SameChampion => (
                StatusCode::BAD_REQUEST,
                "You cannot pick the same champion on both sides.".to_string(),
            ),
            other => {
                log::error!("request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchupQuery {
    #[serde(default)]
    pub my: String,
    #[serde(default)]
    pub enemy: String,
}

#[derive(Debug, Deserialize)]
pub struct CountersQuery {
    #[serde(default)]
    pub enemy: String,
}

pub async fn index(State(state): SharedState) -> Response {
    let path = state.templates_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::warn!("cannot read {}: {}", path.display(), e);
            not_found().await.into_response()
        }
    }
}

pub async fn health(State(state): SharedState) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "vs_lol",
        "version": env!("CARGO_PKG_VERSION"),
        "champions": state.dataset.len(),
        "overrides": state.overrides.len(),
    }))
}

pub async fn meta(State(state): SharedState) -> Json<MetaResponse> {
    Json(MetaResponse {
        ddragon_version: state.ddragon_version.clone(),
        icon_base: champion_icon_base(&state.ddragon_version),
    })
}

/// Champion index keyed by id, in dataset order.
pub async fn champions(State(state): SharedState) -> Result<Json<Map<String, Value>>, AppError> {
    let mut index = Map::new();
    for champion in state.dataset.iter() {
        let item = serde_json::to_value(ChampionListItem::from(champion))
            .map_err(|e| AppError::JsonError(e.to_string()))?;
        index.insert(champion.id.clone(), item);
    }
    Ok(Json(index))
}

pub async fn matchup(
    State(state): SharedState,
    Query(query): Query<MatchupQuery>,
) -> Result<Json<MatchupResponse>, AppError> {
    log::debug!("matchup request my={:?} enemy={:?}", query.my, query.enemy);
    let response = state.advisor().advise(&query.my, &query.enemy)?;
    Ok(Json(response))
}

pub async fn counters(
    State(state): SharedState,
    Query(query): Query<CountersQuery>,
) -> Result<Json<Vec<CounterEntry>>, AppError> {
    Ok(Json(state.advisor().counters_for(&query.enemy)?))
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
