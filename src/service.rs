//! Request orchestration and the HTTP surface.
//!
//! One GET fetches odds (and optionally recent scores), predicts every game
//! with a quoted home spread, settles finished games, and answers with JSON.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::odds_api::{OddsApiClient, OddsApiEvent, ScoreEvent};
use crate::predictor::{predict_spread, Prediction};
use crate::results::{determine_result, final_scores, GameResult};

pub const PREDICTIONS_PATH: &str = "/api/predictions";
pub const HEALTH_PATH: &str = "/health";

/// One predicted game in the response.
#[derive(Debug, Clone, Serialize)]
pub struct GamePrediction {
    pub game_id: String,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub spread: Decimal,
    pub bookmaker: String,
    pub prediction: Prediction,
    /// Absent entirely when score reconciliation is disabled.
    #[serde(flatten)]
    pub settlement: Option<Settlement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    pub result: Option<GameResult>,
    pub final_scores: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Serialize)]
pub struct PredictionsResponse {
    pub generated_at: String,
    pub games: Vec<GamePrediction>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub games: Vec<GamePrediction>,
}

/// Predict every event that has a home spread quote.
///
/// `scores` is `None` when reconciliation is disabled; an empty slice still
/// emits `result`/`final_scores` as nulls.
pub fn build_predictions(
    events: &[OddsApiEvent],
    scores: Option<&[ScoreEvent]>,
    day: u32,
) -> Vec<GamePrediction> {
    events
        .iter()
        .filter_map(|event| {
            let Some(quote) = event.home_spread() else {
                debug!("Skipping {}: no home spread quoted", event.id);
                return None;
            };

            let prediction = predict_spread(&event.home_team, &event.away_team, quote.point, day);
            let settlement = scores.map(|scores| Settlement {
                result: determine_result(
                    &event.id,
                    &prediction.pick,
                    prediction.pick_spread,
                    scores,
                ),
                final_scores: final_scores(&event.id, scores),
            });

            Some(GamePrediction {
                game_id: event.id.clone(),
                home_team: event.home_team.clone(),
                away_team: event.away_team.clone(),
                commence_time: event.commence_time.clone(),
                spread: quote.point,
                bookmaker: quote.bookmaker,
                prediction,
                settlement,
            })
        })
        .collect()
}

/// Fetch, predict and settle for a request received at `now`.
///
/// Only the odds fetch is fatal; a failed scores fetch leaves every game
/// unsettled.
pub async fn generate_predictions(
    client: &OddsApiClient,
    now: DateTime<Utc>,
) -> Result<PredictionsResponse> {
    let events = client.fetch_odds().await?;

    let scores = if client.config().include_scores {
        match client.fetch_scores().await {
            Ok(scores) => Some(scores),
            Err(e) => {
                warn!("Scores unavailable, results left undetermined: {}", e);
                Some(Vec::new())
            }
        }
    } else {
        None
    };

    let games = build_predictions(&events, scores.as_deref(), now.day());
    info!("Predicted {} of {} games", games.len(), events.len());

    Ok(PredictionsResponse {
        generated_at: now.to_rfc3339_opts(SecondsFormat::Micros, true),
        games,
    })
}

#[derive(Clone)]
pub struct AppState {
    pub client: OddsApiClient,
}

impl AppState {
    pub fn new(client: OddsApiClient) -> Self {
        Self { client }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(PREDICTIONS_PATH, get(predictions_handler))
        .route(HEALTH_PATH, get(health_handler))
        .with_state(state)
}

/// Predictions handler
async fn predictions_handler(State(state): State<AppState>) -> Response {
    let cors = [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")];

    match generate_predictions(&state.client, Utc::now()).await {
        Ok(body) => (StatusCode::OK, cors, Json(body)).into_response(),
        Err(e) => {
            error!("Prediction request failed: {}", e);
            let body = ErrorResponse {
                error: e.to_string(),
                games: Vec::new(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, cors, Json(body)).into_response()
        }
    }
}

/// Health check handler
async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let configured = state.client.config().odds_api_key.is_some();
    let status = if configured { "ok" } else { "degraded" };

    (StatusCode::OK, Json(json!({
        "service": "nba-predictions",
        "version": env!("CARGO_PKG_VERSION"),
        "status": status,
        "api_key_configured": configured,
        "include_scores": state.client.config().include_scores
    })))
}
