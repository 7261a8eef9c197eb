//! NBA spread predictions over The Odds API.
//!
//! Synthetic per-team stats are seeded from the team name and the current
//! day, combined into a pick against the market spread, and settled against
//! final scores once a game completes.

pub mod config;
pub mod error;
pub mod odds_api;
pub mod predictor;
pub mod results;
pub mod service;
pub mod stats;
pub mod teams;

pub use config::Config;
pub use error::PredictionError;
pub use odds_api::OddsApiClient;
pub use predictor::{predict_spread, Prediction};
pub use results::{determine_result, GameResult};
pub use service::{create_router, AppState};
pub use stats::TeamStats;
