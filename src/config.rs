use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.the-odds-api.com";
pub const DEFAULT_SPORT_KEY: &str = "basketball_nba";

/// Configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// `None` when unset or blank; requests then fail with a configuration error.
    pub odds_api_key: Option<String>,
    pub base_url: String,
    pub sport_key: String,
    pub regions: String,
    pub odds_format: String,
    pub scores_days_from: u32,
    /// If false, responses omit `result` and `final_scores`
    pub include_scores: bool,
    pub http_timeout: Duration,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odds_api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            sport_key: DEFAULT_SPORT_KEY.to_string(),
            regions: "us".to_string(),
            odds_format: "american".to_string(),
            scores_days_from: 3,
            include_scores: true,
            http_timeout: Duration::from_secs(10),
            port: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            odds_api_key: non_blank("ODDS_API_KEY").map(|v| v.trim().to_string()),
            base_url: non_blank("ODDS_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            sport_key: non_blank("SPORT_KEY").unwrap_or(defaults.sport_key),
            regions: non_blank("ODDS_REGIONS").unwrap_or(defaults.regions),
            odds_format: non_blank("ODDS_FORMAT").unwrap_or(defaults.odds_format),
            scores_days_from: non_blank("SCORES_DAYS_FROM")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.scores_days_from),
            include_scores: non_blank("INCLUDE_SCORES")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(defaults.include_scores),
            http_timeout: non_blank("HTTP_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            port: non_blank("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}
