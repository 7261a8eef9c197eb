//! The Odds API client and wire types for the odds and scores endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::error::{PredictionError, Result};

/// Market key carrying point spreads.
pub const SPREADS_MARKET: &str = "spreads";

/// The Odds API event structure
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OddsApiEvent {
    pub id: String,
    pub commence_time: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Bookmaker {
    pub title: String,
    pub markets: Vec<Market>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Market {
    pub key: String,
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Outcome {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub point: Option<Decimal>,
}

/// Home-team spread picked from an event's bookmakers.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadQuote {
    pub point: Decimal,
    pub bookmaker: String,
}

impl OddsApiEvent {
    /// First home-team spread in provider order: bookmakers, then their
    /// markets. Only the first home outcome of each spreads market counts;
    /// if it has no point the next market is tried. `None` if no bookmaker
    /// quotes one.
    pub fn home_spread(&self) -> Option<SpreadQuote> {
        self.bookmakers.iter().find_map(|bookmaker| {
            bookmaker
                .markets
                .iter()
                .filter(|market| market.key == SPREADS_MARKET)
                .find_map(|market| {
                    market
                        .outcomes
                        .iter()
                        .find(|outcome| outcome.name == self.home_team)?
                        .point
                })
                .map(|point| SpreadQuote {
                    point,
                    bookmaker: bookmaker.title.clone(),
                })
        })
    }
}

/// The Odds API scores structure
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ScoreEvent {
    pub id: String,
    pub completed: bool,
    pub home_team: String,
    pub away_team: String,
    /// `null` until the game starts.
    pub scores: Option<Vec<TeamScore>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TeamScore {
    pub name: String,
    /// Sent as a string (`"112"`); numbers are accepted too.
    pub score: Option<Value>,
}

impl TeamScore {
    pub fn points(&self) -> Option<i64> {
        match self.score.as_ref()? {
            Value::String(s) => s.trim().parse().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }
}

impl ScoreEvent {
    pub fn team_scores(&self) -> &[TeamScore] {
        self.scores.as_deref().unwrap_or_default()
    }

    pub fn points_for(&self, team: &str) -> Option<i64> {
        self.team_scores()
            .iter()
            .find(|score| score.name == team)
            .and_then(TeamScore::points)
    }
}

/// Client for the odds and scores endpoints of one sport.
#[derive(Clone)]
pub struct OddsApiClient {
    http_client: reqwest::Client,
    config: Config,
}

impl OddsApiClient {
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .connect_timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .odds_api_key
            .as_deref()
            .ok_or(PredictionError::MissingApiKey)
    }

    /// Fetch upcoming events with spread quotes
    pub async fn fetch_odds(&self) -> Result<Vec<OddsApiEvent>> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/v4/sports/{}/odds",
            self.config.base_url, self.config.sport_key
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apiKey", api_key),
                ("regions", self.config.regions.as_str()),
                ("markets", SPREADS_MARKET),
                ("oddsFormat", self.config.odds_format.as_str()),
            ])
            .send()
            .await?;

        log_quota(&response);

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::OddsStatus(status.as_u16()));
        }

        let events: Vec<OddsApiEvent> = response.json().await?;
        info!("Fetched {} events from The Odds API", events.len());
        Ok(events)
    }

    /// Fetch recent scores, completed or in progress
    pub async fn fetch_scores(&self) -> Result<Vec<ScoreEvent>> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/v4/sports/{}/scores",
            self.config.base_url, self.config.sport_key
        );
        let days_from = self.config.scores_days_from.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[("apiKey", api_key), ("daysFrom", days_from.as_str())])
            .send()
            .await?;

        log_quota(&response);

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::ScoresStatus(status.as_u16()));
        }

        let scores: Vec<ScoreEvent> = response.json().await?;
        info!("Fetched {} score events", scores.len());
        Ok(scores)
    }
}

fn log_quota(response: &reqwest::Response) {
    if let Some(remaining) = response.headers().get("x-requests-remaining") {
        info!(
            "API requests remaining: {}",
            remaining.to_str().unwrap_or("?")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn event_with(bookmakers: Value) -> OddsApiEvent {
        serde_json::from_value(json!({
            "id": "evt1",
            "sport_key": "basketball_nba",
            "commence_time": "2024-01-15T00:10:00Z",
            "home_team": "Boston Celtics",
            "away_team": "Washington Wizards",
            "bookmakers": bookmakers,
        }))
        .unwrap()
    }

    #[test]
    fn first_matching_spread_wins() {
        let event = event_with(json!([
            {
                "key": "fanduel",
                "title": "FanDuel",
                "markets": [{"key": "h2h", "outcomes": [{"name": "Boston Celtics", "price": -900}]}]
            },
            {
                "key": "draftkings",
                "title": "DraftKings",
                "markets": [{"key": "spreads", "outcomes": [
                    {"name": "Washington Wizards", "price": -110, "point": 13.5},
                    {"name": "Boston Celtics", "price": -110, "point": -13.5}
                ]}]
            },
            {
                "key": "betmgm",
                "title": "BetMGM",
                "markets": [{"key": "spreads", "outcomes": [
                    {"name": "Boston Celtics", "price": -105, "point": -14.0}
                ]}]
            }
        ]));

        assert_eq!(
            event.home_spread(),
            Some(SpreadQuote {
                point: dec!(-13.5),
                bookmaker: "DraftKings".to_string()
            })
        );
    }

    #[test]
    fn no_spreads_market_means_no_quote() {
        let event = event_with(json!([
            {
                "key": "fanduel",
                "title": "FanDuel",
                "markets": [{"key": "h2h", "outcomes": [
                    {"name": "Boston Celtics", "price": -900},
                    {"name": "Washington Wizards", "price": 600}
                ]}]
            }
        ]));
        assert_eq!(event.home_spread(), None);
        assert_eq!(event_with(json!([])).home_spread(), None);
    }

    #[test]
    fn spread_without_home_outcome_is_skipped() {
        let event = event_with(json!([
            {
                "key": "fanduel",
                "title": "FanDuel",
                "markets": [{"key": "spreads", "outcomes": [
                    {"name": "Washington Wizards", "price": -110, "point": 12.0}
                ]}]
            },
            {
                "key": "caesars",
                "title": "Caesars",
                "markets": [{"key": "spreads", "outcomes": [
                    {"name": "Boston Celtics", "price": -110, "point": -12.5}
                ]}]
            }
        ]));
        assert_eq!(event.home_spread().map(|q| q.bookmaker), Some("Caesars".to_string()));
    }

    #[test]
    fn only_first_home_outcome_per_market_counts() {
        let event = event_with(json!([
            {
                "key": "fanduel",
                "title": "FanDuel",
                "markets": [
                    {"key": "spreads", "outcomes": [
                        {"name": "Boston Celtics", "price": -110, "point": null},
                        {"name": "Boston Celtics", "price": -110, "point": -3.5}
                    ]},
                    {"key": "spreads", "outcomes": [
                        {"name": "Boston Celtics", "price": -110, "point": -4.0}
                    ]}
                ]
            }
        ]));
        assert_eq!(event.home_spread().map(|q| q.point), Some(dec!(-4.0)));

        let event = event_with(json!([
            {
                "key": "fanduel",
                "title": "FanDuel",
                "markets": [{"key": "spreads", "outcomes": [
                    {"name": "Boston Celtics", "price": -110},
                    {"name": "Boston Celtics", "price": -110, "point": -3.5}
                ]}]
            },
            {
                "key": "pinnacle",
                "title": "Pinnacle",
                "markets": [{"key": "spreads", "outcomes": [
                    {"name": "Boston Celtics", "price": -105, "point": -4.5}
                ]}]
            }
        ]));
        assert_eq!(
            event.home_spread(),
            Some(SpreadQuote {
                point: dec!(-4.5),
                bookmaker: "Pinnacle".to_string()
            })
        );
    }

    #[test]
    fn decimal_odds_format_parses() {
        let events: Vec<OddsApiEvent> = serde_json::from_value(json!([{
            "id": "evt1",
            "sport_key": "basketball_nba",
            "home_team": "Boston Celtics",
            "away_team": "Washington Wizards",
            "bookmakers": [{
                "key": "unibet_eu",
                "title": "Unibet",
                "markets": [{"key": "spreads", "outcomes": [
                    {"name": "Boston Celtics", "price": 1.91, "point": -9.5},
                    {"name": "Washington Wizards", "price": 1.95, "point": 9.5}
                ]}]
            }]
        }]))
        .unwrap();

        assert_eq!(events[0].home_spread().map(|q| q.point), Some(dec!(-9.5)));
    }

    #[test]
    fn scores_parse_strings_and_numbers() {
        let scores: ScoreEvent = serde_json::from_value(json!({
            "id": "evt1",
            "completed": true,
            "home_team": "Boston Celtics",
            "away_team": "Washington Wizards",
            "scores": [
                {"name": "Boston Celtics", "score": "118"},
                {"name": "Washington Wizards", "score": 108}
            ]
        }))
        .unwrap();

        assert_eq!(scores.points_for("Boston Celtics"), Some(118));
        assert_eq!(scores.points_for("Washington Wizards"), Some(108));
        assert_eq!(scores.points_for("Miami Heat"), None);
    }

    #[test]
    fn upcoming_game_has_null_scores() {
        let scores: ScoreEvent = serde_json::from_value(json!({
            "id": "evt2",
            "completed": false,
            "home_team": "Miami Heat",
            "away_team": "Utah Jazz",
            "scores": null,
            "last_update": null
        }))
        .unwrap();

        assert!(scores.team_scores().is_empty());
        assert_eq!(scores.points_for("Miami Heat"), None);
    }
}
