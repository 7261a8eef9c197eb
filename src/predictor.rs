//! Spread prediction from two teams' synthetic stat lines.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::stats::TeamStats;
use crate::teams::abbreviation_for;

/// Points credited to the home side before any stat comparison.
pub const HOME_COURT_POINTS: f64 = 3.0;

pub const MIN_CONFIDENCE: u8 = 50;
pub const MAX_CONFIDENCE: u8 = 85;

pub const MAX_REASONS: usize = 3;
pub const REASON_SEPARATOR: &str = " • ";
pub const FALLBACK_REASON: &str = "Close matchup, model finds slight edge";

/// Model output for one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub pick: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub pick_spread: Decimal,
    pub confidence: u8,
    pub reasoning: String,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
}

/// Predict which side covers `market_spread` (negative = home favored),
/// generating both stat lines for day-of-month `day`.
pub fn predict_spread(
    home_team: &str,
    away_team: &str,
    market_spread: Decimal,
    day: u32,
) -> Prediction {
    let home_stats = TeamStats::generate(home_team, day);
    let away_stats = TeamStats::generate(away_team, day);
    predict_from_stats(home_team, away_team, home_stats, away_stats, market_spread)
}

/// Core of [`predict_spread`] over already generated stat lines.
pub fn predict_from_stats(
    home_team: &str,
    away_team: &str,
    home_stats: TeamStats,
    away_stats: TeamStats,
    market_spread: Decimal,
) -> Prediction {
    let spread = market_spread.to_f64().unwrap_or_default();
    let expected_margin = expected_home_margin(&home_stats, &away_stats);
    let home_covers = expected_margin > -spread;

    let edge = (expected_margin + spread).abs();
    let confidence = (50.0 + edge * 3.0)
        .round()
        .clamp(f64::from(MIN_CONFIDENCE), f64::from(MAX_CONFIDENCE)) as u8;

    let (pick, pick_spread) = if home_covers {
        (home_team, market_spread)
    } else {
        (away_team, -market_spread)
    };

    let reasoning = reasons(home_team, away_team, &home_stats, &away_stats)
        .into_iter()
        .take(MAX_REASONS)
        .collect::<Vec<_>>()
        .join(REASON_SEPARATOR);

    Prediction {
        pick: pick.to_string(),
        pick_spread,
        confidence,
        reasoning,
        home_stats,
        away_stats,
    }
}

/// Expected home margin in points.
pub fn expected_home_margin(home: &TeamStats, away: &TeamStats) -> f64 {
    (home.win_pct - away.win_pct) * 10.0
        + (home.net_rating - away.net_rating) * 0.5
        + (f64::from(home.rest_days) - f64::from(away.rest_days)) * 1.5
        + HOME_COURT_POINTS
}

fn reasons(home_team: &str, away_team: &str, home: &TeamStats, away: &TeamStats) -> Vec<String> {
    let home_abbrev = abbreviation_for(home_team);
    let away_abbrev = abbreviation_for(away_team);
    let mut reasons = Vec::new();

    if home.wins_l10.abs_diff(away.wins_l10) >= 2 {
        let (better, record) = if home.wins_l10 > away.wins_l10 {
            (home_abbrev, &home.record_l10)
        } else {
            (away_abbrev, &away.record_l10)
        };
        reasons.push(format!("{better} {record} L10"));
    }

    if (home.net_rating - away.net_rating).abs() > 3.0 {
        let better = if home.net_rating > away.net_rating { home_abbrev } else { away_abbrev };
        reasons.push(format!("{better} better net rating"));
    }

    let rest_diff = i16::from(home.rest_days) - i16::from(away.rest_days);
    if rest_diff.abs() >= 1 {
        let rested = if rest_diff > 0 { home_abbrev } else { away_abbrev };
        reasons.push(format!("{rested} rest advantage"));
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }

    reasons
}
