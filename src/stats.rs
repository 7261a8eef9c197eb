//! Synthetic recent-form stats, seeded from the team name and calendar day.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::teams::tier_for;

/// Games covered by the last-N record.
pub const RECENT_WINDOW: u8 = 10;

/// A team's synthetic stat line for one calendar day.
///
/// Only `record_l10`, `net_rating` and `rest_days` are part of the response;
/// the remaining fields feed the predictor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    pub record_l10: String,
    pub net_rating: f64,
    pub rest_days: u8,
    #[serde(skip)]
    pub win_pct: f64,
    #[serde(skip)]
    pub wins_l10: u8,
}

impl TeamStats {
    /// Build a stat line from a win percentage, deriving the L10 record.
    pub fn new(win_pct: f64, net_rating: f64, rest_days: u8) -> Self {
        let win_pct = win_pct.clamp(0.0, 1.0);
        let wins_l10 = (win_pct * f64::from(RECENT_WINDOW)).round_ties_even() as u8;
        Self {
            record_l10: format!("{}-{}", wins_l10, RECENT_WINDOW - wins_l10),
            net_rating,
            rest_days,
            win_pct,
            wins_l10,
        }
    }

    /// Generate stats for `team_name` on day-of-month `day`.
    ///
    /// Each call builds its own generator, so the result depends only on the
    /// inputs and concurrent callers never share random state.
    pub fn generate(team_name: &str, day: u32) -> Self {
        let (base_win_pct, base_net_rating) = tier_baseline(tier_for(team_name));
        let mut rng = ChaCha8Rng::seed_from_u64(stat_seed(team_name, day));

        let win_pct = base_win_pct + rng.gen_range(-0.15_f64..=0.15);
        let net_rating = round_tenth(base_net_rating + rng.gen_range(-3.0_f64..=3.0));
        let rest_days: u8 = rng.gen_range(1..=3);

        Self::new(win_pct, net_rating, rest_days)
    }
}

/// Base win percentage and net rating for a tier.
pub fn tier_baseline(tier: u8) -> (f64, f64) {
    match tier {
        1 => (0.70, 8.0),
        2 => (0.58, 4.0),
        4 => (0.40, -4.0),
        5 => (0.30, -8.0),
        _ => (0.50, 0.0),
    }
}

/// Sum of the name's code points plus the day of month.
pub fn stat_seed(team_name: &str, day: u32) -> u64 {
    team_name.chars().map(|c| u64::from(u32::from(c))).sum::<u64>() + u64::from(day)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
