//! Settling a pick against a completed game's final score.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::odds_api::ScoreEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Won,
    Lost,
    Push,
}

impl GameResult {
    /// Classify a spread-adjusted margin from the picked side's view.
    pub fn from_cover_margin(cover_margin: Decimal) -> Self {
        if cover_margin > Decimal::ZERO {
            GameResult::Won
        } else if cover_margin < Decimal::ZERO {
            GameResult::Lost
        } else {
            GameResult::Push
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Won => write!(f, "won"),
            GameResult::Lost => write!(f, "lost"),
            GameResult::Push => write!(f, "push"),
        }
    }
}

/// Whether `pick` at `pick_spread` covered in game `game_id`.
///
/// `None` when the game is absent from `scores`, not completed, or missing a
/// numeric score for either side. A pick that is not the home team is
/// settled as the away side.
pub fn determine_result(
    game_id: &str,
    pick: &str,
    pick_spread: Decimal,
    scores: &[ScoreEvent],
) -> Option<GameResult> {
    let game = scores.iter().find(|game| game.id == game_id)?;
    if !game.completed || game.team_scores().len() < 2 {
        return None;
    }

    let home_score = game.points_for(&game.home_team)?;
    let away_score = game.points_for(&game.away_team)?;
    let actual_margin = Decimal::from(home_score.checked_sub(away_score)?);

    let cover_margin = if pick == game.home_team {
        actual_margin + pick_spread
    } else {
        pick_spread - actual_margin
    };

    Some(GameResult::from_cover_margin(cover_margin))
}

/// Final points per team for a completed game with at least two scores.
pub fn final_scores(game_id: &str, scores: &[ScoreEvent]) -> Option<BTreeMap<String, i64>> {
    let game = scores
        .iter()
        .find(|game| game.id == game_id && game.completed)?;
    if game.team_scores().len() < 2 {
        return None;
    }

    Some(
        game.team_scores()
            .iter()
            .filter_map(|score| Some((score.name.clone(), score.points()?)))
            .collect(),
    )
}
