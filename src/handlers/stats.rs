use crate::{Result, StateTrait, extractors::Json};
use axum::extract::{Path, State};
use entity::{play_history, scores};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct Response {
    pub total_plays: u64,
    pub total_score: i64,
    pub average_score: f64,
    pub best_score: i32,
    pub best_combo: i32,
    pub perfect_rate: f64,
}

const EMPTY_STATS: Response = Response {
    total_plays: 0,
    total_score: 0,
    average_score: 0.0,
    best_score: 0,
    best_combo: 0,
    perfect_rate: 0.0,
};

/// Without a single score row the player is considered unseen and every
/// statistic is zero, even if play_history rows exist for them.
pub async fn get_player_stats<S: StateTrait>(
    State(state): State<S>,
    Path(player_id): Path<String>,
) -> Result<Json<Response>> {
    let scores = scores::Entity::find()
        .filter(scores::Column::PlayerId.eq(&player_id))
        .all(state.db())
        .await?;

    if scores.is_empty() {
        return Ok(Json(EMPTY_STATS));
    }

    // total_plays deliberately counts sessions, not score submissions: the
    // two collections are independent and may diverge.
    let total_plays = play_history::Entity::find()
        .filter(play_history::Column::PlayerId.eq(&player_id))
        .count(state.db())
        .await?;

    Ok(Json(aggregate(&scores, total_plays)))
}

fn aggregate(scores: &[scores::Model], total_plays: u64) -> Response {
    let total_score: i64 = scores.iter().map(|s| i64::from(s.score)).sum();
    let best_score = scores.iter().map(|s| s.score).max().unwrap_or(0);
    let best_combo = scores.iter().map(|s| s.max_combo).max().unwrap_or(0);

    let perfect_hits: i64 = scores.iter().map(|s| i64::from(s.perfect_count)).sum();
    let total_hits: i64 = scores
        .iter()
        .map(|s| i64::from(s.perfect_count) + i64::from(s.great_count) + i64::from(s.miss_count))
        .sum();

    let perfect_rate = if total_hits > 0 {
        round2(perfect_hits as f64 / total_hits as f64 * 100.0)
    } else {
        0.0
    };

    let average_score = round2(total_score as f64 / scores.len() as f64);

    Response {
        total_plays,
        total_score,
        average_score,
        best_score,
        best_combo,
        perfect_rate,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
