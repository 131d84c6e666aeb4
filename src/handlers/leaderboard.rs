use crate::{
    Result, StateTrait,
    extractors::{Json, ValidatedQuery},
};
use axum::extract::State;
use chrono::NaiveDateTime;
use entity::scores;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};
use validator::Validate;

const DEFAULT_LIMIT: u64 = 10;

#[derive(Deserialize, Validate)]
pub struct Params {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
}

#[derive(Serialize)]
pub struct Response {
    pub rank: u32,
    pub player_id: String,
    pub score: i32,
    pub max_combo: i32,
    pub played_at: NaiveDateTime,
}

/// Top scores, highest first, with a dense 1-based rank assigned by
/// position. Ties keep whatever order the database returned them in.
pub async fn get_leaderboard<S: StateTrait>(
    State(state): State<S>,
    ValidatedQuery(params): ValidatedQuery<Params>,
) -> Result<Json<Vec<Response>>> {
    let scores = scores::Entity::find()
        .order_by_desc(scores::Column::Score)
        .limit(params.limit.unwrap_or(DEFAULT_LIMIT))
        .all(state.db())
        .await?;

    let entries = scores
        .into_iter()
        .enumerate()
        .map(|(i, score)| Response {
            rank: i as u32 + 1,
            player_id: score.player_id,
            score: score.score,
            max_combo: score.max_combo,
            played_at: score.played_at,
        })
        .collect();

    Ok(Json(entries))
}
