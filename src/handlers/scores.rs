use crate::{
    Result, StateTrait,
    extractors::{Json, ValidatedJson},
};
use axum::extract::State;
use chrono::{NaiveDateTime, Utc};
use entity::scores;
use sea_orm::{ActiveModelTrait, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 50))]
    pub player_id: String,
    #[validate(range(min = 0))]
    pub score: i32,
    #[validate(range(min = 0))]
    pub max_combo: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub perfect_count: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub great_count: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub miss_count: i32,
}

#[derive(Serialize)]
pub struct Response {
    pub id: i32,
    pub player_id: String,
    pub score: i32,
    pub max_combo: i32,
    pub perfect_count: i32,
    pub great_count: i32,
    pub miss_count: i32,
    pub played_at: NaiveDateTime,
}

impl From<scores::Model> for Response {
    fn from(model: scores::Model) -> Self {
        Response {
            id: model.id,
            player_id: model.player_id,
            score: model.score,
            max_combo: model.max_combo,
            perfect_count: model.perfect_count,
            great_count: model.great_count,
            miss_count: model.miss_count,
            played_at: model.played_at,
        }
    }
}

pub async fn submit_score<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let score = scores::ActiveModel {
        player_id: Set(request.player_id),
        score: Set(request.score),
        max_combo: Set(request.max_combo),
        perfect_count: Set(request.perfect_count),
        great_count: Set(request.great_count),
        miss_count: Set(request.miss_count),
        // the timestamp is assigned here, never by a schema default
        played_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let model = score.insert(state.db()).await?;

    Ok(Json(model.into()))
}
