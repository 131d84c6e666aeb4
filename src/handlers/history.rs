use crate::{
    Result, StateTrait,
    extractors::{Json, ValidatedJson, ValidatedQuery},
};
use axum::extract::{Path, State};
use chrono::{NaiveDateTime, Utc};
use entity::play_history;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

const DEFAULT_LIMIT: u64 = 20;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 50))]
    pub player_id: String,
    #[validate(range(min = 0))]
    pub score: i32,
    #[validate(range(min = 0))]
    pub max_combo: i32,
    #[validate(range(min = 0.0))]
    pub duration_seconds: f64,
}

#[derive(Serialize)]
pub struct Response {
    pub id: i32,
    pub player_id: String,
    pub score: i32,
    pub max_combo: i32,
    pub duration_seconds: f64,
    pub played_at: NaiveDateTime,
}

impl From<play_history::Model> for Response {
    fn from(model: play_history::Model) -> Self {
        Response {
            id: model.id,
            player_id: model.player_id,
            score: model.score,
            max_combo: model.max_combo,
            duration_seconds: model.duration_seconds,
            played_at: model.played_at,
        }
    }
}

pub async fn submit_history<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let history = play_history::ActiveModel {
        player_id: Set(request.player_id),
        score: Set(request.score),
        max_combo: Set(request.max_combo),
        duration_seconds: Set(request.duration_seconds),
        played_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let model = history.insert(state.db()).await?;

    Ok(Json(model.into()))
}

#[derive(Deserialize, Validate)]
pub struct Params {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
}

/// Most recent sessions first. An unknown player simply has no sessions,
/// so the result is an empty array rather than a 404.
pub async fn get_player_history<S: StateTrait>(
    State(state): State<S>,
    Path(player_id): Path<String>,
    ValidatedQuery(params): ValidatedQuery<Params>,
) -> Result<Json<Vec<Response>>> {
    let histories = play_history::Entity::find()
        .filter(play_history::Column::PlayerId.eq(&player_id))
        .order_by_desc(play_history::Column::PlayedAt)
        .limit(params.limit.unwrap_or(DEFAULT_LIMIT))
        .all(state.db())
        .await?;

    Ok(Json(histories.into_iter().map(Response::from).collect()))
}
