mod history;
mod leaderboard;
mod scores;
mod stats;

use crate::{StateTrait, extractors::Json};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::ConnectionTrait;
use serde::Serialize;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(root))
        .nest(
            "/api",
            Router::new()
                .route("/scores", post(scores::submit_score::<S>))
                .route("/history", post(history::submit_history::<S>))
                .route("/history/:player_id", get(history::get_player_history::<S>))
                .route("/leaderboard", get(leaderboard::get_leaderboard::<S>))
                .route("/stats/:player_id", get(stats::get_player_stats::<S>)),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Air Guitar Backend API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
