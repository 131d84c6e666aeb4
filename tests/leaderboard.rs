mod utils;

use utils::prelude::*;

async fn submit_score(env: &Env, player_id: &str, score: i32) {
    let res = env
        .post("/api/scores")
        .json(&json!({
            "player_id": player_id,
            "score": score,
            "max_combo": 1,
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn ranks_scores_descending_with_contiguous_ranks() {
    let env = setup().await;

    for score in [50, 80, 30] {
        submit_score(&env, "bob", score).await;
    }

    let res = env.get("/api/leaderboard?limit=2").send().await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;

    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_json_include!(
        actual: body,
        expected: json!([
            {"rank": 1, "player_id": "bob", "score": 80},
            {"rank": 2, "player_id": "bob", "score": 50},
        ])
    );
}

#[tokio::test]
async fn default_limit_is_ten() {
    let env = setup().await;

    for score in 0..12 {
        submit_score(&env, "bob", score).await;
    }

    let res = env.get("/api/leaderboard").send().await;
    let body: Value = res.json().await;

    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_json_include!(actual: &body[0], expected: json!({"rank": 1, "score": 11}));
}

#[tokio::test]
async fn empty_leaderboard_is_an_empty_array() {
    let env = setup().await;

    let res = env.get("/api/leaderboard").send().await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;

    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn out_of_range_limit_is_rejected() {
    let env = setup().await;

    let res = env.get("/api/leaderboard?limit=0").send().await;
    assert_error!(res, error::QUERY_VALIDATION_FAILED);

    let res = env.get("/api/leaderboard?limit=101").send().await;
    assert_error!(res, error::QUERY_VALIDATION_FAILED);
}

#[tokio::test]
async fn repeated_reads_are_identical() {
    let env = setup().await;

    for score in [50, 80, 30] {
        submit_score(&env, "bob", score).await;
    }

    let first: Value = env.get("/api/leaderboard").send().await.json().await;
    let second: Value = env.get("/api/leaderboard").send().await.json().await;

    assert_eq!(first, second);
}
