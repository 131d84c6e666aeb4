mod utils;

use utils::prelude::*;

#[tokio::test]
async fn root_reports_name_and_version() {
    let env = setup().await;

    let res = env.get("/").send().await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;

    assert_eq!(
        body,
        json!({
            "message": "Air Guitar Backend API",
            "version": env!("CARGO_PKG_VERSION"),
        })
    );
}

#[tokio::test]
async fn health_endpoints_respond() {
    let env = setup().await;

    let res = env.get("/livez").send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = env.get("/readyz").send().await;
    assert_eq!(res.status(), StatusCode::OK);
}
