//! HTTP-level tests for `/api/settings`.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, build_test_app, get, put_json, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn settings_are_public(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/settings").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["brand_tagline"], "Naturally Yours. Everyday Glow.");
    assert!(json["store_links"]["whatsapp"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_requires_auth(pool: PgPool) {
    let app = build_test_app(pool);

    let response = put_json(app.clone(), "/api/settings", json!({ "bpom_number": "X" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(get(app, "/api/settings").await).await;
    assert_eq!(json["bpom_number"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_update_keeps_other_fields(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;
    let before = body_json(get(app.clone(), "/api/settings").await).await;

    let response = put_json_auth(
        app.clone(),
        "/api/settings",
        json!({ "bpom_number": "X" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = body_json(get(app, "/api/settings").await).await;
    assert_eq!(after["bpom_number"], "X");
    assert_eq!(after["brand_tagline"], before["brand_tagline"]);
    assert_eq!(after["store_links"], before["store_links"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_links_replace_the_map(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response = put_json_auth(
        app,
        "/api/settings",
        json!({ "store_links": { "shopee": "https://shopee.co.id/jennskin" } }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["store_links"],
        json!({ "shopee": "https://shopee.co.id/jennskin" })
    );
}
