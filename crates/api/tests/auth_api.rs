//! HTTP-level tests for login, logout, `/auth/me` and session extraction.

mod common;

use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Request, StatusCode};
use common::{
    admin_token, body_json, build_test_app, get, get_auth, post_json, send, ADMIN_PASSWORD,
    ADMIN_USERNAME,
};
use jennskin_api::bootstrap::ensure_admin_account;
use jennskin_api::config::AdminSeedConfig;
use serde_json::json;
use sqlx::PgPool;

fn seed() -> AdminSeedConfig {
    AdminSeedConfig {
        username: ADMIN_USERNAME.to_string(),
        password: ADMIN_PASSWORD.to_string(),
    }
}

fn me_with_cookie(token: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/auth/me")
        .header(COOKIE, format!("theme=light; token={token}"))
        .body(Body::empty())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_and_sets_cookie(pool: PgPool) {
    ensure_admin_account(&pool, &seed()).await.unwrap();
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "admin", "password": "admin123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    let json = body_json(response).await;

    let token = json["token"].as_str().unwrap();
    assert!(cookie.starts_with(&format!("token={token}")));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=604800"));
    assert_eq!(json["user"]["username"], "admin");
    assert!(json["user"]["id"].is_i64());
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_and_unknown_user_look_identical(pool: PgPool) {
    ensure_admin_account(&pool, &seed()).await.unwrap();
    let app = build_test_app(pool);

    let wrong_password = post_json(
        app.clone(),
        "/api/auth/login",
        json!({ "username": "admin", "password": "nope" }),
    )
    .await;
    let unknown_user = post_json(
        app,
        "/api/auth/login",
        json!({ "username": "ghost", "password": "admin123" }),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert!(wrong_password.headers().get(SET_COOKIE).is_none());

    let a = body_json(wrong_password).await;
    let b = body_json(unknown_user).await;
    assert_eq!(a, b);
    assert_eq!(a["error"], "Invalid credentials");
    assert_eq!(a["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_without_password_field_is_validation_error(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/auth/login", json!({ "username": "admin" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("password"));
}

// ---------------------------------------------------------------------------
// Session extraction
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_accepts_bearer_token(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response = get_auth(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["username"], "admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_accepts_session_cookie(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response = send(app, me_with_cookie(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cookie_wins_over_bearer_header(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    // Valid bearer, garbage cookie: the cookie is the one checked.
    let request = Request::builder()
        .uri("/api/auth/me")
        .header(COOKIE, "token=garbage")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_and_invalid_tokens_are_both_401(pool: PgPool) {
    let app = build_test_app(pool);

    let missing = get(app.clone(), "/api/auth/me").await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(missing).await["error"], "Not authenticated");

    let invalid = get_auth(app, "/api/auth/me", "not.a.jwt").await;
    assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(invalid).await["error"], "Invalid or expired token");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tampered_signature_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut sig = signature.to_string().into_bytes();
    sig[0] = if sig[0] == b'A' { b'B' } else { b'A' };
    let tampered = format!("{head}.{}", String::from_utf8(sig).unwrap());

    let response = get_auth(app, "/api/auth/me", &tampered).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Logout and bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_clears_cookie(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert_eq!(body_json(response).await, json!({ "success": true }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_admin_is_created_once(pool: PgPool) {
    assert!(ensure_admin_account(&pool, &seed()).await.unwrap());

    let other = AdminSeedConfig {
        username: "second".to_string(),
        password: "irrelevant".to_string(),
    };
    assert!(!ensure_admin_account(&pool, &other).await.unwrap());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
