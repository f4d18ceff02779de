//! Integration tests for waitlist signup, the admin listing and database
//! diagnostics.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn subscribe_returns_201_with_normalized_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/waitlist",
        json!({ "email": " Fan@Example.COM ", "name": "  Fan  " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = &body_json(response).await["data"];
    assert_eq!(data["email"], "fan@example.com");
    assert_eq!(data["name"], "Fan");
    assert!(data["id"].is_i64());
    assert!(data["subscribed_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_name_is_stored_as_null(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/waitlist",
        json!({ "email": "fan@example.com", "name": "   " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["data"]["name"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_signup_returns_409(pool: PgPool) {
    let first = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/waitlist",
        json!({ "email": "fan@example.com" }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        common::build_test_app(pool),
        "/api/v1/waitlist",
        json!({ "email": "FAN@example.com" }),
    )
    .await;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[tokio::test]
async fn invalid_email_returns_400() {
    let app = common::build_test_app(common::lazy_pool());

    let response = post_json(app, "/api/v1/waitlist", json!({ "email": "nope" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Admin listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_lists_newest_first(pool: PgPool) {
    for email in ["first@example.com", "second@example.com", "third@example.com"] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/waitlist",
            json!({ "email": email }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/waitlist", &common::admin_token()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let emails: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["email"].as_str().unwrap())
        .collect();
    assert_eq!(
        emails,
        vec!["third@example.com", "second@example.com", "first@example.com"]
    );
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

async fn insert_consultation(pool: &PgPool, name: &str) {
    sqlx::query("INSERT INTO consultations (name, email, message) VALUES ($1, $2, NULL)")
        .bind(name)
        .bind(format!("{}@example.com", name.to_lowercase()))
        .execute(pool)
        .await
        .expect("insert consultation");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn diagnostics_reports_count_and_sample(pool: PgPool) {
    for name in ["Ada", "Grace", "Linus"] {
        insert_consultation(&pool, name).await;
    }
    let app = common::build_test_app(pool);

    let response = get_auth(
        app,
        "/api/v1/admin/diagnostics/database?limit=2",
        &common::admin_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = &body_json(response).await["data"];
    assert_eq!(data["connected"], true);
    assert_eq!(data["consultation_count"], 3);
    assert_eq!(data["sample"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn diagnostics_on_empty_table(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/diagnostics/database", &common::admin_token()).await;

    let data = &body_json(response).await["data"];
    assert_eq!(data["consultation_count"], 0);
    assert_eq!(data["sample"], json!([]));
}
