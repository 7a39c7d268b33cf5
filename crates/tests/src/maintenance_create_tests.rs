use axum::http::StatusCode;

use crate::common;

const REQUESTS: &str = "/api/maintenance-requests";

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_create_binds_owner_and_defaults() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    let body = serde_json::json!({
        "title": "  Leaking tap  ",
        "description": "Kitchen tap drips all night",
        "priority": "high"
    });
    let (status, created) =
        common::post_json(&app, REQUESTS, &body.to_string(), Some(&student.token)).await;

    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    assert_eq!(created["user_id"], student.id);
    assert_eq!(created["title"], "Leaking tap");
    assert_eq!(created["priority"], "high");
    assert_eq!(created["status"], "pending");
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_create_ignores_client_supplied_owner() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;
    let other = common::seed_student(&pool, "bongani").await;

    let body = serde_json::json!({
        "title": "Broken window",
        "description": "Cracked pane",
        "priority": "medium",
        "user_id": other.id
    });
    let (status, created) =
        common::post_json(&app, REQUESTS, &body.to_string(), Some(&student.token)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["user_id"], student.id);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_blank_title_is_rejected_with_field_error() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    let body = serde_json::json!({ "title": "   ", "description": "", "priority": "low" });
    let (status, err) =
        common::post_json(&app, REQUESTS, &body.to_string(), Some(&student.token)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(err["field_errors"]["title"].is_string(), "expected a title error: {err}");
    assert!(
        err["field_errors"]["description"].is_string(),
        "expected a description error: {err}"
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_requests")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_unknown_priority_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    let body = serde_json::json!({
        "title": "Noise",
        "description": "Music after midnight",
        "priority": "urgent"
    });
    let (status, err) =
        common::post_json(&app, REQUESTS, &body.to_string(), Some(&student.token)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        err["field_errors"]["priority"].is_string(),
        "expected a priority error: {err}"
    );
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_create_writes_confirmation_notification() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    common::create_request(&app, &student.token, "Leaking tap", "medium").await;

    let (status, notes) = common::get(&app, "/api/notifications", Some(&student.token)).await;
    assert_eq!(status, StatusCode::OK);
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], server::service::maintenance::RECEIVED_TITLE);
    assert_eq!(notes[0]["read"], false);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_create_requires_student_role() {
    let (app, pool, _guard) = common::test_app().await;
    let staff = common::seed_user(&pool, "warden", "staff", "correct horse battery").await;

    let body = serde_json::json!({
        "title": "Leak",
        "description": "Under the sink",
        "priority": "low"
    });
    let (status, _) =
        common::post_json(&app, REQUESTS, &body.to_string(), Some(&staff.token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = common::post_json(&app, REQUESTS, &body.to_string(), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
