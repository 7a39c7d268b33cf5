use axum::http::StatusCode;

use crate::common;

const PASSWORD: &str = "correct horse battery";

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_login_returns_user_and_token() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_user(&pool, "amara", "student", PASSWORD).await;

    let body = serde_json::json!({ "email": student.email, "password": PASSWORD });
    let (status, res) =
        common::post_json(&app, "/api/v1/auth/login", &body.to_string(), None).await;

    assert_eq!(status, StatusCode::OK, "login failed: {res}");
    assert_eq!(res["user"]["id"], student.id);
    assert_eq!(res["user"]["role"], "student");
    assert!(res["access_token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_login_wrong_password_is_401() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    let body = serde_json::json!({ "email": student.email, "password": "nope" });
    let (status, _) =
        common::post_json(&app, "/api/v1/auth/login", &body.to_string(), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_login_email_is_case_insensitive() {
    let (app, pool, _guard) = common::test_app().await;
    common::seed_student(&pool, "amara").await;

    let body = serde_json::json!({ "email": "AMARA@example.com", "password": PASSWORD });
    let (status, _) =
        common::post_json(&app, "/api/v1/auth/login", &body.to_string(), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_me_requires_a_session() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    let (status, _) = common::get(&app, "/api/v1/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, me) = common::get(&app, "/api/v1/auth/me", Some(&student.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], student.email.as_str());
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_me_reports_staff_role() {
    let (app, pool, _guard) = common::test_app().await;
    let staff = common::seed_user(&pool, "warden", "staff", PASSWORD).await;

    let (status, me) = common::get(&app, "/api/v1/auth/me", Some(&staff.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["role"], "staff");
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_logout_revokes_refresh_tokens() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    let body = serde_json::json!({ "email": student.email, "password": PASSWORD });
    let (status, _) =
        common::post_json(&app, "/api/v1/auth/login", &body.to_string(), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        common::post_json(&app, "/api/v1/auth/logout", "", Some(&student.token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let active: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM refresh_tokens WHERE user_id = $1 AND NOT revoked",
    )
    .bind(student.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(active, 0, "logout should leave no live refresh tokens");
}
