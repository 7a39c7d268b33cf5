use axum::http::StatusCode;

use crate::common;

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_mark_read_flips_flag() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;
    let note = server::repo::notification::create(&pool, student.id, "Water outage", "Tuesday")
        .await
        .unwrap();

    let uri = format!("/api/notifications/{}/read", note.id);
    let (status, _) = common::post_json(&app, &uri, "", Some(&student.token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, notes) = common::get(&app, "/api/notifications", Some(&student.token)).await;
    assert_eq!(notes[0]["read"], true);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_cannot_mark_another_students_notification() {
    let (app, pool, _guard) = common::test_app().await;
    let amara = common::seed_student(&pool, "amara").await;
    let bongani = common::seed_student(&pool, "bongani").await;
    let note = server::repo::notification::create(&pool, amara.id, "Parcel", "At reception")
        .await
        .unwrap();

    let uri = format!("/api/notifications/{}/read", note.id);
    let (status, _) = common::post_json(&app, &uri, "", Some(&bongani.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, notes) = common::get(&app, "/api/notifications", Some(&bongani.token)).await;
    assert_eq!(notes.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_notifications_require_a_session() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, _) = common::get(&app, "/api/notifications", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
