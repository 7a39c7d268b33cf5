use axum::http::StatusCode;
use chrono::DateTime;

use crate::common;

const REQUESTS: &str = "/api/maintenance-requests";

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_list_only_shows_own_requests() {
    let (app, pool, _guard) = common::test_app().await;
    let amara = common::seed_student(&pool, "amara").await;
    let bongani = common::seed_student(&pool, "bongani").await;

    common::create_request(&app, &amara.token, "Amara's heater", "high").await;
    common::create_request(&app, &bongani.token, "Bongani's door", "low").await;

    let (status, list) = common::get(&app, REQUESTS, Some(&amara.token)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = list.as_array().unwrap();
    let titles: Vec<&str> = rows.iter().filter_map(|r| r["title"].as_str()).collect();
    assert_eq!(titles, vec!["Amara's heater"]);
    assert!(rows.iter().all(|r| r["user_id"] == amara.id));
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_list_is_newest_first() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    for title in ["first", "second", "third"] {
        common::create_request(&app, &student.token, title, "medium").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let (_, list) = common::get(&app, REQUESTS, Some(&student.token)).await;
    let rows = list.as_array().unwrap();
    let titles: Vec<&str> = rows.iter().filter_map(|r| r["title"].as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);

    let stamps: Vec<_> = rows
        .iter()
        .map(|r| DateTime::parse_from_rfc3339(r["created_at"].as_str().unwrap()).unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_empty_list_for_new_student() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    let (status, list) = common::get(&app, REQUESTS, Some(&student.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_get_by_id_of_other_student_returns_404() {
    let (app, pool, _guard) = common::test_app().await;
    let amara = common::seed_student(&pool, "amara").await;
    let bongani = common::seed_student(&pool, "bongani").await;

    let id = common::create_request(&app, &amara.token, "Heater", "high").await;
    let uri = format!("{REQUESTS}/{id}");

    let (status, found) = common::get(&app, &uri, Some(&amara.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], id.as_str());

    let (status, _) = common::get(&app, &uri, Some(&bongani.token)).await;
    assert_eq!(
        status,
        StatusCode::NOT_FOUND,
        "another student's request must look missing"
    );
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_get_by_malformed_id_is_400() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    let uri = format!("{REQUESTS}/not-a-uuid");
    let (status, _) = common::get(&app, &uri, Some(&student.token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let uri = format!("{REQUESTS}/{}", uuid::Uuid::new_v4());
    let (status, _) = common::get(&app, &uri, Some(&student.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
