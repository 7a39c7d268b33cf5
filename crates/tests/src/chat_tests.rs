use axum::http::StatusCode;
use shared_types::CHAT_MESSAGE_MAX_CHARS;

use crate::common;

const MESSAGES: &str = "/api/chat/messages";

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_send_then_list_oldest_first() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    for body in ["Hello", "Is the laundry open?"] {
        let payload = serde_json::json!({ "body": body });
        let (status, sent) =
            common::post_json(&app, MESSAGES, &payload.to_string(), Some(&student.token)).await;
        assert_eq!(status, StatusCode::CREATED, "send failed: {sent}");
        assert_eq!(sent["sender_id"], student.id);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let (status, thread) = common::get(&app, MESSAGES, Some(&student.token)).await;
    assert_eq!(status, StatusCode::OK);
    let bodies: Vec<&str> = thread
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["body"].as_str())
        .collect();
    assert_eq!(bodies, vec!["Hello", "Is the laundry open?"]);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_threads_are_private() {
    let (app, pool, _guard) = common::test_app().await;
    let amara = common::seed_student(&pool, "amara").await;
    let bongani = common::seed_student(&pool, "bongani").await;

    let payload = serde_json::json!({ "body": "Room 12 key is lost" });
    common::post_json(&app, MESSAGES, &payload.to_string(), Some(&amara.token)).await;

    let (_, thread) = common::get(&app, MESSAGES, Some(&bongani.token)).await;
    assert_eq!(thread.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "needs a Postgres database in TEST_DATABASE_URL"]
async fn test_blank_and_oversized_messages_are_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    let student = common::seed_student(&pool, "amara").await;

    let blank = serde_json::json!({ "body": "   " });
    let (status, _) =
        common::post_json(&app, MESSAGES, &blank.to_string(), Some(&student.token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let long = serde_json::json!({ "body": "a".repeat(CHAT_MESSAGE_MAX_CHARS + 1) });
    let (status, err) =
        common::post_json(&app, MESSAGES, &long.to_string(), Some(&student.token)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(err["field_errors"]["body"].is_string(), "expected a body error: {err}");
}
