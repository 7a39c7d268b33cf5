use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware, Router,
};
use serde_json::Value;
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Tests share one database, so each holds this lock while it truncates and
/// seeds.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

/// A seeded account and a bearer token for it.
pub struct Seeded {
    pub id: i64,
    pub email: String,
    pub token: String,
}

/// Build the REST router over a freshly truncated database.
/// The returned guard must be held for the whole test.
pub async fn test_app() -> (Router, Pool<Postgres>, tokio::sync::MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();

    if std::env::var("JWT_SECRET").map(|s| s.is_empty()).unwrap_or(true) {
        std::env::set_var("JWT_SECRET", "integration-test-secret");
    }

    let database_url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL must be set for tests");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query(
        "TRUNCATE users, refresh_tokens, maintenance_requests, notifications, chat_messages \
         RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await
    .expect("Failed to truncate");

    let state = server::db::AppState { pool: pool.clone() };
    // The auth middleware never rejects; handlers decide what needs a session.
    let router = server::rest::api_router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            server::auth::middleware::auth_middleware,
        ))
        .with_state(state);

    (router, pool, guard)
}

/// Insert an account with the given role and password, and mint an access
/// token for it.
pub async fn seed_user(
    pool: &Pool<Postgres>,
    username: &str,
    role: &str,
    password: &str,
) -> Seeded {
    let hash = server::auth::password::hash_password(password).expect("Failed to hash password");
    let email = format!("{username}@example.com");

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash, display_name, role)
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(username)
    .bind(&email)
    .bind(&hash)
    .bind(format!("{username} Test"))
    .bind(role)
    .fetch_one(pool)
    .await
    .expect("Failed to seed user");

    let token = server::auth::jwt::create_access_token(id, &email, role)
        .expect("Failed to mint access token");

    Seeded { id, email, token }
}

pub async fn seed_student(pool: &Pool<Postgres>, username: &str) -> Seeded {
    seed_user(pool, username, "student", "correct horse battery").await
}

/// POST JSON, optionally as a signed-in caller.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &str,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        req = req.header("authorization", format!("Bearer {token}"));
    }

    send(app, req.body(Body::from(body.to_string())).unwrap()).await
}

/// GET, optionally as a signed-in caller.
pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        req = req.header("authorization", format!("Bearer {token}"));
    }

    send(app, req.body(Body::empty()).unwrap()).await
}

/// File a maintenance request through the API and return its id.
pub async fn create_request(app: &Router, token: &str, title: &str, priority: &str) -> String {
    let body = serde_json::json!({
        "title": title,
        "description": format!("{title} needs fixing"),
        "priority": priority,
    });
    let (status, created) =
        post_json(app, "/api/maintenance-requests", &body.to_string(), Some(token)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    created["id"].as_str().expect("created request has an id").to_string()
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}
