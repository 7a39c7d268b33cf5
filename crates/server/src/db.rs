use axum::extract::FromRef;
use shared_types::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// State for the REST router. `FromRef` lets handlers take `State<PgPool>`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

/// Pool shared by server functions. Lazily connected, so it does not bind
/// to whichever tokio runtime happened to create it.
static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATED: AtomicBool = AtomicBool::new(false);

/// Build a lazily connected pool from `DATABASE_URL`.
pub fn create_pool() -> Result<Pool<Postgres>, sqlx::Error> {
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(&database_url)
}

pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Pool for server functions. The first successful call also migrates.
pub async fn get_db() -> Result<&'static Pool<Postgres>, AppError> {
    let pool = match POOL.get() {
        Some(pool) => pool,
        None => {
            let created = create_pool().map_err(|e| {
                tracing::error!(error = %e, "could not create database pool");
                AppError::internal("Database is not configured")
            })?;
            POOL.get_or_init(|| created)
        }
    };

    if !MIGRATED.swap(true, Ordering::SeqCst) {
        if let Err(e) = run_migrations(pool).await {
            MIGRATED.store(false, Ordering::SeqCst);
            tracing::error!(error = %e, "migrations failed");
            return Err(AppError::database("Database is not ready"));
        }
    }

    Ok(pool)
}
