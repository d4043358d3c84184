//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Startup failures surface through `anyhow`; request-level errors are
//! rendered by the auth and task crates.

use auth::{MemoryUserRepository, PgUserRepository};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use taskboard::{AppConfig, build_router};
use tasks::{MemoryTaskRepository, PgTaskRepository};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=info,auth=info,tasks=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let app: Router = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_router(
                PgUserRepository::new(pool.clone()),
                PgTaskRepository::new(pool),
                config.auth.clone(),
                config.tasks.clone(),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data is lost on exit)");
            build_router(
                MemoryUserRepository::new(),
                MemoryTaskRepository::new(),
                config.auth.clone(),
                config.tasks.clone(),
            )
        }
    };

    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
