mod config;
mod db;
mod error;
mod handlers;
mod models;
mod validation;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use db::{ClassroomGateway, ClassroomRepository};

pub struct AppState {
    pub classrooms: Arc<dyn ClassroomGateway>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classroom_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    // Set up database
    tracing::info!("Connecting to database");
    let db_pool = db::create_pool(
        &config.database_url,
        config.max_connections,
        config.acquire_timeout,
    )
    .await
    .context("Failed to create database pool")?;

    tracing::info!("Running database migrations");
    db::run_migrations(&db_pool).await
        .context("Failed to run migrations")?;

    let state = Arc::new(AppState {
        classrooms: Arc::new(ClassroomRepository::new(db_pool)),
    });

    let app = app(state);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router around shared state
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(handlers::classroom_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
