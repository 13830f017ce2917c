//! Storefront Backend - product catalog service
//!
//! This is the main entry point for the Storefront backend API.
//! The catalog is exposed as REST endpoints under /api.

mod api;
mod catalog;
mod config;
mod db;
mod query;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Storefront Backend");

    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    db.migrate().await?;
    tracing::info!("Migrations applied");

    let seeded = db::seed::run_seeds(db.pool()).await;
    if !seeded.errors.is_empty() {
        tracing::warn!(errors = ?seeded.errors, "Seeding finished with errors");
    }

    let state = AppState {
        config: config.clone(),
        db,
    };

    let app = Router::new()
        // Health endpoints
        .merge(api::health::router())
        // REST API endpoints
        .nest("/api", api::products::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
