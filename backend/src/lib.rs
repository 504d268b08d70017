//! # Lunch Roulette Backend
//!
//! Server side of the lunch roulette: a curated list of restaurants grouped
//! into categories, from which a random pick is drawn.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers, mappers)
//!     ↓
//! Domain Layer (services, commands, business rules)
//!     ↓
//! Storage Layer (SQLite connection, repositories)
//! ```
//!
//! `initialize_backend` opens the database and wires the services into an
//! `AppState`; `create_router` mounts every resource router under `/api`.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{sqlite_file_path, Config};
use crate::domain::{
    CategoryService, RestaurantService, SpinService, StatsService, ThemeService, TransferService,
};
use crate::io::rest::{
    category_apis, restaurant_apis, spin_apis, stats_apis, theme_apis, transfer_apis,
};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub restaurant_service: RestaurantService,
    pub category_service: CategoryService,
    pub spin_service: SpinService,
    pub stats_service: StatsService,
    pub transfer_service: TransferService,
    pub theme_service: ThemeService,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            restaurant_service: RestaurantService::new(db.clone()),
            category_service: CategoryService::new(db.clone()),
            spin_service: SpinService::new(db.clone()),
            stats_service: StatsService::new(db.clone()),
            transfer_service: TransferService::new(db.clone()),
            theme_service: ThemeService::new(db),
        }
    }
}

/// Open the database at `database_url` and build the services on top of it
pub async fn initialize_backend(database_url: &str) -> Result<AppState> {
    if let Some(path) = sqlite_file_path(database_url) {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent).await?,
            _ => {}
        }
    }

    info!("Setting up database at {}", database_url);
    let db = DbConnection::new(database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);
    let cors = match &config.cors_origin {
        Some(origin) => cors.allow_origin(origin.parse::<HeaderValue>()?),
        None => cors.allow_origin(Any),
    };

    let api_routes = Router::new()
        .merge(category_apis::router())
        .merge(restaurant_apis::router())
        .merge(spin_apis::router())
        .merge(stats_apis::router())
        .merge(transfer_apis::router())
        .merge(theme_apis::router());

    let mut router = Router::new().nest("/api", api_routes);
    if let Some(static_dir) = &config.static_dir {
        info!("Serving static files from {}", static_dir.display());
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    Ok(router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_support::send;
    use axum::http::{Method, StatusCode};
    use clap::Parser;
    use serde_json::json;

    async fn setup_test_app() -> Router {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let config = Config::try_parse_from([
            "lunch-roulette",
            "--database-url",
            "sqlite::memory:",
            "--cors-origin",
            "http://localhost:8080",
        ])
        .unwrap();
        create_router(AppState::new(db), &config).unwrap()
    }

    #[tokio::test]
    async fn test_routes_are_mounted_under_api() {
        let app = setup_test_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/restaurants",
            Some(json!({"name": "Pasta Place", "category": "Italian"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, spun) = send(
            &app,
            Method::POST,
            "/api/spin",
            Some(json!({"category_ids": [body["category_id"]]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(spun["name"], "Pasta Place");

        let (status, themes) = send(&app, Method::GET, "/api/themes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(themes[0]["name"], "light");

        let (status, _) = send(&app, Method::GET, "/restaurants", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_cors_origin_is_an_error() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let config = Config::try_parse_from(["lunch-roulette", "--cors-origin", "bad\norigin"]).unwrap();

        assert!(create_router(AppState::new(db), &config).is_err());
    }

    #[tokio::test]
    async fn test_initialize_backend_creates_database_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("instance").join("lunch_roulette.db");

        let state = initialize_backend(&format!("sqlite:{}", db_path.display()))
            .await
            .expect("Failed to initialize backend");

        assert!(db_path.exists());
        assert_eq!(state.theme_service.list_themes().await.unwrap().len(), 6);
    }
}
