//! # Goal Dashboard Backend
//!
//! Contains all non-UI logic of the personal goal dashboard: a motivational
//! quote, a time-of-day greeting and two goal lists (weekly, daily) with
//! completion progress.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! Browser (dashboard page)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (GoalService, DashboardService, QuoteBook)
//!     ↓
//! Storage Layer (JSON goal record)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::Config;
use crate::domain::{DashboardService, GoalService, QuoteBook};
use crate::storage::GoalRepository;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub goal_service: GoalService,
    pub dashboard_service: DashboardService,
}

/// Initialize the backend with all required services
///
/// Fails when the quote source is missing, malformed or empty: the dashboard
/// does not start serving without quotes.
pub fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Loading quotes from {}", config.quotes_file.display());
    let quote_book = QuoteBook::from_file(&config.quotes_file)
        .context("cannot start without a usable quotes file")?;

    let repository = GoalRepository::new(&config.goals_file);
    info!("Using goal record {}", repository.goals_file().display());

    let goal_service = GoalService::new(Arc::new(repository));
    let dashboard_service = DashboardService::new(goal_service.clone(), Arc::new(quote_book));

    Ok(AppState {
        goal_service,
        dashboard_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Result<Router> {
    let mut router = Router::new().nest("/api", io::api_router());

    if let Some(static_dir) = &config.static_dir {
        info!("Serving front-end from {}", static_dir.display());
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    if let Some(origin) = &config.allowed_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("invalid allowed origin: {}", origin))?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);
        router = router.layer(cors);
    }

    Ok(router.with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use clap::Parser;
    use tempfile::TempDir;
    use tower::util::ServiceExt; // for `oneshot`

    fn config_for(temp_dir: &TempDir, extra: &[&str]) -> Config {
        let goals = temp_dir.path().join("user_goals.json");
        let quotes = temp_dir.path().join("quotes.json");
        let mut args = vec![
            "goal-dashboard".to_string(),
            "--goals-file".to_string(),
            goals.display().to_string(),
            "--quotes-file".to_string(),
            quotes.display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Config::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_initialize_backend_requires_quotes() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir, &[]);

        assert!(initialize_backend(&config).is_err());

        std::fs::write(&config.quotes_file, "[]").unwrap();
        assert!(initialize_backend(&config).is_err());

        std::fs::write(&config.quotes_file, r#"["Keep going"]"#).unwrap();
        assert!(initialize_backend(&config).is_ok());
    }

    #[tokio::test]
    async fn test_router_serves_api_and_static_files() {
        let temp_dir = TempDir::new().unwrap();
        let static_dir = temp_dir.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), "<h1>Dashboard</h1>").unwrap();
        let static_arg = static_dir.display().to_string();
        let config = config_for(
            &temp_dir,
            &["--static-dir", &static_arg, "--allowed-origin", "http://localhost:8080"],
        );
        std::fs::write(&config.quotes_file, r#"["Keep going"]"#).unwrap();

        let app = create_router(initialize_backend(&config).unwrap(), &config).unwrap();

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/data").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>Dashboard</h1>");
    }

    #[test]
    fn test_create_router_rejects_bad_origin() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir, &["--allowed-origin", "bad\norigin"]);
        std::fs::write(&config.quotes_file, r#"["Keep going"]"#).unwrap();

        let app_state = initialize_backend(&config).unwrap();
        assert!(create_router(app_state, &config).is_err());
    }
}
