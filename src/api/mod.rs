//! Games Dash HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The dashboard page
//!
//! ## Filters
//! - `GET /api/v1/filters` - Genre, rating and year domains plus defaults
//!
//! ## Outputs
//! - `POST /api/v1/figures/scatter` - Score scatter figure (plotly JSON)
//! - `POST /api/v1/figures/area` - Releases stacked-area figure (plotly JSON)
//! - `POST /api/v1/count` - Number of matching games
//!
//! All three outputs take the same body:
//! `{"genres": [...], "ratings": [...], "years": [lo, hi]}`.
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use games_dash::api::{serve, ApiConfig, AppState};
//! use games_dash::dataset::DatasetLoader;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (dataset, _report) = DatasetLoader::new().load("games.csv".as_ref())?;
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(Arc::new(dataset), config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/filters", get(routes::filters::get_filters))
        .route("/figures/scatter", post(routes::figures::scatter))
        .route("/figures/area", post(routes::figures::area))
        .route("/count", post(routes::figures::count));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let timeout = state.config.request_timeout();
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Games Dash listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Games Dash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::sample_dataset;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(sample_dataset()), ApiConfig::default());
        build_router(state)
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("filter-genres"));
    }

    #[tokio::test]
    async fn test_index_serves_prerendered_page() {
        let state = AppState::new(Arc::new(sample_dataset()), ApiConfig::default());
        let expected = state.page.clone();
        let app = build_router(state);

        for _ in 0..2 {
            let response = get(app.clone(), "/").await;
            let content_type = response.headers()[axum::http::header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .to_string();
            assert!(content_type.starts_with("text/html"));

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(bytes, expected);
        }
    }

    #[tokio::test]
    async fn test_filters() {
        let response = get(create_test_app(), "/api/v1/filters").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["genres"][0], "Action");
        assert_eq!(json["years"]["min"], 2001);
        assert_eq!(json["years"]["max"], 2008);
        assert_eq!(json["defaults"]["ratings"], serde_json::json!(["E"]));
        assert_eq!(json["defaults"]["years"], serde_json::json!([2002, 2008]));
    }

    #[tokio::test]
    async fn test_count() {
        let (status, json) = post_json(
            create_test_app(),
            "/api/v1/count",
            r#"{"genres": ["Action"], "ratings": ["E"], "years": [2005, 2006]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 2);
        assert_eq!(json["text"], "Selected games: 2");
    }

    #[tokio::test]
    async fn test_count_scalar_selection() {
        let (status, json) = post_json(
            create_test_app(),
            "/api/v1/count",
            r#"{"genres": "Action", "ratings": "E", "years": [2005, 2006]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 2);
    }

    #[tokio::test]
    async fn test_count_empty_genres() {
        let (status, json) = post_json(
            create_test_app(),
            "/api/v1/count",
            r#"{"genres": [], "ratings": ["E"], "years": [2000, 2016]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 0);
        assert_eq!(json["text"], "Selected games: 0");
    }

    #[tokio::test]
    async fn test_scatter_figure() {
        let (status, json) = post_json(
            create_test_app(),
            "/api/v1/figures/scatter",
            r#"{"genres": ["Action", "Sports", "Racing"], "ratings": ["E"], "years": [2002, 2010]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Racing", "Sports", "Action"]);
    }

    #[tokio::test]
    async fn test_area_figure() {
        let (status, json) = post_json(
            create_test_app(),
            "/api/v1/figures/area",
            r#"{"genres": ["Action"], "ratings": ["E"], "years": [2005, 2006]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "PS2");
        assert_eq!(data[1]["name"], "XB");
        assert_eq!(data[0]["x"], serde_json::json!([2005]));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let (status, json) = post_json(create_test_app(), "/api/v1/count", "not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_years() {
        let (status, _) = post_json(
            create_test_app(),
            "/api/v1/figures/scatter",
            r#"{"genres": ["Action"], "ratings": ["E"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
