//! HTTP routes for the dashboard.
//!
//! - `GET /` renders the page.
//! - `POST /analysis` is the "Run AI Analysis" button; it re-renders the page with the
//!   acknowledgment and changes nothing else.
//! - `GET /health` reports liveness as JSON.

use crate::health::{HealthRes, HealthService};
use crate::view::{render, ViewState};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use pmp_core::Dashboard;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// The dashboard is read-only after startup, so every viewer gets the same isolated view without
/// any locking.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}

/// Build the dashboard router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analysis", post(run_analysis))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[axum::debug_handler]
async fn index(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, &'static str)> {
    render_page(&state, ViewState::default())
}

/// Handle the analysis button.
///
/// The matcher already ran at startup; this only acknowledges the click.
#[axum::debug_handler]
async fn run_analysis(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    tracing::info!("analysis requested");
    render_page(&state, ViewState { analysis_ran: true })
}

#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

fn render_page(
    state: &AppState,
    view: ViewState,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    match render(&state.dashboard, &view) {
        Ok(page) => Ok(Html(page)),
        Err(e) => {
            tracing::error!("Render dashboard error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use pmp_core::Fixtures;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Dashboard::new(Fixtures::stock())))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn index_returns_page_without_acknowledgment() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let page = body_text(response).await;
        assert!(page.contains("Asha Patel"));
        assert!(!page.contains("AI analysis completed!"));
    }

    #[tokio::test]
    async fn analysis_post_shows_acknowledgment() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analysis")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("✅ AI analysis completed!"));
        assert!(page.contains("(87% confidence)"));
    }

    #[tokio::test]
    async fn analysis_requires_post() {
        let response = app()
            .oneshot(Request::builder().uri("/analysis").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value =
            serde_json::from_str(&body_text(response).await).expect("json body");
        assert_eq!(json["ok"], true);
        assert_eq!(json["message"], "PMP dashboard is alive");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/patients").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
