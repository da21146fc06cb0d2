//! REST handlers for the studio page, its JSON snapshot, and operational endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use studio_core::types::Campaign;
use studio_core::Catalog;
use studio_view::{
    render_page, PromotionCalendar, StudioView, ThemeMode, ViewParams, ViewSnapshot, ViewState,
};
use tracing::debug;

/// Shared application state for REST handlers. Everything here is read-only
/// after startup; view state is rebuilt per request from the query string.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub calendar: Arc<PromotionCalendar>,
    pub default_theme: ThemeMode,
    pub node_id: String,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog, default_theme: ThemeMode, node_id: impl Into<String>) -> Self {
        let calendar = PromotionCalendar::from_catalog(&catalog);
        Self {
            catalog: Arc::new(catalog),
            calendar: Arc::new(calendar),
            default_theme,
            node_id: node_id.into(),
            start_time: Instant::now(),
        }
    }

    /// Parse request parameters into a view state, counting selection fallbacks.
    fn view_state(&self, params: &ViewParams) -> ViewState {
        let (state, fell_back) = ViewState::from_params(params, &self.catalog);
        if fell_back {
            metrics::counter!("studio.selection_fallbacks").increment(1);
        }
        state
    }
}

/// Raw query pairs folded into view parameters; each pair is judged on its own.
type RawQuery = Option<Query<Vec<(String, String)>>>;

fn params_or_default(query: RawQuery) -> ViewParams {
    query
        .map(|Query(pairs)| ViewParams::from_pairs(pairs))
        .unwrap_or_default()
}

/// GET / and GET /studio: Server-rendered studio page.
pub async fn studio_page(
    State(state): State<AppState>,
    params: RawQuery,
) -> Html<String> {
    let params = params_or_default(params);
    let theme = params
        .theme
        .as_deref()
        .and_then(ThemeMode::parse)
        .unwrap_or(state.default_theme);
    let view_state = state.view_state(&params);

    debug!(
        tab = view_state.tab.as_str(),
        campaign = view_state.selected_id().unwrap_or("-"),
        execution = view_state.execution.as_str(),
        "Rendering studio page"
    );
    metrics::counter!("studio.page_renders", "tab" => view_state.tab.as_str()).increment(1);

    Html(render_page(
        &view_state,
        &state.catalog,
        &theme,
        state.calendar.as_ref(),
    ))
}

/// GET /api/v1/studio/view: JSON snapshot of the derived view.
pub async fn view_snapshot(
    State(state): State<AppState>,
    params: RawQuery,
) -> Json<ViewSnapshot> {
    let params = params_or_default(params);
    let view_state = state.view_state(&params);
    metrics::counter!("studio.view_snapshots").increment(1);
    Json(StudioView::derive(&view_state, &state.catalog).snapshot())
}

/// GET /api/v1/studio/campaigns: Catalog campaigns in catalog order.
pub async fn list_campaigns(State(state): State<AppState>) -> Json<Vec<Campaign>> {
    Json(state.catalog.campaigns.clone())
}

/// GET /health: Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        campaigns: state.catalog.campaigns.len(),
    })
}

/// GET /live: Liveness probe for Kubernetes.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Fallback for unknown routes.
pub async fn not_found() -> ErrorResponse {
    ErrorResponse {
        error: "not_found".to_string(),
        message: "No such route".to_string(),
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
    pub campaigns: usize,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::NOT_FOUND, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::router;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn app() -> axum::Router {
        router(AppState::new(Catalog::builtin(), ThemeMode::Light, "test-node"))
    }

    async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(uri: &str) -> serde_json::Value {
        let (status, _, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_root_renders_overview() {
        let (status, content_type, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("id=\"section-overview\""));
        assert!(body.contains("5 campaigns found"));
    }

    #[tokio::test]
    async fn test_studio_route_honours_query() {
        let (_, _, body) = get("/studio?tab=execution&execution=running&campaign=camp-002").await;
        assert!(body.contains("id=\"section-execution\""));
        assert!(body.contains("Campaign is Live"));
        assert!(body.contains("Running across 3 platforms"));
    }

    #[tokio::test]
    async fn test_bad_values_fall_back_to_defaults() {
        let (status, _, body) = get("/?tab=bogus&status=zzz&execution=maybe&theme=neon").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"section-overview\""));
        assert!(body.contains("5 campaigns found"));
        assert!(body.contains("bg-gray-50"));
    }

    #[tokio::test]
    async fn test_repeated_key_does_not_drop_other_params() {
        let json = get_json("/api/v1/studio/view?campaign=camp-004&q=a&q=b").await;
        assert_eq!(json["selected_campaign"]["id"], "camp-004");
        assert_eq!(json["query"], "b");

        let (status, _, body) = get("/studio?tab=scheduler&tab=execution&campaign=camp-002").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"section-execution\""));
        assert!(body.contains("Brand Awareness Q4 &middot; campaign status"));
    }

    #[tokio::test]
    async fn test_dark_theme_from_query() {
        let (_, _, body) = get("/?theme=dark").await;
        assert!(body.contains("bg-gray-900"));
    }

    #[tokio::test]
    async fn test_snapshot_filters_by_status_and_query() {
        let json = get_json("/api/v1/studio/view?status=approved").await;
        assert_eq!(json["filtered_campaign_ids"], serde_json::json!(["camp-001", "camp-003"]));
        assert_eq!(json["stats"]["total"], 5);

        let json = get_json("/api/v1/studio/view?q=SUMMER").await;
        assert_eq!(json["filtered_campaign_ids"], serde_json::json!(["camp-001"]));
    }

    #[tokio::test]
    async fn test_snapshot_unknown_campaign_falls_back() {
        let json = get_json("/api/v1/studio/view?campaign=camp-999").await;
        assert_eq!(json["selected_campaign"]["id"], "camp-001");
        assert_eq!(json["selected_campaign"]["duration_days"], 31);
        assert_eq!(json["execution"], "paused");
        assert_eq!(json["tab"], "overview");
    }

    #[tokio::test]
    async fn test_list_campaigns_in_catalog_order() {
        let json = get_json("/api/v1/studio/campaigns").await;
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["camp-001", "camp-002", "camp-003", "camp-004", "camp-005"]);
    }

    #[tokio::test]
    async fn test_health_and_liveness() {
        let json = get_json("/health").await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["node_id"], "test-node");
        assert_eq!(json["campaigns"], 5);

        let (status, _, _) = get("/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, _, body) = get("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("not_found"));
    }
}
