use axum::extract::State;
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tracing::debug;

use super::pages;
use super::AppState;
use crate::components::Pagination;
use crate::config::Config;
use crate::pagination::{
    clamp_page, current_page_from_query, query_param, PageToken, PageUrlBuilder,
};

/// Query parameter overriding the configured page count.
const TOTAL_PARAM: &str = "total";

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(preview))
        .route("/api/pagination", get(api_pagination))
        .route("/healthz", get(health))
}

/// Build the pagination control for a request.
///
/// The requested page is bounded to the available pages here; the window
/// calculation itself never corrects its inputs.
fn pagination_for(config: &Config, uri: &Uri) -> Pagination {
    let query = uri.query();
    let total_pages = query_param(query, TOTAL_PARAM)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(config.total_pages);
    let requested = current_page_from_query(query, &config.page_param);
    let current_page = clamp_page(requested, total_pages);

    debug!(
        path = uri.path(),
        requested,
        current_page,
        total_pages,
        "Resolved pagination request"
    );

    let urls = PageUrlBuilder::new(uri.path(), query).with_page_param(&config.page_param);
    Pagination::new(current_page, total_pages, urls)
        .with_max_visible_buttons(config.max_visible_buttons)
}

// ========== HTML Routes ==========

async fn preview(State(state): State<AppState>, uri: Uri) -> Response {
    let pagination = pagination_for(&state.config, &uri);

    let per_page = state.config.rows_per_page;
    // `total` comes from the request, so the page can be arbitrarily large.
    let first_row = (pagination.current_page - 1)
        .saturating_mul(per_page)
        .saturating_add(1);
    let rows = first_row..=first_row.saturating_add(per_page - 1);

    let html = pages::render_preview(&pagination, rows);
    Html(html.into_string()).into_response()
}

// ========== API Routes ==========

/// JSON description of a pagination control.
#[derive(Debug, Serialize)]
pub struct PaginationResponse {
    pub current_page: i64,
    pub total_pages: i64,
    pub max_visible_buttons: i64,
    pub tokens: Vec<PageToken>,
    /// Link for the previous arrow, `null` when disabled.
    pub previous: Option<String>,
    /// Link for the next arrow, `null` when disabled.
    pub next: Option<String>,
}

impl From<&Pagination> for PaginationResponse {
    fn from(pagination: &Pagination) -> Self {
        Self {
            current_page: pagination.current_page,
            total_pages: pagination.total_pages,
            max_visible_buttons: pagination.max_visible_buttons,
            tokens: pagination.tokens(),
            previous: pagination.previous_href(),
            next: pagination.next_href(),
        }
    }
}

async fn api_pagination(State(state): State<AppState>, uri: Uri) -> Json<PaginationResponse> {
    let pagination = pagination_for(&state.config, &uri);
    Json(PaginationResponse::from(&pagination))
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_pagination_for_defaults() {
        let config = Config::default();
        let pagination = pagination_for(&config, &uri("/"));
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.total_pages, config.total_pages);
        assert_eq!(pagination.max_visible_buttons, config.max_visible_buttons);
    }

    #[test]
    fn test_pagination_for_clamps_page() {
        let config = Config::default();
        assert_eq!(pagination_for(&config, &uri("/?page=999")).current_page, 20);
        assert_eq!(pagination_for(&config, &uri("/?page=-4")).current_page, 1);
        assert_eq!(pagination_for(&config, &uri("/?page=abc")).current_page, 1);
    }

    #[test]
    fn test_pagination_for_total_override() {
        let config = Config::default();
        assert_eq!(pagination_for(&config, &uri("/?total=3")).total_pages, 3);
        assert_eq!(pagination_for(&config, &uri("/?total=0")).total_pages, 20);
        assert_eq!(pagination_for(&config, &uri("/?total=x")).total_pages, 20);
    }

    #[test]
    fn test_pagination_for_custom_param() {
        let config = Config {
            page_param: "p".to_string(),
            ..Config::default()
        };
        let pagination = pagination_for(&config, &uri("/list?p=4&page=9"));
        assert_eq!(pagination.current_page, 4);
        assert_eq!(pagination.next_href(), Some("/list?p=5&page=9".to_string()));
    }

    #[test]
    fn test_response_from_pagination() {
        let config = Config::default();
        let pagination = pagination_for(&config, &uri("/api/pagination?page=1&total=10"));
        let response = PaginationResponse::from(&pagination);
        assert_eq!(response.previous, None);
        assert_eq!(
            response.next,
            Some("/api/pagination?page=2&total=10".to_string())
        );
        assert_eq!(response.tokens.len(), 5);
    }
}
