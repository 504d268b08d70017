use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::{PageViewResponse, StatsResponse};
use tracing::{error, info};

use crate::io::rest::error_response;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/stats/page-view", post(record_page_view))
}

pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/stats");

    match state.stats_service.get_stats().await {
        Ok(stats) => {
            let body = StatsResponse {
                restaurant_count: stats.restaurant_count,
                total_spins: stats.total_spins,
                page_views: stats.page_views,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!("Failed to read stats: {}", e);
            error_response(e)
        }
    }
}

pub async fn record_page_view(State(state): State<AppState>) -> impl IntoResponse {
    match state.stats_service.record_page_view().await {
        Ok(page_views) => (StatusCode::OK, Json(PageViewResponse { page_views })).into_response(),
        Err(e) => {
            error!("Failed to record page view: {}", e);
            error_response(e)
        }
    }
}
