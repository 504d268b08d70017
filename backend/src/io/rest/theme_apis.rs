use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::Theme;
use tracing::{error, info};

use crate::io::rest::error_response;
use crate::io::rest::mappers::restaurant_mapper::RestaurantMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/themes", get(list_themes))
}

pub async fn list_themes(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/themes");

    match state.theme_service.list_themes().await {
        Ok(themes) => {
            let body: Vec<Theme> = themes.into_iter().map(RestaurantMapper::theme_to_dto).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!("Failed to list themes: {}", e);
            error_response(e)
        }
    }
}
