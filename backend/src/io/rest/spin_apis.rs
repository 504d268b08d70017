use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use shared::SpinRequest;
use tracing::{error, info};

use crate::domain::commands::spin::SpinCommand;
use crate::io::rest::mappers::restaurant_mapper::RestaurantMapper;
use crate::io::rest::{error_response, rejection_response};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/spin", post(spin))
}

/// Pick a random restaurant, optionally restricted to some categories
pub async fn spin(
    State(state): State<AppState>,
    payload: Result<Json<SpinRequest>, JsonRejection>,
) -> impl IntoResponse {
    // A bodiless spin means "any category"
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => SpinRequest::default(),
        Err(rejection) => return rejection_response(rejection),
    };
    info!("POST /api/spin - request: {:?}", request);

    let command = SpinCommand {
        category_ids: request.category_ids.unwrap_or_default(),
    };
    match state.spin_service.spin(command).await {
        Ok(restaurant) => (StatusCode::OK, Json(RestaurantMapper::to_dto(restaurant))).into_response(),
        Err(e) => {
            error!("Spin failed: {}", e);
            error_response(e)
        }
    }
}
