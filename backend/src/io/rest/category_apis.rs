//! # REST API for Categories

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{Category, DeleteCategoriesRequest, DeletedResponse};
use tracing::{error, info};

use crate::domain::commands::categories::DeleteCategoriesCommand;
use crate::io::rest::mappers::restaurant_mapper::RestaurantMapper;
use crate::io::rest::{error_response, rejection_response};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories).delete(delete_categories))
}

/// List all categories
pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/categories");

    match state.category_service.list_categories().await {
        Ok(categories) => {
            let body: Vec<Category> = categories
                .into_iter()
                .map(RestaurantMapper::category_to_dto)
                .collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!("Failed to list categories: {}", e);
            error_response(e)
        }
    }
}

/// Delete several categories and every restaurant in them
pub async fn delete_categories(
    State(state): State<AppState>,
    payload: Result<Json<DeleteCategoriesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    info!("DELETE /api/categories - request: {:?}", request);

    let command = DeleteCategoriesCommand {
        category_ids: request.category_ids.unwrap_or_default(),
    };
    match state.category_service.delete_categories(command).await {
        Ok(deleted) => (StatusCode::OK, Json(DeletedResponse { deleted })).into_response(),
        Err(e) => {
            error!("Failed to delete categories: {}", e);
            error_response(e)
        }
    }
}
