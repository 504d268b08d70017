//! # REST API for Restaurants
//!
//! Endpoints for listing, adding, editing and deleting restaurants.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use shared::{CreateRestaurantRequest, DeletedResponse, SuccessResponse, UpdateRestaurantRequest};
use tracing::{error, info};

use crate::io::rest::mappers::restaurant_mapper::RestaurantMapper;
use crate::io::rest::{error_response, rejection_response};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/restaurants",
            get(list_restaurants)
                .post(create_restaurant)
                .delete(delete_all_restaurants),
        )
        .route(
            "/restaurants/:id",
            put(update_restaurant).delete(delete_restaurant),
        )
}

/// List all restaurants
pub async fn list_restaurants(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/restaurants");

    match state.restaurant_service.list_restaurants().await {
        Ok(restaurants) => (StatusCode::OK, Json(RestaurantMapper::to_dto_list(restaurants))).into_response(),
        Err(e) => {
            error!("Failed to list restaurants: {}", e);
            error_response(e)
        }
    }
}

/// Add a restaurant
pub async fn create_restaurant(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    info!("POST /api/restaurants - request: {:?}", request);

    let command = RestaurantMapper::to_add_command(request);
    match state.restaurant_service.add_restaurant(command).await {
        Ok(restaurant) => (StatusCode::CREATED, Json(RestaurantMapper::to_dto(restaurant))).into_response(),
        Err(e) => {
            error!("Failed to add restaurant: {}", e);
            error_response(e)
        }
    }
}

/// Edit a restaurant
pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
    payload: Result<Json<UpdateRestaurantRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    info!("PUT /api/restaurants/{} - request: {:?}", restaurant_id, request);

    let command = RestaurantMapper::to_update_command(restaurant_id, request);
    match state.restaurant_service.update_restaurant(command).await {
        Ok(restaurant) => (StatusCode::OK, Json(RestaurantMapper::to_dto(restaurant))).into_response(),
        Err(e) => {
            error!("Failed to update restaurant: {}", e);
            error_response(e)
        }
    }
}

/// Delete a restaurant (and its category if it was the last one)
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/restaurants/{}", restaurant_id);

    match state.restaurant_service.delete_restaurant(restaurant_id).await {
        Ok(result) => {
            if let Some(category_id) = result.removed_category_id {
                info!(
                    "Restaurant {} was the last in category {}",
                    result.deleted.name, category_id
                );
            }
            (StatusCode::OK, Json(SuccessResponse { success: true })).into_response()
        }
        Err(e) => {
            error!("Failed to delete restaurant: {}", e);
            error_response(e)
        }
    }
}

/// Delete every restaurant and category
pub async fn delete_all_restaurants(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/restaurants");

    match state.restaurant_service.delete_all_restaurants().await {
        Ok(deleted) => (StatusCode::OK, Json(DeletedResponse { deleted })).into_response(),
        Err(e) => {
            error!("Failed to delete all restaurants: {}", e);
            error_response(e)
        }
    }
}
