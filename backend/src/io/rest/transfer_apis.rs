//! # REST API for Import/Export
//!
//! The export body is accepted as-is by the import endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::{ImportRequest, ImportResponse};
use tracing::{error, info};

use crate::io::rest::mappers::transfer_mapper::TransferMapper;
use crate::io::rest::{error_response, rejection_response};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/export", get(export_data))
        .route("/import", post(import_data))
}

/// Dump every restaurant and category
pub async fn export_data(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/export");

    match state.transfer_service.export_all().await {
        Ok(export) => (StatusCode::OK, Json(TransferMapper::to_export_dto(export))).into_response(),
        Err(e) => {
            error!("Failed to export data: {}", e);
            error_response(e)
        }
    }
}

/// Replace all data with the posted restaurant list
pub async fn import_data(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    info!(
        "POST /api/import - {} entries",
        request.restaurants.as_ref().map_or(0, Vec::len)
    );

    let command = TransferMapper::to_import_command(request);
    match state.transfer_service.import_all(command).await {
        Ok(result) => (
            StatusCode::OK,
            Json(ImportResponse {
                imported: result.imported,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to import data: {}", e);
            error_response(e)
        }
    }
}
