//! Stored-image API for the slider workflow: upload once, re-render many times.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::{
    ApiError, HalftoneParams, api_error, decode_upload, png_response, read_multipart, render_png,
};
use crate::server::state::AppState;

/// Response from the upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

/// POST /api/images - Upload and decode an image, keeping it for re-rendering.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let (image, _) = read_multipart(multipart).await?;
    let bytes = image.ok_or((StatusCode::BAD_REQUEST, "No image field found".to_string()))?;
    let raster = decode_upload(bytes).await?;
    let (width, height) = raster.dimensions();

    let id = state.insert_image(raster).await;
    tracing::info!(%id, width, height, "stored upload");

    Ok(Json(UploadResponse {
        id: id.to_string(),
        width,
        height,
    }))
}

/// GET /api/images/:id/halftone - Render a stored image with the query's parameters.
pub async fn halftone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<HalftoneParams>,
) -> Result<Response, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid image ID".to_string()))?;
    let config = params.to_config().map_err(api_error)?;

    let image = state.image(&id).await.ok_or((
        StatusCode::NOT_FOUND,
        "Image not found or expired".to_string(),
    ))?;

    let png = render_png(image, config).await?;
    Ok(png_response(png, params.download()))
}
