//! One-shot halftone API: upload an image, get the PNG back.

use axum::{
    extract::Multipart,
    http::StatusCode,
    response::Response,
};
use std::sync::Arc;

use super::{ApiError, api_error, decode_upload, png_response, read_multipart, render_png};

/// POST /api/halftone - Render an uploaded image in a single request.
///
/// Multipart fields: `image` (required), `cell_size`, `pattern`, `curve`,
/// `rotate`, `download`.
pub async fn render(multipart: Multipart) -> Result<Response, ApiError> {
    let (image, params) = read_multipart(multipart).await?;
    let bytes = image.ok_or((StatusCode::BAD_REQUEST, "No image field found".to_string()))?;

    // Reject bad parameters before paying for the decode
    let config = params.to_config().map_err(api_error)?;
    let raster = decode_upload(bytes).await?;

    tracing::info!(
        width = raster.width(),
        height = raster.height(),
        cell_size = config.cell_size,
        pattern = %config.pattern,
        "halftone request"
    );

    let png = render_png(Arc::new(raster), config).await?;
    Ok(png_response(png, params.download()))
}
