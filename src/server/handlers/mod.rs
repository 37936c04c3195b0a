//! HTTP handlers for the server.

pub mod halftone;
pub mod images;
pub mod patterns;

use axum::{
    extract::Multipart,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    codec,
    error::HalftoneError,
    raster::Raster,
    render::{self, MarkStyle, RenderConfig},
};

/// Error returned by every handler: status plus a plain-text message.
pub type ApiError = (StatusCode, String);

/// Map a library error onto an HTTP status.
pub fn api_error(err: HalftoneError) -> ApiError {
    let status = match err {
        HalftoneError::InvalidConfig(_) | HalftoneError::Image(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::BAD_REQUEST {
        tracing::warn!(error = %err, "rejected request");
    }
    (status, err.to_string())
}

/// Render parameters shared by the multipart and query-string endpoints.
///
/// Everything arrives as text so that browser form values ("on", "1") are
/// accepted alongside "true".
#[derive(Debug, Default, Deserialize)]
pub struct HalftoneParams {
    pub cell_size: Option<String>,
    pub pattern: Option<String>,
    pub curve: Option<String>,
    pub rotate: Option<String>,
    pub download: Option<String>,
}

impl HalftoneParams {
    /// Record a multipart text field. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        let slot = match name {
            "cell_size" => &mut self.cell_size,
            "pattern" => &mut self.pattern,
            "curve" => &mut self.curve,
            "rotate" => &mut self.rotate,
            "download" => &mut self.download,
            _ => return,
        };
        *slot = Some(value);
    }

    pub fn to_config(&self) -> Result<RenderConfig, HalftoneError> {
        let mut config = RenderConfig::default();
        if let Some(cell_size) = non_empty(&self.cell_size) {
            config.cell_size = cell_size.parse().map_err(|_| {
                HalftoneError::InvalidConfig(format!("invalid cell_size '{}'", cell_size))
            })?;
        }
        if let Some(pattern) = non_empty(&self.pattern) {
            config.pattern = pattern.parse()?;
        }
        if let Some(curve) = non_empty(&self.curve) {
            config.curve = curve.parse()?;
        }
        if parse_flag(self.rotate.as_deref()) {
            config.style = MarkStyle::Rotated;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn download(&self) -> bool {
        parse_flag(self.download.as_deref())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Interpret a form/query flag.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "on" | "yes")
    )
}

/// Split a multipart body into the `image` bytes and the render parameters.
pub async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(Option<Vec<u8>>, HalftoneParams), ApiError> {
    let mut image = None;
    let mut params = HalftoneParams::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read image: {}", e)))?;
            image = Some(bytes.to_vec());
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read {}: {}", name, e)))?;
            params.set(&name, value);
        }
    }

    Ok((image, params))
}

/// Decode upload bytes off the async runtime.
pub async fn decode_upload(bytes: Vec<u8>) -> Result<Raster, ApiError> {
    tokio::task::spawn_blocking(move || codec::decode(&bytes))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Processing error: {}", e),
            )
        })?
        .map_err(api_error)
}

/// Render and PNG-encode on the blocking thread pool.
pub async fn render_png(image: Arc<Raster>, config: RenderConfig) -> Result<Vec<u8>, ApiError> {
    tokio::task::spawn_blocking(move || {
        let output = render::render_parallel(&image, &config)?;
        codec::encode_png(&output)
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Processing error: {}", e),
        )
    })?
    .map_err(api_error)
}

/// Wrap PNG bytes in a response, optionally as a file download.
pub fn png_response(png: Vec<u8>, download: bool) -> Response {
    let mut response = ([(header::CONTENT_TYPE, "image/png")], png).into_response();
    if download {
        response.headers_mut().insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"halftone.png\""),
        );
    }
    response
}
