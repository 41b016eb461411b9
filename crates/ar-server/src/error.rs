use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Furniture not found")]
    FurnitureNotFound,

    #[error("Page not found")]
    PageNotFound,

    #[error("QR encoding failed: {0}")]
    QrEncode(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::FurnitureNotFound | AppError::PageNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::QrEncode(_) | AppError::PngEncode(_) => {
                log::error!("[server] {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate QR code".to_string(),
                )
            }
            AppError::Io(_) => {
                log::error!("[server] {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
