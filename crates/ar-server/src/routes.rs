use std::sync::Arc;

use ar_core::CatalogEntry;
use axum::{
    extract::{Path, State},
    http::{header::HOST, HeaderMap},
    response::Html,
    Json,
};
use serde::Serialize;

use crate::{error::AppError, qr, state::AppState};

const VIEWER_PAGE: &str = "ar.html";
const INDEX_PAGE: &str = "index.html";
const QR_CODES_PAGE: &str = "qr-codes.html";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QrResponse {
    pub furniture_id: String,
    pub url: String,
    pub qr_code: String,
}

pub async fn list_furniture_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<CatalogEntry>> {
    Json(state.catalog.entries().to_vec())
}

pub async fn furniture_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CatalogEntry>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::FurnitureNotFound)
}

pub async fn qr_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<QrResponse>, AppError> {
    if !state.catalog.contains(&id) {
        return Err(AppError::FurnitureNotFound);
    }

    let fallback_host = format!("localhost:{}", state.config.port);
    let url = viewer_url(&headers, &fallback_host, &id);
    let qr_code = qr::share_qr_data_uri(&url)?;
    log::info!("[server] QR generated for {}", url);

    Ok(Json(QrResponse {
        furniture_id: id,
        url,
        qr_code,
    }))
}

pub async fn viewer_page_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    if !state.catalog.contains(&id) {
        return Err(AppError::FurnitureNotFound);
    }
    page(&state, VIEWER_PAGE).await
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    page(&state, INDEX_PAGE).await
}

pub async fn qr_codes_page_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    page(&state, QR_CODES_PAGE).await
}

pub async fn not_found_handler() -> AppError {
    AppError::PageNotFound
}

async fn page(state: &AppState, name: &str) -> Result<Html<String>, AppError> {
    let path = state.config.public_dir.join(name);
    Ok(Html(tokio::fs::read_to_string(path).await?))
}

/// Absolute link to the viewer page for `id`, as seen by the requesting client.
pub fn viewer_url(headers: &HeaderMap, fallback_host: &str, id: &str) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http");
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(fallback_host);
    format!("{scheme}://{host}/ar/{id}")
}
