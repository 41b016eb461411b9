//! HTTP side of the AR furniture viewer.
//!
//! # Routes
//! - `GET /api/furniture`: the whole catalog as JSON
//! - `GET /api/furniture/{id}`: one entry, 404 JSON when unknown
//! - `GET /api/qr/{id}`: `{furnitureId, url, qrCode}` where `qrCode` is a PNG data URI
//!   for the viewer link `/ar/{id}`
//! - `GET /ar/{id}`: the viewer page for a known model
//! - `GET /` and `GET /qr-codes`: landing and printable QR pages
//! - anything else: static files from `PUBLIC_DIR` (the wasm bundle lives in `pkg/`),
//!   then a 404 JSON body; any other method on any path is also a 404 JSON body
//!
//! # Configuration
//! | Variable       | Default   |
//! |----------------|-----------|
//! | `PORT`         | `3000`    |
//! | `BIND_ADDR`    | `0.0.0.0` |
//! | `PUBLIC_DIR`   | `public`  |
//! | `CATALOG_PATH` | built-in catalog |
//!
//! Log verbosity follows `RUST_LOG` (default `info`).
use std::sync::Arc;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, HeaderName, HeaderValue},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer};

pub mod config;
pub mod error;
pub mod qr;
pub mod routes;
pub mod state;

use config::ServerConfig;
use routes::{
    furniture_handler, index_handler, list_furniture_handler, not_found_handler,
    qr_codes_page_handler, qr_handler, viewer_page_handler,
};
use state::AppState;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval' https://cdnjs.cloudflare.com https://aframe.io https://raw.githack.com https://cdn.jsdelivr.net; \
    script-src-attr 'unsafe-inline'; \
    style-src 'self' 'unsafe-inline'; \
    img-src 'self' data: https:; \
    connect-src 'self'; \
    media-src 'self' camera: microphone:; \
    object-src 'none'; \
    upgrade-insecure-requests";

pub fn app(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found_handler.into_service());

    Router::new()
        .route("/api/furniture", get(list_furniture_handler))
        .route("/api/furniture/{id}", get(furniture_handler))
        .route("/api/qr/{id}", get(qr_handler))
        .route("/ar/{id}", get(viewer_page_handler))
        .route("/", get(index_handler))
        .route("/qr-codes", get(qr_codes_page_handler))
        .fallback_service(static_files)
        .method_not_allowed_fallback(not_found_handler)
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static("same-origin"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cross-origin-resource-policy"),
            HeaderValue::from_static("same-origin"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("origin-agent-cluster"),
            HeaderValue::from_static("?1"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-permitted-cross-domain-policies"),
            HeaderValue::from_static("none"),
        ))
        .with_state(state)
}

pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    log::info!("[server] initializing state...");
    let state = AppState::new(config)?;

    let address = state.config.address();
    let listener = TcpListener::bind(&address).await?;
    log::info!("[server] AR furniture server running on {address}");
    log::info!("[server] QR codes page: http://localhost:{}/qr-codes", state.config.port);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("[server] shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => log::info!("[server] received Ctrl+C, shutting down"),
            Err(e) => {
                log::error!("[server] failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                log::info!("[server] received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("[server] failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
