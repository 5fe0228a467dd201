//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, security header)
//! - Serve the landing page from the precomputed view
//! - Serve static resources
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::expansion::PageView;
use crate::http::request::{request_id, UuidRequestId};
use crate::observability::metrics;
use crate::render::PageRenderer;

/// Application state injected into handlers.
///
/// Everything is computed before the server starts and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub view: Arc<PageView>,
    pub renderer: Arc<PageRenderer>,
}

/// Body of `GET /healthz`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub shards: usize,
    pub tenants: usize,
}

/// HTTP server for the landing page.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server over an expanded page view.
    pub fn new(config: ServerConfig, view: Arc<PageView>, renderer: PageRenderer) -> Self {
        let state = AppState {
            view,
            renderer: Arc::new(renderer),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(index_handler))
            .route("/healthz", get(health_handler))
            .nest_service("/resources", ServeDir::new(&config.resources_dir))
            .fallback(index_handler)
            .with_state(state)
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// A clone of the router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            resources_dir = %self.config.resources_dir,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Render the landing page.
async fn index_handler(State(state): State<AppState>) -> Response {
    let start = Instant::now();

    match state.renderer.render_page(&state.view) {
        Ok(html) => {
            metrics::record_render(start);
            metrics::record_request("/", StatusCode::OK.as_u16());
            Html(html).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Template execution error");
            metrics::record_request("/", StatusCode::INTERNAL_SERVER_ERROR.as_u16());
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    metrics::record_request("/healthz", StatusCode::OK.as_u16());
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        shards: state.view.expanded_shards.len(),
        tenants: state.view.tenant_count(),
    })
}
