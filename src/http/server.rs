//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, CORS, timeout, body limit,
//!   metrics)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::ProductRepository;
use crate::config::AppConfig;
use crate::http::cors::cors_layer;
use crate::http::request::{request_span, MakeRequestUuidV4};
use crate::http::{categories, products, root};
use crate::observability::metrics::track_metrics;
use crate::store::DocumentStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductRepository,
}

/// HTTP server for the catalog API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over an already opened store.
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        let state = AppState {
            products: ProductRepository::new(store),
        };
        let router = build_router(&config, state);
        Self { router }
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &AppConfig, state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/v1/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/v1/products/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/v1/products/{id}",
            get(products::show_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/api/v1/categories", get(categories::get_categories))
        .route("/api/v1/categories/", get(categories::get_categories))
        .route("/", get(root::welcome))
        .route("/health", get(root::health))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state);

    api.layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(cors_layer(&config.cors))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
}
