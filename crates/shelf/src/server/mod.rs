//! # HTTP Server
//!
//! Exposes the catalog over JSON for the storefront pages and the admin dashboard.
//!
//! | Method | Path | Auth | Result |
//! |--------|------|------|--------|
//! | GET | `/api/products` | - | full catalog |
//! | GET | `/api/products/{category}` | - | products of one category |
//! | GET | `/api/categories` | - | category keys |
//! | POST | `/api/admin/login` | - | sets `admin_token` cookie |
//! | POST | `/api/admin/logout` | - | clears the cookie |
//! | GET | `/api/admin/products` | cookie | full catalog |
//! | POST | `/api/admin/products` | cookie | 201 `{success, product}` |
//! | DELETE | `/api/admin/products?category=&id=` | cookie | `{success}` or 404 |
//! | GET | `/api/admin/health` | cookie | doctor report + read diagnostics |
//!
//! The API sits behind a single mutex in [`state::AppState`], so concurrent admin
//! requests cannot interleave their load and persist steps. Store calls run on the
//! blocking thread pool, never on the async workers.

mod auth;
mod error;
mod products;
mod state;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use shelfapp::api::ShelfApi;
use shelfapp::config::ShelfConfig;
use shelfapp::store::fs::FileStore;
use state::{AppState, AuthSettings};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(products::list_catalog))
        .route("/api/products/{category}", get(products::list_category))
        .route("/api/categories", get(products::list_categories))
        .route("/api/admin/login", post(auth::login))
        .route("/api/admin/logout", post(auth::logout))
        .route(
            "/api/admin/products",
            get(products::admin_list)
                .post(products::create)
                .delete(products::delete),
        )
        .route("/api/admin/health", get(products::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Blocking entry point used by `shelf serve`.
pub fn run(
    api: ShelfApi<FileStore>,
    config: ShelfConfig,
    bind: Option<String>,
) -> anyhow::Result<()> {
    let addr = bind.unwrap_or_else(|| config.server.bind.clone());
    let auth = AuthSettings::from_config(&config.server);
    if auth.credentials.is_none() {
        tracing::warn!("ADMIN_USERNAME / ADMIN_PASSWORD not set; admin login is disabled");
    }
    let location = api.location();
    let state = AppState::new(api, auth);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!(
            addr = %listener.local_addr()?,
            catalog = %location.display(),
            "serving catalog"
        );
        axum::serve(listener, router(state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
