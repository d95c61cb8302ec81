// SPDX-License-Identifier: Apache-2.0
#![forbid(unsafe_code)]

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod error;
mod http;
mod middleware;
mod token;
mod upstream;

pub use config::{
    validate_startup_config, AuthSettings, BridgeConfig, ImpersonationConfig, ServiceCredential,
    DEFAULT_BIND_ADDR, DEFAULT_DOCUMENTS_SEARCH_PATH, DEFAULT_DOWNLOAD_PATH,
    DEFAULT_IMPERSONATE_HEADER, DEFAULT_POLICY_SEARCH_PATH,
};
pub use error::ProxyError;
pub use token::{AccessToken, HttpTokenAcquirer, TokenProvider, TOKEN_MISSING, TOKEN_REQUEST_FAILED};

pub const CRATE_NAME: &str = "catalyst-bridge-server";

/// Shared per-process state. Holds no per-request data; every proxied call
/// acquires its own token through `tokens`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BridgeConfig>,
    pub tokens: Arc<dyn TokenProvider>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(config: BridgeConfig) -> Self {
        let tokens = Arc::new(HttpTokenAcquirer::new(config.upstream_timeout));
        Self::with_token_provider(config, tokens)
    }

    #[must_use]
    pub fn with_token_provider(config: BridgeConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            config: Arc::new(config),
            tokens,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/version", get(http::handlers::version_handler))
        .route("/openapi.json", get(http::handlers::openapi_handler))
        .route("/documents", get(http::documents::documents_handler))
        .route(
            "/documents/:id/download",
            get(http::download::download_handler),
        )
        .route(
            "/policies/search",
            get(http::policies::policy_search_handler),
        )
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .with_state(state)
}
