// SPDX-License-Identifier: Apache-2.0

use crate::CRATE_NAME;
use axum::response::IntoResponse;
use axum::Json;
use catalyst_bridge_api::{openapi_spec, HealthResponse, VersionResponse};

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub(crate) async fn version_handler() -> impl IntoResponse {
    Json(VersionResponse {
        name: CRATE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub(crate) async fn openapi_handler() -> impl IntoResponse {
    Json(openapi_spec())
}
