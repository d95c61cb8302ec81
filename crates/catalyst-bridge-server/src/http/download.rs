// SPDX-License-Identifier: Apache-2.0

use crate::upstream::{self, bearer_headers, insert_impersonation};
use crate::{AppState, ProxyError};
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use catalyst_bridge_api::{
    download_failure_hint, parse_download_params, preview, resolve_disposition, DownloadParams,
    DEFAULT_CONTENT_TYPE,
};
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

pub(crate) async fn download_handler(
    State(state): State<AppState>,
    Path(doc_id): Path<String>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let params = match parse_download_params(&doc_id, &query) {
        Ok(params) => params,
        Err(err) => return ProxyError::from(err).into_response(),
    };
    match relay_document(&state, &params).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Streams the upstream body through untouched once the status is known to
/// be a success.
#[instrument(name = "document_download", skip(state, params), fields(doc_id = %params.doc_id))]
pub(crate) async fn relay_document(
    state: &AppState,
    params: &DownloadParams,
) -> Result<Response, ProxyError> {
    let config = &state.config;
    let credential = config.credential()?;
    let url = config.download_url(&params.doc_id)?;

    let token = state.tokens.acquire(&credential).await?;
    let mut headers = bearer_headers(&token, &config.download_api_version)?;
    insert_impersonation(
        &mut headers,
        &config.impersonation.header,
        config.impersonation.download(),
    )?;

    let upstream_response = upstream::client(config.upstream_timeout)?
        .get(url)
        .headers(headers)
        .send()
        .await
        .map_err(ProxyError::transport("document download request failed"))?;
    let status = upstream_response.status();
    info!(upstream_status = status.as_u16(), "document download answered");

    if !status.is_success() {
        let text = match upstream_response.text().await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "could not read failed download body");
                String::new()
            }
        };
        return Err(ProxyError::Upstream {
            message: format!("Document download failed: {}", status.as_u16()),
            status: status.as_u16(),
            body: preview(&text, config.error_preview_chars),
            hint: download_failure_hint(status.as_u16()).map(str::to_string),
            tried_url: None,
        });
    }

    let content_type = upstream_response
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    let disposition = match upstream_response.headers().get(CONTENT_DISPOSITION) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => HeaderValue::from_str(&resolve_disposition(
            None,
            params.filename.as_deref(),
            &params.doc_id,
        ))
        .map_err(|_| {
            ProxyError::InputValidation("filename is not usable in a Content-Disposition header".to_string())
        })?,
    };

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, content_type), (CONTENT_DISPOSITION, disposition)],
        Body::from_stream(upstream_response.bytes_stream()),
    )
        .into_response())
}
