// SPDX-License-Identifier: Apache-2.0

use crate::upstream::{self, bearer_headers};
use crate::{AppState, ProxyError};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalyst_bridge_api::{
    documents_error_message, parse_documents_params, preview, DocumentsParams, DocumentsResponse,
    DOCUMENTS_NOT_FOUND_HINT,
};
use catalyst_bridge_model::{matched_container, normalize_documents, shape_keys, DOCUMENT_CONTAINERS};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};
use uuid::Uuid;

pub(crate) const DOCUMENTS_API_VERSION: &str = "2";

pub(crate) async fn documents_handler(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let params = match parse_documents_params(&query) {
        Ok(params) => params,
        Err(err) => return ProxyError::from(err).into_response(),
    };
    match search_documents(&state, &params).await {
        Ok(found) => Json(found).into_response(),
        Err(ProxyError::Upstream {
            message,
            status: 404,
            hint,
            tried_url,
            ..
        }) => {
            warn!(upstream_status = 404, "document search path not found upstream");
            Json(DocumentsResponse {
                error: Some(message),
                tried_url,
                hint,
                ..DocumentsResponse::default()
            })
            .into_response()
        }
        Err(ProxyError::Parse { message, .. }) => {
            warn!(%message, "document search response was not JSON");
            Json(DocumentsResponse {
                error: Some(message),
                ..DocumentsResponse::default()
            })
            .into_response()
        }
        Err(err) => err.into_response(),
    }
}

#[instrument(name = "documents_search", skip(state, params), fields(policy_number = %params.policy_number))]
pub(crate) async fn search_documents(
    state: &AppState,
    params: &DocumentsParams,
) -> Result<DocumentsResponse, ProxyError> {
    let config = &state.config;
    let credential = config.credential()?;
    let Some(url) = config.documents_search_url() else {
        info!("document search is not configured; returning no documents");
        return Ok(DocumentsResponse::default());
    };

    let token = state.tokens.acquire(&credential).await?;
    let body = json!({
        "requestId": Uuid::new_v4().to_string(),
        "impersonateId": config.impersonation.documents(),
        "data": {
            "context": [{"key": "POLICY", "value": params.policy_number}]
        }
    });
    let headers = bearer_headers(&token, DOCUMENTS_API_VERSION)?;
    let reply = upstream::post_json(config.upstream_timeout, &url, headers, &body).await?;
    info!(
        upstream_status = reply.status.as_u16(),
        body_len = reply.body.len(),
        "document search answered"
    );

    if !reply.status.is_success() {
        let status = reply.status.as_u16();
        let not_found = status == 404;
        return Err(ProxyError::Upstream {
            message: documents_error_message(
                status,
                reply.reason(),
                &reply.body,
                config.documents_error_preview_chars,
            ),
            status,
            body: preview(&reply.body, config.error_preview_chars),
            hint: not_found.then(|| DOCUMENTS_NOT_FOUND_HINT.to_string()),
            tried_url: not_found.then_some(url),
        });
    }

    let payload = reply.json().map_err(|e| ProxyError::Parse {
        message: format!("Could not parse documents response: {e}. Check server logs."),
        body: preview(&reply.body, config.error_preview_chars),
    })?;
    let documents = normalize_documents(&payload);
    if documents.is_empty() {
        let (top_keys, data_keys) = shape_keys(&payload);
        info!(?top_keys, ?data_keys, "document search returned no recognizable list");
    } else {
        info!(
            count = documents.len(),
            container = %matched_container(&payload, &DOCUMENT_CONTAINERS).unwrap_or_default(),
            "documents normalized"
        );
    }
    Ok(DocumentsResponse::found(documents))
}
