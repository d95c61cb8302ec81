// SPDX-License-Identifier: Apache-2.0

use crate::upstream::{self, bearer_headers};
use crate::{AppState, ProxyError};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalyst_bridge_api::{
    parse_policy_search_params, preview, PolicySearchParams, PolicySearchResponse,
};
use catalyst_bridge_model::{matched_container, normalize_policies, shape_keys, POLICY_CONTAINERS};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

pub(crate) const POLICY_API_VERSION: &str = "2";
pub(crate) const POLICY_SEARCH_FAILED: &str = "Policy search returned a non-success status.";

pub(crate) async fn policy_search_handler(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    let params = match parse_policy_search_params(&query) {
        Ok(params) => params,
        Err(err) => return ProxyError::from(err).into_response(),
    };
    match search_policies(&state, &params).await {
        Ok(found) => Json(found).into_response(),
        Err(ProxyError::Parse { message, body }) => {
            warn!(%message, "policy search response was not JSON");
            Json(PolicySearchResponse {
                error: Some(message),
                body: Some(body),
                ..PolicySearchResponse::default()
            })
            .into_response()
        }
        Err(err) => err.into_response(),
    }
}

#[instrument(name = "policy_search", skip(state, params), fields(date = %params.date))]
pub(crate) async fn search_policies(
    state: &AppState,
    params: &PolicySearchParams,
) -> Result<PolicySearchResponse, ProxyError> {
    let config = &state.config;
    let credential = config.credential()?;
    let url = config.policy_search_url()?;

    let token = state.tokens.acquire(&credential).await?;
    let body = json!({
        "impersonateID": config.impersonation.policy_search(),
        "language": "en",
        "searchvalue": params.date,
        "searchType": "ByPolicyEffectiveDate",
        "resultType": "Detailed",
    });
    let headers = bearer_headers(&token, POLICY_API_VERSION)?;
    let reply = upstream::post_json(config.upstream_timeout, &url, headers, &body).await?;
    info!(
        upstream_status = reply.status.as_u16(),
        body_len = reply.body.len(),
        "policy search answered"
    );

    if !reply.status.is_success() {
        return Err(ProxyError::Upstream {
            message: POLICY_SEARCH_FAILED.to_string(),
            status: reply.status.as_u16(),
            body: preview(&reply.body, config.error_preview_chars),
            hint: None,
            tried_url: None,
        });
    }

    let payload = reply.json().map_err(|e| ProxyError::Parse {
        message: format!("Could not parse policy search response: {e}."),
        body: preview(&reply.body, config.error_preview_chars),
    })?;
    let policies = normalize_policies(&payload);
    if policies.is_empty() {
        let (top_keys, data_keys) = shape_keys(&payload);
        info!(?top_keys, ?data_keys, "policy search returned no recognizable list");
    } else {
        info!(
            count = policies.len(),
            container = %matched_container(&payload, &POLICY_CONTAINERS).unwrap_or_default(),
            "policies normalized"
        );
    }
    Ok(PolicySearchResponse::found(policies))
}
