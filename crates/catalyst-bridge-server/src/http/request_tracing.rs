// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::http::HeaderMap;
use std::sync::atomic::Ordering;

/// Incoming `x-request-id` when present, else `req-<16 hex>` from the
/// process-wide seed.
#[must_use]
pub(crate) fn extract_request_id(headers: &HeaderMap, state: &AppState) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| {
            let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
            format!("req-{id:016x}")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BridgeConfig;
    use axum::http::HeaderValue;

    #[test]
    fn propagates_incoming_request_id() {
        let state = AppState::new(BridgeConfig::default());
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static(" req-abc "));
        assert_eq!(extract_request_id(&headers, &state), "req-abc");
    }

    #[test]
    fn generates_sequential_ids_when_absent() {
        let state = AppState::new(BridgeConfig::default());
        let headers = HeaderMap::new();
        assert_eq!(extract_request_id(&headers, &state), "req-0000000000000001");
        assert_eq!(extract_request_id(&headers, &state), "req-0000000000000002");
    }
}
