// SPDX-License-Identifier: Apache-2.0

use catalyst_bridge_api::{
    map_error, DocumentsResponse, PolicySearchResponse, ProxyErrorKind, NO_DOCUMENTS_MESSAGE,
    PROXY_ERROR_SCHEMA_REF,
};
use serde_json::json;

#[test]
fn every_kind_maps_to_a_stable_status() {
    let mapped: Vec<(ProxyErrorKind, u16)> = ProxyErrorKind::ALL
        .iter()
        .map(|kind| (*kind, map_error(*kind).status_code))
        .collect();
    assert_eq!(
        mapped,
        vec![
            (ProxyErrorKind::InputValidation, 400),
            (ProxyErrorKind::Configuration, 500),
            (ProxyErrorKind::Auth, 502),
            (ProxyErrorKind::Upstream, 502),
            (ProxyErrorKind::Transport, 502),
            (ProxyErrorKind::Parse, 200),
        ]
    );
    assert!(ProxyErrorKind::ALL
        .iter()
        .all(|kind| map_error(*kind).schema_ref == PROXY_ERROR_SCHEMA_REF));
}

#[test]
fn empty_result_sets_carry_a_diagnostic_message() {
    let empty = serde_json::to_value(DocumentsResponse::found(Vec::new())).expect("json");
    assert_eq!(
        empty,
        json!({"documents": [], "message": NO_DOCUMENTS_MESSAGE})
    );

    let policies = serde_json::to_value(PolicySearchResponse::found(Vec::new())).expect("json");
    assert_eq!(policies["policies"], json!([]));
    assert!(policies["message"].is_string());
    assert!(policies.get("error").is_none());
}
