// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

/// Path to a list inside an upstream envelope. An empty path is the payload
/// itself.
pub type ContainerPath = &'static [&'static str];

/// Probe order for document search envelopes.
pub const DOCUMENT_CONTAINERS: [ContainerPath; 8] = [
    &[],
    &["data", "documents"],
    &["data", "data"],
    &["data", "results"],
    &["documents"],
    &["details"],
    &["data"],
    &["results"],
];

/// Probe order for policy search envelopes.
pub const POLICY_CONTAINERS: [ContainerPath; 8] = [
    &["details"],
    &["policies"],
    &["results"],
    &["items"],
    &["data"],
    &["data", "details"],
    &["data", "policies"],
    &[],
];

fn walk<'a>(payload: &'a Value, path: ContainerPath) -> Option<&'a Value> {
    path.iter()
        .try_fold(payload, |current, key| current.as_object()?.get(*key))
}

/// Returns the first non-empty array found along `paths`, or an empty slice.
#[must_use]
pub fn extract_list<'a>(payload: &'a Value, paths: &[ContainerPath]) -> &'a [Value] {
    paths
        .iter()
        .find_map(|path| match walk(payload, *path) {
            Some(Value::Array(items)) if !items.is_empty() => Some(items.as_slice()),
            _ => None,
        })
        .unwrap_or(&[])
}

/// The container path that produced the list, for diagnostics.
#[must_use]
pub fn matched_container(payload: &Value, paths: &[ContainerPath]) -> Option<String> {
    paths.iter().find_map(|path| match walk(payload, *path) {
        Some(Value::Array(items)) if !items.is_empty() => Some(if path.is_empty() {
            "$".to_string()
        } else {
            path.join(".")
        }),
        _ => None,
    })
}

/// Top-level keys of an object payload plus the keys of its `data` object.
#[must_use]
pub fn shape_keys(payload: &Value) -> (Vec<String>, Vec<String>) {
    let top = payload
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();
    let data = walk(payload, &["data"])
        .and_then(Value::as_object)
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();
    (top, data)
}
