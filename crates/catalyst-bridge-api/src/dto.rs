// SPDX-License-Identifier: Apache-2.0

use catalyst_bridge_model::{PolicyDocumentRow, PolicyRecord};
use serde::{Deserialize, Serialize};

/// Body of `GET /documents`. On success only `documents` (and `message` when
/// empty) is set; the degraded 404 path adds `error`, `triedUrl` and `hint`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsResponse {
    pub documents: Vec<PolicyDocumentRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tried_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl DocumentsResponse {
    #[must_use]
    pub fn found(documents: Vec<PolicyDocumentRow>) -> Self {
        let message = documents
            .is_empty()
            .then(|| crate::NO_DOCUMENTS_MESSAGE.to_string());
        Self {
            documents,
            message,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySearchResponse {
    pub policies: Vec<PolicyRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl PolicySearchResponse {
    #[must_use]
    pub fn found(policies: Vec<PolicyRecord>) -> Self {
        let message = policies
            .is_empty()
            .then(|| crate::NO_POLICIES_MESSAGE.to_string());
        Self {
            policies,
            message,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
}
