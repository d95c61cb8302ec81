// SPDX-License-Identifier: Apache-2.0

use crate::ProxyErrorEnvelope;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamError {
    pub parameter: &'static str,
    pub message: String,
}

impl ParamError {
    #[must_use]
    pub fn to_envelope(&self) -> ProxyErrorEnvelope {
        ProxyErrorEnvelope::new(self.message.clone())
    }
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParamError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentsParams {
    pub policy_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySearchParams {
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadParams {
    pub doc_id: String,
    pub filename: Option<String>,
}

fn required<'a>(query: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    query
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

pub fn parse_documents_params(
    query: &BTreeMap<String, String>,
) -> Result<DocumentsParams, ParamError> {
    let policy_number = required(query, "policyNumber").ok_or_else(|| ParamError {
        parameter: "policyNumber",
        message: "Missing required query parameter 'policyNumber'".to_string(),
    })?;
    Ok(DocumentsParams {
        policy_number: policy_number.to_string(),
    })
}

pub fn parse_policy_search_params(
    query: &BTreeMap<String, String>,
) -> Result<PolicySearchParams, ParamError> {
    let date = required(query, "date").ok_or_else(|| ParamError {
        parameter: "date",
        message: "Missing required query parameter 'date' (YYYY-MM-DD)".to_string(),
    })?;
    Ok(PolicySearchParams {
        date: date.to_string(),
    })
}

/// `doc_id` comes from the path, `filename` from the query string. A blank
/// filename counts as absent.
pub fn parse_download_params(
    doc_id: &str,
    query: &BTreeMap<String, String>,
) -> Result<DownloadParams, ParamError> {
    if doc_id.trim().is_empty() {
        return Err(ParamError {
            parameter: "docId",
            message: "Missing docId".to_string(),
        });
    }
    Ok(DownloadParams {
        doc_id: doc_id.to_string(),
        filename: required(query, "filename").map(str::to_string),
    })
}
