// SPDX-License-Identifier: Apache-2.0

use crate::extract::{extract_list, DOCUMENT_CONTAINERS};
use crate::fields::document;
use crate::raw::RawRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Policy document row as shown in the documents tab. Every field is total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocumentRow {
    pub id: String,
    pub created_on: String,
    pub created_by: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub transaction: String,
    pub kit_id: String,
    pub document_name: String,
    pub effective_date: String,
}

impl PolicyDocumentRow {
    #[must_use]
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            id: document::ID.resolve_or_empty(record),
            created_on: document::CREATED_ON.resolve_or_empty(record),
            created_by: document::CREATED_BY.resolve_or_empty(record),
            kind: document::TYPE.resolve_or_empty(record),
            transaction: document::TRANSACTION.resolve_or_empty(record),
            kit_id: document::KIT_ID.resolve_or_empty(record),
            document_name: document::DOCUMENT_NAME.resolve_or_empty(record),
            effective_date: document::EFFECTIVE_DATE.resolve_or_empty(record),
        }
    }
}

#[must_use]
pub fn normalize_documents(payload: &Value) -> Vec<PolicyDocumentRow> {
    extract_list(payload, &DOCUMENT_CONTAINERS)
        .iter()
        .map(|item| PolicyDocumentRow::from_record(&RawRecord::from_value(item)))
        .collect()
}
