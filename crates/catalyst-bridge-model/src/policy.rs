// SPDX-License-Identifier: Apache-2.0

use crate::billing::{normalize_invoices, normalize_transactions, InvoiceRow, TransactionRow};
use crate::coverage::{collect_beneficiaries, group_coverages, BeneficiaryRow, CoverageGroup};
use crate::extract::{extract_list, POLICY_CONTAINERS};
use crate::fields::policy;
use crate::raw::RawRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_CUSTOMER: &str = "Unknown customer";
pub const UNKNOWN: &str = "Unknown";

/// One row of the policy results table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    pub id: String,
    pub policy_number: String,
    pub date_effective: String,
    pub customer_name: String,
    pub product_name: String,
    pub status: String,
}

impl PolicySummary {
    /// `index` is the record's position in the search result and only feeds
    /// the synthesized id when upstream carries none.
    #[must_use]
    pub fn from_record(record: &RawRecord, index: usize) -> Self {
        let customer_name = policy::CUSTOMER_NAME
            .resolve(record)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .or_else(|| {
                let full = format!(
                    "{} {}",
                    policy::FIRST_NAME.resolve_or_empty(record),
                    policy::LAST_NAME.resolve_or_empty(record)
                );
                let full = full.trim();
                (!full.is_empty()).then(|| full.to_string())
            })
            .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string());

        Self {
            id: policy::ID
                .resolve(record)
                .unwrap_or_else(|| format!("uat-{index}")),
            policy_number: policy::POLICY_NUMBER.resolve_or_empty(record),
            date_effective: policy::DATE_EFFECTIVE.resolve_or_empty(record),
            customer_name,
            product_name: policy::PRODUCT_NAME
                .resolve(record)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            status: policy::STATUS
                .resolve(record)
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// A detailed policy search hit: the summary row plus the tabs of the detail
/// view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    #[serde(flatten)]
    pub summary: PolicySummary,
    pub transactions: Vec<TransactionRow>,
    pub invoices: Vec<InvoiceRow>,
    pub coverages: Vec<CoverageGroup>,
    pub beneficiaries: Vec<BeneficiaryRow>,
}

impl PolicyRecord {
    #[must_use]
    pub fn from_record(record: &RawRecord, index: usize) -> Self {
        let insureds = record.array("insureds");
        Self {
            summary: PolicySummary::from_record(record, index),
            transactions: normalize_transactions(record.array("transactions")),
            invoices: normalize_invoices(record.array("invoices")),
            coverages: group_coverages(insureds),
            beneficiaries: collect_beneficiaries(insureds),
        }
    }
}

#[must_use]
pub fn normalize_policies(payload: &Value) -> Vec<PolicyRecord> {
    extract_list(payload, &POLICY_CONTAINERS)
        .iter()
        .enumerate()
        .map(|(index, item)| PolicyRecord::from_record(&RawRecord::from_value(item), index))
        .collect()
}
