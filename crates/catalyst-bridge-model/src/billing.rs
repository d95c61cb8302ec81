// SPDX-License-Identifier: Apache-2.0

use crate::fields::{invoice, transaction};
use crate::raw::RawRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Reverse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    pub transaction_id: String,
    pub code: String,
    pub operator: String,
    pub currency: String,
    pub created_date: String,
    pub effective_date: String,
    pub amount: String,
    pub charge: String,
    pub tax: String,
    pub reason: String,
}

impl TransactionRow {
    #[must_use]
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            transaction_id: transaction::TRANSACTION_ID.resolve_or_empty(record),
            code: transaction::CODE.resolve_or_empty(record),
            operator: transaction::OPERATOR.resolve_or_empty(record),
            currency: transaction::CURRENCY.resolve_or_empty(record),
            created_date: transaction::CREATED_DATE.resolve_or_empty(record),
            effective_date: transaction::EFFECTIVE_DATE.resolve_or_empty(record),
            amount: transaction::AMOUNT.resolve_or_empty(record),
            charge: transaction::CHARGE.resolve_or_empty(record),
            tax: transaction::TAX.resolve_or_empty(record),
            reason: transaction::REASON.resolve_or_empty(record),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub invoice_id: String,
    pub status: String,
    pub installment_begin: String,
    pub installment_end: String,
    pub amount: String,
    pub charge: String,
    pub tax: String,
    pub currency: String,
    pub reason: String,
    pub paid_date: String,
    pub processed_date: String,
}

impl InvoiceRow {
    #[must_use]
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            invoice_id: invoice::INVOICE_ID.resolve_or_empty(record),
            status: invoice::STATUS.resolve_or_empty(record),
            installment_begin: invoice::INSTALLMENT_BEGIN.resolve_or_empty(record),
            installment_end: invoice::INSTALLMENT_END.resolve_or_empty(record),
            amount: invoice::AMOUNT.resolve_or_empty(record),
            charge: invoice::CHARGE.resolve_or_empty(record),
            tax: invoice::TAX.resolve_or_empty(record),
            currency: invoice::CURRENCY.resolve_or_empty(record),
            reason: invoice::REASON.resolve_or_empty(record),
            paid_date: invoice::PAID_DATE.resolve_or_empty(record),
            processed_date: invoice::PROCESSED_DATE.resolve_or_empty(record),
        }
    }
}

/// Millisecond sort key for an upstream date string. Blank or unparseable
/// values map to `0` so they sort after every real date.
#[must_use]
pub fn sort_timestamp(value: &str) -> i64 {
    let value = value.trim();
    if value.is_empty() {
        return 0;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.timestamp_millis();
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return dt.and_utc().timestamp_millis();
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(0, |dt| dt.and_utc().timestamp_millis())
}

/// Transactions, newest `createdDate` first.
#[must_use]
pub fn normalize_transactions(items: &[Value]) -> Vec<TransactionRow> {
    let mut rows: Vec<TransactionRow> = items
        .iter()
        .map(|item| TransactionRow::from_record(&RawRecord::from_value(item)))
        .collect();
    rows.sort_by_key(|row| Reverse(sort_timestamp(&row.created_date)));
    rows
}

/// Invoices, newest processed/billed date first.
#[must_use]
pub fn normalize_invoices(items: &[Value]) -> Vec<InvoiceRow> {
    let mut rows: Vec<InvoiceRow> = items
        .iter()
        .map(|item| InvoiceRow::from_record(&RawRecord::from_value(item)))
        .collect();
    rows.sort_by_key(|row| Reverse(sort_timestamp(&row.processed_date)));
    rows
}
