// SPDX-License-Identifier: Apache-2.0
#![forbid(unsafe_code)]
//! Tolerant normalization of Catalyst policy and document payloads.
//!
//! Upstream records arrive in several casings and nestings. Everything here
//! is total: missing attributes become empty strings, never errors.

mod billing;
mod coverage;
mod document;
mod extract;
pub mod fields;
mod policy;
mod raw;

pub use billing::{
    normalize_invoices, normalize_transactions, sort_timestamp, InvoiceRow, TransactionRow,
};
pub use coverage::{
    collect_beneficiaries, contact_detail, group_coverages, insured_label, BeneficiaryRow,
    CoverageGroup, CoverageRow,
};
pub use document::{normalize_documents, PolicyDocumentRow};
pub use extract::{
    extract_list, matched_container, shape_keys, ContainerPath, DOCUMENT_CONTAINERS,
    POLICY_CONTAINERS,
};
pub use fields::FieldSpec;
pub use policy::{normalize_policies, PolicyRecord, PolicySummary, UNKNOWN, UNKNOWN_CUSTOMER};
pub use raw::{value_text, RawRecord};

pub const CRATE_NAME: &str = "catalyst-bridge-model";
