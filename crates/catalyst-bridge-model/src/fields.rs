// SPDX-License-Identifier: Apache-2.0

use crate::raw::RawRecord;

/// Ordered synonym list for one target attribute. The first candidate that
/// holds a defined value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub target: &'static str,
    pub candidates: &'static [&'static str],
}

impl FieldSpec {
    #[must_use]
    pub const fn new(target: &'static str, candidates: &'static [&'static str]) -> Self {
        Self { target, candidates }
    }

    #[must_use]
    pub fn resolve(&self, record: &RawRecord) -> Option<String> {
        record.first_text(self.candidates)
    }

    #[must_use]
    pub fn resolve_or_empty(&self, record: &RawRecord) -> String {
        record.text_or_empty(self.candidates)
    }

    /// Candidate that matched, for diagnostics.
    #[must_use]
    pub fn matched_candidate(&self, record: &RawRecord) -> Option<&'static str> {
        self.candidates
            .iter()
            .copied()
            .find(|path| record.get(path).is_some())
    }
}

pub mod document {
    use super::FieldSpec;

    pub const ID: FieldSpec = FieldSpec::new("id", &["id", "documentId", "DocumentId"]);
    pub const CREATED_ON: FieldSpec = FieldSpec::new(
        "createdOn",
        &["createdOn", "createdDate", "created_on", "CreatedOn"],
    );
    pub const CREATED_BY: FieldSpec = FieldSpec::new(
        "createdBy",
        &["createdBy", "createdByUser", "created_by", "CreatedBy"],
    );
    pub const TYPE: FieldSpec = FieldSpec::new("type", &["type", "documentType", "Type"]);
    pub const TRANSACTION: FieldSpec = FieldSpec::new(
        "transaction",
        &["transaction", "transactionCode", "Transaction"],
    );
    pub const KIT_ID: FieldSpec = FieldSpec::new("kitId", &["kitId", "kitID", "KitId", "kit_id"]);
    pub const DOCUMENT_NAME: FieldSpec = FieldSpec::new(
        "documentName",
        &["documentName", "name", "fileName", "DocumentName"],
    );
    pub const EFFECTIVE_DATE: FieldSpec = FieldSpec::new(
        "effectiveDate",
        &["effectiveDate", "effective_date", "EffectiveDate"],
    );

    pub const ALL: [FieldSpec; 8] = [
        ID,
        CREATED_ON,
        CREATED_BY,
        TYPE,
        TRANSACTION,
        KIT_ID,
        DOCUMENT_NAME,
        EFFECTIVE_DATE,
    ];
}

pub mod policy {
    use super::FieldSpec;

    pub const POLICY_NUMBER: FieldSpec = FieldSpec::new(
        "policyNumber",
        &["basicInfo.policyNumber", "policyNumber"],
    );
    pub const DATE_EFFECTIVE: FieldSpec = FieldSpec::new(
        "dateEffective",
        &[
            "basicInfo.effectiveDate",
            "basicInfo.effective",
            "dateEffective",
            "effectiveDate",
        ],
    );
    pub const ID: FieldSpec =
        FieldSpec::new("id", &["id", "basicInfo.policyNumber", "policyNumber"]);
    pub const CUSTOMER_NAME: FieldSpec = FieldSpec::new("customerName", &["customerName"]);
    pub const PRODUCT_NAME: FieldSpec =
        FieldSpec::new("productName", &["basicInfo.productName", "productName"]);
    pub const STATUS: FieldSpec = FieldSpec::new("status", &["basicInfo.status", "status"]);
    pub const FIRST_NAME: FieldSpec = FieldSpec::new("firstName", &["people.0.firstName"]);
    pub const LAST_NAME: FieldSpec = FieldSpec::new("lastName", &["people.0.lastName"]);
}

pub mod transaction {
    use super::FieldSpec;

    pub const TRANSACTION_ID: FieldSpec =
        FieldSpec::new("transactionId", &["transactionId", "TransactionId", "id"]);
    pub const CODE: FieldSpec = FieldSpec::new("code", &["code", "transactionCode", "Code"]);
    pub const OPERATOR: FieldSpec = FieldSpec::new("operator", &["operator", "Operator"]);
    pub const CURRENCY: FieldSpec = FieldSpec::new("currency", &["currency.id", "currencyId"]);
    pub const CREATED_DATE: FieldSpec = FieldSpec::new(
        "createdDate",
        &["createdDate", "createdOn", "created_date", "CreatedDate"],
    );
    pub const EFFECTIVE_DATE: FieldSpec = FieldSpec::new(
        "effectiveDate",
        &["effectiveDate", "effective_date", "EffectiveDate"],
    );
    pub const AMOUNT: FieldSpec = FieldSpec::new("amount", &["amount", "Amount"]);
    pub const CHARGE: FieldSpec = FieldSpec::new("charge", &["charge", "Charge"]);
    pub const TAX: FieldSpec = FieldSpec::new("tax", &["tax", "Tax"]);
    pub const REASON: FieldSpec = FieldSpec::new(
        "reason",
        &["reason.label", "notes", "transactionDescription"],
    );
}

pub mod invoice {
    use super::FieldSpec;

    pub const INVOICE_ID: FieldSpec =
        FieldSpec::new("invoiceId", &["invoiceId", "InvoiceId", "id"]);
    pub const STATUS: FieldSpec = FieldSpec::new("status", &["status", "Status"]);
    pub const INSTALLMENT_BEGIN: FieldSpec =
        FieldSpec::new("installmentBegin", &["installmentBegin"]);
    pub const INSTALLMENT_END: FieldSpec = FieldSpec::new("installmentEnd", &["installmentEnd"]);
    pub const AMOUNT: FieldSpec = FieldSpec::new("amount", &["amount", "Amount"]);
    pub const CHARGE: FieldSpec = FieldSpec::new("charge", &["charge", "Charge"]);
    pub const TAX: FieldSpec = FieldSpec::new("tax", &["tax", "Tax"]);
    pub const CURRENCY: FieldSpec = FieldSpec::new("currency", &["currency.id", "currencyId"]);
    pub const REASON: FieldSpec = FieldSpec::new("reason", &["reason.label"]);
    pub const PAID_DATE: FieldSpec = FieldSpec::new("paidDate", &["paidDate"]);
    pub const PROCESSED_DATE: FieldSpec =
        FieldSpec::new("processedDate", &["processedDate", "billedOn"]);
}

pub mod coverage {
    use super::FieldSpec;

    pub const VARIANT_NAME: FieldSpec =
        FieldSpec::new("variantName", &["coverageVariantDesc"]);
    pub const CODE: FieldSpec = FieldSpec::new(
        "code",
        &[
            "stdCoverage.stdCoverageCode",
            "coverageVariantId",
            "coverageCode",
            "coverageCodes",
            "code",
        ],
    );
    pub const DEDUCTIBLE_MAIN: FieldSpec = FieldSpec::new(
        "deductibleMain",
        &[
            "coverageVariantLevel.insuredLevel.deductible.amount",
            "deductibleMainInsured",
            "deductible",
        ],
    );
    pub const LIMIT_MAIN: FieldSpec = FieldSpec::new(
        "limitMain",
        &[
            "sumInsured",
            "coverageVariantLevel.insuredLevel.limit.maxAmount",
            "limitMainInsured",
            "limit",
        ],
    );
    pub const DEDUCTIBLE_CHILD: FieldSpec =
        FieldSpec::new("deductibleChild", &["deductibleChild"]);
    pub const LIMIT_CHILD: FieldSpec = FieldSpec::new("limitChild", &["limitChild"]);
}

pub mod beneficiary {
    use super::FieldSpec;

    pub const NAME: FieldSpec = FieldSpec::new("name", &["name"]);
    pub const LABEL: FieldSpec = FieldSpec::new("label", &["label"]);
    pub const RELATIONSHIP: FieldSpec = FieldSpec::new(
        "relationship",
        &[
            "relationShipToIns.label",
            "relationShipToIns.id",
            "relationship",
        ],
    );
    pub const PRIORITY: FieldSpec = FieldSpec::new("priority", &["priorityLevel", "priority"]);
    pub const PERCENTAGE: FieldSpec = FieldSpec::new("percentage", &["percentage"]);
    pub const EMAIL: FieldSpec = FieldSpec::new("email", &["email"]);
    pub const PHONE: FieldSpec = FieldSpec::new("phone", &["phone"]);
}
