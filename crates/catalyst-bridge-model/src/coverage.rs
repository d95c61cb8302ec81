// SPDX-License-Identifier: Apache-2.0

use crate::fields::{beneficiary, coverage};
use crate::raw::RawRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageRow {
    pub insured: String,
    pub code: String,
    pub deductible_main: String,
    pub limit_main: String,
    pub deductible_child: String,
    pub limit_child: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageGroup {
    pub variant_name: String,
    pub rows: Vec<CoverageRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryRow {
    pub insured: String,
    pub coverage: String,
    pub name: String,
    pub relationship: String,
    pub priority: String,
    pub percentage: String,
    pub email: String,
    pub phone: String,
}

/// Display label for an insured: joined first/last name, else its type.
#[must_use]
pub fn insured_label(insured: &RawRecord) -> String {
    let name = joined_name(insured);
    if name.is_empty() {
        insured.text_or_empty(&["insuredType"])
    } else {
        name
    }
}

fn joined_name(record: &RawRecord) -> String {
    [record.first_text(&["firstName"]), record.first_text(&["lastName"])]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `detail` of the first `contactDetails` entry whose type matches
/// case-insensitively.
#[must_use]
pub fn contact_detail(record: &RawRecord, kind: &str) -> Option<String> {
    record
        .array("contactDetails")
        .iter()
        .map(RawRecord::from_value)
        .find(|c| c.text_or_empty(&["type"]).eq_ignore_ascii_case(kind))
        .and_then(|c| c.first_text(&["detail"]))
}

/// Coverage rows across all insureds grouped by variant name, groups in
/// first-seen order.
#[must_use]
pub fn group_coverages(insureds: &[Value]) -> Vec<CoverageGroup> {
    let mut groups: Vec<CoverageGroup> = Vec::new();
    for insured in insureds.iter().map(RawRecord::from_value) {
        let label = insured_label(&insured);
        let variants = insured.array("coverageVariants");
        let blank = [Value::Null];
        let variants = if insured.get("coverageVariants").is_none() {
            &blank[..]
        } else {
            variants
        };
        for variant in variants.iter().map(RawRecord::from_value) {
            let variant_name = coverage::VARIANT_NAME.resolve_or_empty(&variant);
            let row = CoverageRow {
                insured: label.clone(),
                code: coverage::CODE.resolve_or_empty(&variant),
                deductible_main: coverage::DEDUCTIBLE_MAIN.resolve_or_empty(&variant),
                limit_main: coverage::LIMIT_MAIN.resolve_or_empty(&variant),
                deductible_child: coverage::DEDUCTIBLE_CHILD.resolve_or_empty(&variant),
                limit_child: coverage::LIMIT_CHILD.resolve_or_empty(&variant),
            };
            match groups.iter_mut().find(|g| g.variant_name == variant_name) {
                Some(group) => group.rows.push(row),
                None => groups.push(CoverageGroup {
                    variant_name,
                    rows: vec![row],
                }),
            }
        }
    }
    groups
}

fn beneficiary_name(record: &RawRecord) -> String {
    if let Some(name) = beneficiary::NAME.resolve(record) {
        return name;
    }
    if record.get("firstName").is_some() || record.get("lastName").is_some() {
        return joined_name(record);
    }
    beneficiary::LABEL.resolve_or_empty(record)
}

/// Beneficiaries flattened out of every insured's coverage variants.
#[must_use]
pub fn collect_beneficiaries(insureds: &[Value]) -> Vec<BeneficiaryRow> {
    let mut rows = Vec::new();
    for insured in insureds.iter().map(RawRecord::from_value) {
        let label = insured_label(&insured);
        for variant in insured
            .array("coverageVariants")
            .iter()
            .map(RawRecord::from_value)
        {
            let coverage_name = coverage::VARIANT_NAME.resolve_or_empty(&variant);
            for raw in variant.array("beneficiaries") {
                let b = RawRecord::from_value(raw);
                rows.push(BeneficiaryRow {
                    insured: label.clone(),
                    coverage: coverage_name.clone(),
                    name: beneficiary_name(&b),
                    relationship: beneficiary::RELATIONSHIP.resolve_or_empty(&b),
                    priority: beneficiary::PRIORITY.resolve_or_empty(&b),
                    percentage: beneficiary::PERCENTAGE.resolve_or_empty(&b),
                    email: contact_detail(&b, "email")
                        .unwrap_or_else(|| beneficiary::EMAIL.resolve_or_empty(&b)),
                    phone: contact_detail(&b, "phone")
                        .unwrap_or_else(|| beneficiary::PHONE.resolve_or_empty(&b)),
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coverages_group_by_variant_in_first_seen_order() {
        let insureds = vec![
            json!({"firstName": "Ada", "lastName": "L", "coverageVariants": [
                {"coverageVariantDesc": "Life", "stdCoverage": {"stdCoverageCode": "LF1"}, "sumInsured": 1000},
                {"coverageVariantDesc": "Accident", "coverageCode": "AC"}
            ]}),
            json!({"insuredType": "Child", "coverageVariants": [
                {"coverageVariantDesc": "Life", "coverageVariantLevel": {"insuredLevel": {"deductible": {"amount": 50}}}}
            ]}),
        ];
        let groups = group_coverages(&insureds);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].variant_name, "Life");
        assert_eq!(groups[0].rows.len(), 2);
        assert_eq!(groups[0].rows[0].insured, "Ada L");
        assert_eq!(groups[0].rows[0].code, "LF1");
        assert_eq!(groups[0].rows[0].limit_main, "1000");
        assert_eq!(groups[0].rows[1].insured, "Child");
        assert_eq!(groups[0].rows[1].deductible_main, "50");
        assert_eq!(groups[1].rows[0].code, "AC");
    }

    #[test]
    fn insured_without_variants_still_contributes_a_blank_row() {
        let groups = group_coverages(&[json!({"firstName": "Solo"})]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].variant_name, "");
        assert_eq!(groups[0].rows[0].insured, "Solo");
    }

    #[test]
    fn beneficiaries_prefer_contact_details_over_flat_fields() {
        let insureds = vec![json!({"firstName": "Ada", "coverageVariants": [{
            "coverageVariantDesc": "Life",
            "beneficiaries": [{
                "firstName": "Bo",
                "lastName": null,
                "email": "flat@example.com",
                "contactDetails": [{"type": "EMAIL", "detail": "bo@example.com"}],
                "relationShipToIns": {"id": "SPOUSE"},
                "priorityLevel": 1,
                "percentage": 100
            }]
        }]})];
        let rows = collect_beneficiaries(&insureds);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.name, "Bo");
        assert_eq!(row.email, "bo@example.com");
        assert_eq!(row.phone, "");
        assert_eq!(row.relationship, "SPOUSE");
        assert_eq!(row.priority, "1");
        assert_eq!(row.percentage, "100");
        assert_eq!(row.coverage, "Life");
    }
}
