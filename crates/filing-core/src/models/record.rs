//! Field identifiers, per-field results and the assembled output records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Every field either output variant can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CompanyName,
    Auditor,
    Address,
    LineOfBusiness,
    Directors,
    Revenue,
    SharesTraded,
    Employees,
    ParentOwnership,
    SubsidiariesOwnership,
    ContactNumber,
    FormerName,
    SeniorManagement,
    IncorporationDate,
    CompanyNumber,
    TypeOfCompany,
    AuditorFinancialReport,
    IndividualProfile,
    ListingProof,
    CompanyData,
    Name,
    IncorporationCountry,
    RegisteredCountry,
    Ownership,
}

impl Field {
    /// Output key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CompanyName => "company_name",
            Field::Auditor => "auditor",
            Field::Address => "address",
            Field::LineOfBusiness => "line_of_business",
            Field::Directors => "directors",
            Field::Revenue => "revenue",
            Field::SharesTraded => "shares_traded",
            Field::Employees => "employees",
            Field::ParentOwnership => "parent_ownership",
            Field::SubsidiariesOwnership => "subsidiaries_ownership",
            Field::ContactNumber => "contact_number",
            Field::FormerName => "former_name",
            Field::SeniorManagement => "senior_management",
            Field::IncorporationDate => "incorporation_date",
            Field::CompanyNumber => "company_number",
            Field::TypeOfCompany => "type_of_company",
            Field::AuditorFinancialReport => "auditor_financial_report",
            Field::IndividualProfile => "individual_profile",
            Field::ListingProof => "listing_proof",
            Field::CompanyData => "company_data",
            Field::Name => "name",
            Field::IncorporationCountry => "incorporation_country",
            Field::RegisteredCountry => "registered_country",
            Field::Ownership => "ownership",
        }
    }

    /// Whether the field holds an ordered sequence of strings.
    pub fn is_list(&self) -> bool {
        matches!(self, Field::Directors | Field::SeniorManagement)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matched value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// Terminal outcome of one field's cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Field the cascade ran for.
    pub field: Field,
    /// Accepted value; `None` when every strategy came up empty.
    pub value: Option<FieldValue>,
    /// Name of the strategy that produced the value.
    pub strategy: Option<&'static str>,
}

impl ExtractionResult {
    pub fn absent(field: Field) -> Self {
        Self {
            field,
            value: None,
            strategy: None,
        }
    }

    pub fn resolved(field: Field, value: FieldValue, strategy: &'static str) -> Self {
        Self {
            field,
            value: Some(value),
            strategy: Some(strategy),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }
}

/// Field values resolved so far for one document.
///
/// Fields start absent and are written at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRecord {
    values: BTreeMap<Field, FieldValue>,
}

impl ExtractedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resolved result. Returns `false` if the field already had a value,
    /// in which case the earlier value is kept.
    pub fn set(&mut self, result: &ExtractionResult) -> bool {
        let Some(value) = &result.value else {
            return false;
        };
        if self.values.contains_key(&result.field) {
            warn!("Field {} already resolved, keeping first value", result.field);
            return false;
        }
        self.values.insert(result.field, value.clone());
        true
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn list(&self, field: Field) -> &[String] {
        self.get(field).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    pub fn is_resolved(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &FieldValue)> {
        self.values.iter()
    }
}

/// Filer-profile output (annual-report style documents).
///
/// Every key is always serialized; absent strings become `null`, absent
/// lists become `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub company_name: Option<String>,
    pub auditor: Option<String>,
    pub address: Option<String>,
    pub line_of_business: Option<String>,
    pub directors: Vec<String>,
    pub revenue: Option<String>,
    pub shares_traded: Option<String>,
    pub employees: Option<String>,
    pub parent_ownership: Option<String>,
    pub subsidiaries_ownership: Option<String>,
    pub contact_number: Option<String>,
    pub former_name: Option<String>,
    pub senior_management: Vec<String>,
    pub incorporation_date: Option<String>,
    pub company_number: Option<String>,
    pub type_of_company: Option<String>,
    pub auditor_financial_report: Option<String>,
    pub individual_profile: Option<String>,
    pub listing_proof: Option<String>,
    pub company_data: Option<String>,
}

/// Filer-identity output (cover-page identity plus ownership).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub name: Option<String>,
    pub address: Option<String>,
    pub incorporation_date: Option<String>,
    pub incorporation_country: Option<String>,
    pub registered_country: Option<String>,
    pub ownership: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_fields_set_once() {
        let mut record = ExtractedRecord::new();
        let first = ExtractionResult::resolved(Field::Auditor, "KPMG".to_string().into(), "known");
        let second = ExtractionResult::resolved(Field::Auditor, "BDO".to_string().into(), "known");

        assert!(record.set(&first));
        assert!(!record.set(&second));
        assert_eq!(record.text(Field::Auditor), Some("KPMG"));
    }

    #[test]
    fn test_absent_result_leaves_field_unset() {
        let mut record = ExtractedRecord::new();
        assert!(!record.set(&ExtractionResult::absent(Field::Revenue)));
        assert!(!record.is_resolved(Field::Revenue));
        assert!(record.list(Field::Directors).is_empty());
    }

    #[test]
    fn test_profile_serializes_every_key() {
        let json = serde_json::to_value(ProfileRecord::default()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 20);
        assert_eq!(object["company_name"], serde_json::Value::Null);
        assert_eq!(object["directors"], serde_json::json!([]));
        assert_eq!(object["individual_profile"], serde_json::Value::Null);
    }

    #[test]
    fn test_field_keys_match_serde_names() {
        for field in [Field::CompanyName, Field::AuditorFinancialReport, Field::RegisteredCountry] {
            let key = serde_json::to_value(field).unwrap();
            assert_eq!(key, serde_json::Value::String(field.as_str().to_string()));
        }
    }
}
