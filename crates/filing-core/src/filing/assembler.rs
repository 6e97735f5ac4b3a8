//! Typed record assembly from resolved fields.

use super::rules::tables::COMPANY_TYPES;
use crate::models::{ExtractedRecord, Field, IdentityRecord, ProfileRecord};

/// Legal form implied by the tokens of an entity name.
pub fn company_type(name: &str) -> Option<&'static str> {
    let tokens: Vec<String> = name
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect();
    COMPANY_TYPES
        .iter()
        .find(|(suffixes, _)| tokens.iter().any(|t| suffixes.contains(&t.as_str())))
        .map(|&(_, kind)| kind)
}

fn text(record: &ExtractedRecord, field: Field) -> Option<String> {
    record.text(field).map(str::to_string)
}

fn list(record: &ExtractedRecord, field: Field) -> Vec<String> {
    record.list(field).to_vec()
}

/// Build the profile output. The company type is derived here, after every
/// cascade has finished.
pub fn assemble_profile(record: &ExtractedRecord) -> ProfileRecord {
    let company_name = text(record, Field::CompanyName);
    let type_of_company = company_name
        .as_deref()
        .and_then(company_type)
        .map(str::to_string);

    ProfileRecord {
        company_name,
        auditor: text(record, Field::Auditor),
        address: text(record, Field::Address),
        line_of_business: text(record, Field::LineOfBusiness),
        directors: list(record, Field::Directors),
        revenue: text(record, Field::Revenue),
        shares_traded: text(record, Field::SharesTraded),
        employees: text(record, Field::Employees),
        parent_ownership: text(record, Field::ParentOwnership),
        subsidiaries_ownership: text(record, Field::SubsidiariesOwnership),
        contact_number: text(record, Field::ContactNumber),
        former_name: text(record, Field::FormerName),
        senior_management: list(record, Field::SeniorManagement),
        incorporation_date: text(record, Field::IncorporationDate),
        company_number: text(record, Field::CompanyNumber),
        type_of_company,
        auditor_financial_report: text(record, Field::AuditorFinancialReport),
        individual_profile: text(record, Field::IndividualProfile),
        listing_proof: text(record, Field::ListingProof),
        company_data: text(record, Field::CompanyData),
    }
}

pub fn assemble_identity(record: &ExtractedRecord) -> IdentityRecord {
    IdentityRecord {
        name: text(record, Field::Name),
        address: text(record, Field::Address),
        incorporation_date: text(record, Field::IncorporationDate),
        incorporation_country: text(record, Field::IncorporationCountry),
        registered_country: text(record, Field::RegisteredCountry),
        ownership: text(record, Field::Ownership),
    }
}
