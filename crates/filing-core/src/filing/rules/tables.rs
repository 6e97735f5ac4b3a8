//! Immutable lookup tables.

use crate::filing::strategy::{KnownValue, Needle};

use super::patterns::{UK_TOKEN, US_STATE_ZIP};

/// Legal-form suffixes that mark a line as an entity name.
pub const LEGAL_SUFFIXES: &[&str] = &[
    "Inc", "Inc.", "Corp", "Corp.", "Corporation", "Ltd", "Ltd.", "Limited", "PLC", "P.L.C.", "LLC", "L.L.C.",
    "Co.", "Company",
];

/// Lines containing these are cover-page boilerplate, not names.
pub const NAME_NOISE: &[&str] = &["Commission", "Securities", "Address", "Copyright"];

/// Audit firms recognized by name alone, in lookup order.
pub const KNOWN_AUDITORS: &[&str] = &[
    "Ernst & Young",
    "PricewaterhouseCoopers",
    "Deloitte",
    "KPMG",
    "Grant Thornton",
    "BDO",
];

/// Person entities containing these are role titles, not names.
pub const PERSON_NOISE: &[&str] = &["Committee", "Chair", "Director", "Officer"];

/// Trustee listings only drop committee roles.
pub const TRUSTEE_NOISE: &[&str] = &["Committee", "Chair"];

/// Organization entities containing these are cover-page labels.
pub const ORG_NOISE: &[&str] = &["Commission", "Business Address", "Mailing Address"];

/// Holdings-table header cells that look like issuer names.
pub const HOLDING_NOISE: &[&str] = &["COLUMN 1", "NAME OF ISSUER", "SOLE", "SHARED", "NONE"];

/// Placeholder values filers print instead of a former name.
pub const NOT_APPLICABLE: &[&str] = &["N/A", "Not Applicable", "None"];

/// Directors value when the list lives in the proxy statement.
pub const PROXY_SENTINEL: &str = "Referenced in Proxy Statement";

/// Maximum number of holdings reported for a holdings filing.
pub const MAX_HOLDINGS: usize = 20;

/// Smallest director list accepted from an entity scan.
pub const MIN_DIRECTORS: usize = 4;

/// Legal form implied by a name token, checked in table order.
pub const COMPANY_TYPES: &[(&[&str], &str)] = &[
    (&["inc", "inc.", "corp", "corp.", "corporation"], "Corporation"),
    (&["llc", "l.l.c."], "LLC"),
    (&["plc", "p.l.c."], "Public Limited Company"),
    (&["ltd", "ltd.", "limited"], "Limited Company"),
];

/// Known-auditor lookup table.
pub fn known_auditors() -> Vec<KnownValue> {
    KNOWN_AUDITORS
        .iter()
        .map(|&firm| KnownValue::new(Needle::Insensitive(firm), firm))
        .collect()
}

/// Country implied by address text.
pub fn address_countries() -> Vec<KnownValue> {
    vec![
        KnownValue::new(Needle::Sensitive("United States"), "United States"),
        KnownValue::new(Needle::Pattern(&US_STATE_ZIP), "United States"),
        KnownValue::new(Needle::Sensitive("United Kingdom"), "United Kingdom"),
        KnownValue::new(Needle::Pattern(&UK_TOKEN), "United Kingdom"),
    ]
}

/// Subsidiary listing reference.
pub fn subsidiary_exhibits() -> Vec<KnownValue> {
    vec![KnownValue::new(Needle::Sensitive("Exhibit 21"), "Referenced in Exhibit 21")]
}
