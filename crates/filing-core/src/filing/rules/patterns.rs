//! Regex patterns for filing field extraction.
//!
//! Every quantifier that can span text is bounded so that a pathological
//! document costs at most linear time per window.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Cover-page captions
    pub static ref REGISTRANT_CAPTION: Regex = Regex::new(
        r"(?is)Exact\s+name\s+of\s+registrant.{0,40}?specified\s+in\s+its\s+charter"
    ).unwrap();

    pub static ref ADDRESS_CAPTION: Regex = Regex::new(
        r"(?is)Address.{0,60}?principal\s+executive\s+offices"
    ).unwrap();

    pub static ref JURISDICTION_CAPTION: Regex = Regex::new(
        r"(?is)State\s+or\s+other\s+jurisdiction.{0,40}?incorporation\s+or\s+organization"
    ).unwrap();

    pub static ref TELEPHONE_CAPTION: Regex = Regex::new(
        r"(?i)telephone\s+number"
    ).unwrap();

    pub static ref FORMER_NAME_CAPTION: Regex = Regex::new(
        r"(?i)Former\s+name,\s+former\s+address\s+and\s+former\s+fiscal\s+year"
    ).unwrap();

    pub static ref TRADING_SYMBOL: Regex = Regex::new(
        r"(?i:Trading\s+Symbol\(s\))[\s\S]{0,200}?\b([A-Z]{1,5})\b"
    ).unwrap();

    // Section captions
    pub static ref ITEM_1_BUSINESS: Regex = Regex::new(
        r"Item\s+1\.\s+Business"
    ).unwrap();

    pub static ref ITEM_10_DIRECTORS: Regex = Regex::new(
        r"Item\s+10\.\s+Directors"
    ).unwrap();

    pub static ref ELECTION_OF_DIRECTORS: Regex = Regex::new(
        r"Election\s+of\s+Directors"
    ).unwrap();

    pub static ref BOARD_OF_DIRECTORS: Regex = Regex::new(
        r"Board\s+of\s+Directors"
    ).unwrap();

    pub static ref BOARD_OF_TRUSTEES: Regex = Regex::new(
        r"Board\s+of\s+Trustees"
    ).unwrap();

    pub static ref INFO_EXECUTIVE_OFFICERS: Regex = Regex::new(
        r"Information\s+about\s+our\s+Executive\s+Officers"
    ).unwrap();

    pub static ref EXECUTIVE_OFFICERS_OF_REGISTRANT: Regex = Regex::new(
        r"Executive\s+Officers\s+of\s+the\s+Registrant"
    ).unwrap();

    pub static ref AUDIT_REPORT_CAPTION: Regex = Regex::new(
        r"Report\s+of\s+Independent\s+Registered\s+Public\s+Accounting\s+Firm"
    ).unwrap();

    pub static ref OPINION_CAPTION: Regex = Regex::new(
        r"Opinion\s+on\s+the\s+Financial\s+Statements"
    ).unwrap();

    pub static ref STATEMENTS_OF_OPERATIONS: Regex = Regex::new(
        r"Consolidated\s+Statements\s+of\s+Operations"
    ).unwrap();

    pub static ref SECURITY_OWNERSHIP: Regex = Regex::new(
        r"Security\s+Ownership\s+of\s+Certain\s+Beneficial\s+Owners"
    ).unwrap();

    pub static ref INCORPORATED_BY_REFERENCE: Regex = Regex::new(
        r"(?i)incorporated\s+by\s+reference"
    ).unwrap();

    // Holdings and ownership-change filings
    pub static ref FILER_LABEL: Regex = Regex::new(
        r"FILER"
    ).unwrap();

    pub static ref MANAGER_CAPTION: Regex = Regex::new(
        r"Institutional\s+Investment\s+Manager\s+Filing\s+this\s+Report"
    ).unwrap();

    pub static ref REPORTING_PERSON: Regex = Regex::new(
        r"Name\s+of\s+Reporting\s+Person"
    ).unwrap();

    pub static ref CLASS_CODE: Regex = Regex::new(
        r"^(?:COM|CL [A-Z]|PFD|WTS|UNIT|SPON|ADR|COM SER [A-Z])$"
    ).unwrap();

    pub static ref SECURITY_ID: Regex = Regex::new(
        r"^[A-Z0-9]{9}$"
    ).unwrap();

    // Identifiers
    pub static ref COMMISSION_FILE_NUMBER: Regex = Regex::new(
        r"(?i)Commission\s+File\s+Number:?\s*([0-9-]{1,20})"
    ).unwrap();

    pub static ref EMPLOYER_ID: Regex = Regex::new(
        r"(?i)Employer\s+Identification\s+No\.:?\s*([0-9-]{1,20})"
    ).unwrap();

    pub static ref TAX_ID_LINE: Regex = Regex::new(
        r"^\d{2}-\d{7}$"
    ).unwrap();

    // Contact
    pub static ref TELEPHONE_NUMBER: Regex = Regex::new(
        r"(?i)telephone\s+number[^\n]{0,80}?:?\s*(\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4})"
    ).unwrap();

    pub static ref PHONE: Regex = Regex::new(
        r"\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}"
    ).unwrap();

    // Address
    pub static ref STREET_ADDRESS: Regex = Regex::new(
        r"(?is)\b\d{1,6}\s+[A-Za-z0-9\s,]{1,100}(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Way|Drive|Dr|Plaza|Parkway|Pkwy|Court|Ct|Circle|Cir|Lane|Ln)\b.{0,120}?\d{5}(?:-\d{4})?"
    ).unwrap();

    pub static ref CITY_STATE_ZIP: Regex = Regex::new(
        r"([A-Z][a-zA-Z\s]{1,40},\s+[A-Z][a-zA-Z\s]{1,40}\s+\d{5})"
    ).unwrap();

    pub static ref ZIP_CODE: Regex = Regex::new(
        r"\d{5}(?:-\d{4})?"
    ).unwrap();

    pub static ref FIVE_DIGITS: Regex = Regex::new(
        r"\d{5}"
    ).unwrap();

    pub static ref US_STATE_ZIP: Regex = Regex::new(
        r"\b[A-Z]{2}\s+\d{5}"
    ).unwrap();

    pub static ref UK_TOKEN: Regex = Regex::new(
        r"\bUK\b"
    ).unwrap();

    // Name
    pub static ref BUSINESS_NAME: Regex = Regex::new(
        r"([A-Z][a-zA-Z0-9\s,&]{1,200}(?:Corporation|Corp|Inc|Ltd|PLC|Co)\.?)"
    ).unwrap();

    pub static ref FORMERLY_KNOWN_AS: Regex = Regex::new(
        r"(?i)formerly\s+known\s+as\s+([A-Z][a-zA-Z0-9\s,&]{0,100})"
    ).unwrap();

    // Workforce and financials
    pub static ref EMPLOYEES_AS_OF: Regex = Regex::new(
        r"(?i)As\s+of[^\n]{0,80}?,\s+we\s+had\s+approximately\s+(\d{1,3}(?:,\d{3})*|\d+)\s+(?:full-time\s+)?(?:employees|colleagues)"
    ).unwrap();

    pub static ref EMPLOYEES_FULL_TIME: Regex = Regex::new(
        r"(?i)(\d{1,3}(?:,\d{3})*|\d+)\s+(?:full-time|part-time)\s+(?:employees|colleagues)"
    ).unwrap();

    pub static ref EMPLOYEES_APPROXIMATE: Regex = Regex::new(
        r"(?i)(?:approximately|more\s+than)\s+(\d{1,3}(?:,\d{3})*|\d+)\s+(?:employees|colleagues)"
    ).unwrap();

    pub static ref REVENUE_TOTAL: Regex = Regex::new(
        r"(?is)Total\s+(?:Net\s+)?Revenues?.{0,300}?\$\s*(\d{1,3}(?:,\d{3})+)"
    ).unwrap();

    pub static ref REVENUE_GENERIC: Regex = Regex::new(
        r"(?is)(?:Net|Total)\s+Revenues?.{0,300}?\$\s*(\d{1,3}(?:,\d{3})+)"
    ).unwrap();

    pub static ref SHARES_OUTSTANDING: Regex = Regex::new(
        r"(?i)(\d{1,3}(?:,\d{3})+|\d+)\s+shares\s+of\s+(?:the\s+)?(?:Registrant['’‘]s\s+)?common\s+stock\s+outstanding"
    ).unwrap();

    // Incorporation
    pub static ref INCORPORATED_IN_STATE: Regex = Regex::new(
        r"(?i)incorporated\s+in\s+[A-Z][a-z]{1,30}\s+(?:in|on)\s+(?:([A-Z][a-z]{1,15})\s+(\d{1,2}),?\s+)?(\d{4})"
    ).unwrap();

    pub static ref ORGANIZED_UNDER_LAWS: Regex = Regex::new(
        r"(?i)organized\s+under\s+the\s+laws\s+of[^\n]{0,120}?\s+in\s+(\d{4})"
    ).unwrap();

    pub static ref INCORPORATED_IN_PLACE: Regex = Regex::new(
        r"(?i)incorporated\s+in\s+([A-Z][a-zA-Z\s]{0,60})"
    ).unwrap();

    pub static ref FOUNDING_DATE: Regex = Regex::new(
        r"(?i)(?:incorporated|established|founded)(?:\s+[A-Za-z.,]{1,40}){0,5}?\s+(?:on|in)\s+([A-Z][a-z]{1,15}\s+\d{1,2},?\s+\d{4}|[A-Z][a-z]{1,15}\s+\d{4}|\d{4})"
    ).unwrap();
}
