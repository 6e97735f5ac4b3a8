//! Field registry for the filer-profile variant (annual-report style
//! documents).

use super::cascade::{CascadeEngine, FieldSpec, Validator};
use super::rules::patterns::*;
use super::rules::tables::{
    self, MIN_DIRECTORS, NOT_APPLICABLE, PERSON_NOISE, PROXY_SENTINEL, TRUSTEE_NOISE,
};
use super::rules::{address, dates, name, scale, sections};
use super::strategy::{
    AnchorRegexStrategy, Capture, Collect, EntityFilter, EntityLookupStrategy, KnownValueStrategy,
    LineWindowStrategy, Pick,
};
use crate::models::Field;
use crate::nlp::EntityLabel;
use crate::text::{Anchor, Direction, Occurrence};

/// Address cascade shared by both variants.
pub(super) fn address_spec() -> FieldSpec {
    FieldSpec::new(Field::Address)
        .then(
            LineWindowStrategy::new(
                "address-above-caption",
                Anchor::Pattern(&ADDRESS_CAPTION),
                Direction::Backward,
                address::lines_above_caption,
            )
            .max_chars(300),
        )
        .then(
            LineWindowStrategy::new(
                "address-below-caption",
                Anchor::Pattern(&ADDRESS_CAPTION),
                Direction::Forward,
                address::lines_below_caption,
            )
            .max_chars(500),
        )
        .then(
            AnchorRegexStrategy::new("street-address", &STREET_ADDRESS, Capture::With(address::street_address))
                .within_prefix(5000),
        )
        .then(AnchorRegexStrategy::new("city-state-zip", &CITY_STATE_ZIP, Capture::Group(1)).within_prefix(3000))
}

fn directors_caption() -> Anchor {
    Anchor::FirstOf(vec![&*ITEM_10_DIRECTORS, &*ELECTION_OF_DIRECTORS])
}

fn people(reject_tokens: &'static [&'static str]) -> EntityFilter {
    EntityFilter {
        min_len: 3,
        reject_tokens,
        ..EntityFilter::default()
    }
}

fn board_listing(
    strategy: &'static str,
    caption: &'static regex::Regex,
    noise: &'static [&'static str],
) -> EntityLookupStrategy {
    EntityLookupStrategy::new(strategy, EntityLabel::Person, Anchor::Pattern(caption), 2000)
        .occurrence(Occurrence::Reverse)
        .filter(people(noise))
        .collect(Collect::All { min_items: MIN_DIRECTORS })
}

fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

/// Build the profile field cascades in resolution order.
///
/// Directors resolve before senior management so that officers who also
/// sit on the board are reported once; the auditor resolves before the
/// report excerpt that depends on it.
pub fn profile_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(Field::CompanyName)
            .then(
                LineWindowStrategy::new(
                    "charter-name-caption",
                    Anchor::Pattern(&REGISTRANT_CAPTION),
                    Direction::Forward,
                    name::charter_name_line,
                )
                .max_chars(500),
            )
            .then(
                LineWindowStrategy::new("legal-suffix-line", Anchor::Start, Direction::FromAnchor, name::suffix_line)
                    .max_chars(3000),
            )
            .then(
                LineWindowStrategy::new(
                    "business-section-name",
                    Anchor::Pattern(&ITEM_1_BUSINESS),
                    Direction::FromAnchor,
                    name::business_section_name,
                )
                .max_chars(500),
            ),
        address_spec(),
        FieldSpec::new(Field::Auditor)
            .then(KnownValueStrategy::table("known-auditor", tables::known_auditors()))
            .then(
                EntityLookupStrategy::new(
                    "audit-report-firm",
                    EntityLabel::Org,
                    Anchor::Pattern(&AUDIT_REPORT_CAPTION),
                    2000,
                )
                .filter(EntityFilter {
                    must_contain: Some("LLP"),
                    ..EntityFilter::default()
                }),
            ),
        FieldSpec::new(Field::Employees)
            .then(AnchorRegexStrategy::new("employees-as-of", &EMPLOYEES_AS_OF, Capture::Group(1)))
            .then(AnchorRegexStrategy::new("employees-full-time", &EMPLOYEES_FULL_TIME, Capture::Group(1)))
            .then(AnchorRegexStrategy::new("employees-approximate", &EMPLOYEES_APPROXIMATE, Capture::Group(1))),
        FieldSpec::new(Field::Revenue)
            .then(
                AnchorRegexStrategy::new("statements-total-revenue", &REVENUE_TOTAL, Capture::With(scale::revenue_value))
                    .near(Anchor::Pattern(&STATEMENTS_OF_OPERATIONS), Direction::FromAnchor, scale::STATEMENTS_WINDOW),
            )
            .then(
                AnchorRegexStrategy::new("statements-revenue", &REVENUE_GENERIC, Capture::With(scale::revenue_value))
                    .near(Anchor::Pattern(&STATEMENTS_OF_OPERATIONS), Direction::FromAnchor, scale::STATEMENTS_WINDOW),
            )
            .then(AnchorRegexStrategy::new("total-revenue", &REVENUE_TOTAL, Capture::With(scale::revenue_value)))
            .then(AnchorRegexStrategy::new("revenue", &REVENUE_GENERIC, Capture::With(scale::revenue_value))),
        FieldSpec::new(Field::Directors)
            .then(
                EntityLookupStrategy::new("directors-section", EntityLabel::Person, directors_caption(), 2000)
                    .skip_when(&INCORPORATED_BY_REFERENCE, 500)
                    .filter(people(PERSON_NOISE))
                    .collect(Collect::All { min_items: MIN_DIRECTORS }),
            )
            .then(board_listing("board-of-directors", &BOARD_OF_DIRECTORS, PERSON_NOISE))
            .then(board_listing("board-of-trustees", &BOARD_OF_TRUSTEES, TRUSTEE_NOISE))
            .then(
                LineWindowStrategy::new(
                    "directors-proxy-reference",
                    directors_caption(),
                    Direction::FromAnchor,
                    sections::proxy_reference,
                )
                .max_chars(500),
            )
            .validate(Validator::new().min_items(MIN_DIRECTORS).sentinel(PROXY_SENTINEL)),
        FieldSpec::new(Field::SeniorManagement).then(
            EntityLookupStrategy::new(
                "executive-officers",
                EntityLabel::Person,
                Anchor::FirstOf(vec![&*INFO_EXECUTIVE_OFFICERS, &*EXECUTIVE_OFFICERS_OF_REGISTRANT]),
                3000,
            )
            .filter(EntityFilter {
                min_len: 3,
                exclude_field: Some(Field::Directors),
                ..EntityFilter::default()
            })
            .collect(Collect::All { min_items: 1 }),
        ),
        FieldSpec::new(Field::SharesTraded).then(
            AnchorRegexStrategy::new("shares-outstanding", &SHARES_OUTSTANDING, Capture::Group(1)).within_prefix(10_000),
        ),
        FieldSpec::new(Field::ContactNumber)
            .then(
                AnchorRegexStrategy::new("telephone-caption-number", &TELEPHONE_NUMBER, Capture::Group(1))
                    .within_prefix(5000),
            )
            .then(
                AnchorRegexStrategy::new("number-above-telephone-caption", &PHONE, Capture::Whole)
                    .near(Anchor::Pattern(&TELEPHONE_CAPTION), Direction::Backward, 120)
                    .pick(Pick::Last),
            ),
        FieldSpec::new(Field::CompanyNumber)
            .then(
                AnchorRegexStrategy::new("commission-file-number", &COMMISSION_FILE_NUMBER, Capture::Group(1))
                    .within_prefix(5000),
            )
            .then(
                AnchorRegexStrategy::new("employer-id", &EMPLOYER_ID, Capture::Prefixed("EIN: ", 1)).within_prefix(5000),
            )
            .validate(Validator::new().check(has_digit)),
        FieldSpec::new(Field::IncorporationDate)
            .then(
                AnchorRegexStrategy::new(
                    "incorporated-in-state",
                    &INCORPORATED_IN_STATE,
                    Capture::With(dates::incorporation_statement),
                )
                .within_prefix(10_000),
            )
            .then(
                AnchorRegexStrategy::new("organized-under-laws", &ORGANIZED_UNDER_LAWS, Capture::Group(1))
                    .within_prefix(10_000),
            ),
        FieldSpec::new(Field::FormerName)
            .then(AnchorRegexStrategy::new("formerly-known-as", &FORMERLY_KNOWN_AS, Capture::Group(1)).within_prefix(5000))
            .then(
                LineWindowStrategy::new(
                    "former-name-caption",
                    Anchor::Pattern(&FORMER_NAME_CAPTION),
                    Direction::Backward,
                    name::former_name_line,
                )
                .max_chars(200),
            )
            .validate(Validator::new().reject_equal(NOT_APPLICABLE)),
        FieldSpec::new(Field::ListingProof).then(
            AnchorRegexStrategy::new("trading-symbol", &TRADING_SYMBOL, Capture::Prefixed("Trading Symbol: ", 1))
                .within_prefix(5000),
        ),
        FieldSpec::new(Field::LineOfBusiness).then(
            LineWindowStrategy::new("business-section", Anchor::Pattern(&ITEM_1_BUSINESS), Direction::FromAnchor, sections::excerpt)
                .max_chars(500),
        ),
        FieldSpec::new(Field::AuditorFinancialReport)
            .requires(Field::Auditor)
            .then(
                LineWindowStrategy::new(
                    "audit-opinion",
                    Anchor::After(&AUDIT_REPORT_CAPTION, &OPINION_CAPTION),
                    Direction::FromAnchor,
                    sections::excerpt,
                )
                .max_chars(500),
            )
            .then(
                LineWindowStrategy::new(
                    "audit-report",
                    Anchor::Pattern(&AUDIT_REPORT_CAPTION),
                    Direction::FromAnchor,
                    sections::excerpt,
                )
                .max_chars(500),
            ),
        FieldSpec::new(Field::SubsidiariesOwnership)
            .then(KnownValueStrategy::table("subsidiary-exhibit", tables::subsidiary_exhibits())),
        FieldSpec::new(Field::ParentOwnership).then(
            LineWindowStrategy::new(
                "security-ownership-parent",
                Anchor::Pattern(&SECURITY_OWNERSHIP),
                Direction::FromAnchor,
                sections::parent_mention,
            )
            .max_chars(2000),
        ),
        FieldSpec::new(Field::CompanyData).then(
            LineWindowStrategy::new("document-head", Anchor::Start, Direction::FromAnchor, sections::one_line)
                .max_chars(200),
        ),
        FieldSpec::new(Field::IndividualProfile),
    ]
}

/// Profile cascade engine.
pub fn profile_engine() -> CascadeEngine {
    CascadeEngine::new(profile_specs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractedRecord;
    use crate::nlp::{EntityAdapter, EntityClassifier, PhraseClassifier, UnavailableClassifier};
    use pretty_assertions::assert_eq;

    fn extract(text: &str, classifier: &dyn EntityClassifier) -> ExtractedRecord {
        let entities = EntityAdapter::new(classifier, 1_000_000);
        profile_engine().run(text, &entities).0
    }

    #[test]
    fn test_registry_covers_profile_fields_once() {
        let fields: Vec<Field> = profile_specs().iter().map(FieldSpec::field).collect();
        assert_eq!(fields.len(), 19);
        for field in &fields {
            assert_eq!(fields.iter().filter(|f| *f == field).count(), 1, "{} listed twice", field);
        }
        assert!(!fields.contains(&Field::TypeOfCompany));

        for spec in profile_specs() {
            let names = spec.strategy_names();
            assert_eq!(names.is_empty(), spec.field() == Field::IndividualProfile, "{}", spec.field());
        }
    }

    #[test]
    fn test_cover_page_fields() {
        let doc = "UNITED STATES\nSECURITIES AND EXCHANGE COMMISSION\nFORM 10-K\n\
                   Commission File Number: 001-12345\n\
                   ACME WIDGETS INC\n(Exact name of registrant as specified in its charter)\n\
                   ACME WIDGETS INC\nDelaware 12-3456789\n\
                   (State or other jurisdiction of incorporation or organization)\n\
                   100 Main Street\nSpringfield, Illinois 62701\n\
                   (Address of principal executive offices) (Zip Code)\n\
                   (217) 555-0100\n(Registrant's telephone number, including area code)\n\
                   Title of each class  Trading Symbol(s)  Name of each exchange\n\
                   Common Stock\nACME\nNasdaq\n";
        let record = extract(doc, &UnavailableClassifier);

        assert_eq!(record.text(Field::CompanyName), Some("ACME WIDGETS INC"));
        assert_eq!(record.text(Field::CompanyNumber), Some("001-12345"));
        assert_eq!(record.text(Field::Address), Some("100 Main Street, Springfield, Illinois 62701"));
        assert_eq!(record.text(Field::ContactNumber), Some("(217) 555-0100"));
        assert_eq!(record.text(Field::ListingProof), Some("Trading Symbol: ACME"));
    }

    #[test]
    fn test_ein_fallback_and_former_name_placeholder() {
        let doc = "I.R.S. Employer Identification No.: 12-3456789\n\
                   N/A\n(Former name, former address and former fiscal year, if changed since last report)";
        let record = extract(doc, &UnavailableClassifier);
        assert_eq!(record.text(Field::CompanyNumber), Some("EIN: 12-3456789"));
        assert!(!record.is_resolved(Field::FormerName));
    }

    #[test]
    fn test_auditor_report_requires_auditor() {
        let doc = "Report of Independent Registered Public Accounting Firm\n\
                   To the Board.\nOpinion on the Financial Statements\nWe have audited.";
        let record = extract(doc, &UnavailableClassifier);
        assert!(!record.is_resolved(Field::Auditor));
        assert!(!record.is_resolved(Field::AuditorFinancialReport));

        let firm = PhraseClassifier::new().with_orgs(["Smith & Jones LLP"]);
        let signed = format!("{}\n/s/ Smith & Jones LLP", doc);
        let record = extract(&signed, &firm);
        assert_eq!(record.text(Field::Auditor), Some("Smith & Jones LLP"));
        assert_eq!(
            record.text(Field::AuditorFinancialReport),
            Some("Opinion on the Financial Statements\nWe have audited.\n/s/ Smith & Jones LLP...")
        );
    }

    #[test]
    fn test_senior_management_skips_directors() {
        let names = ["Ann Able", "Ben Baker", "Cal Cole", "Dee Dunn", "Eve Egan"];
        let classifier = PhraseClassifier::new().with_people(names);
        let doc = format!(
            "Item 10. Directors\nAnn Able, Ben Baker, Cal Cole, Dee Dunn\n{}\n\
             Information about our Executive Officers\nAnn Able, Chief Executive\nEve Egan, Chief Financial",
            ".".repeat(2100)
        );
        let record = extract(&doc, &classifier);

        assert_eq!(record.list(Field::Directors).len(), 4);
        assert_eq!(record.list(Field::SeniorManagement), &["Eve Egan".to_string()]);
    }

    #[test]
    fn test_proxy_sentinel_when_no_listing() {
        let doc = "Item 10. Directors, Executive Officers and Corporate Governance\n\
                   The information required by this item is incorporated by reference to our Proxy Statement.";
        let record = extract(doc, &UnavailableClassifier);
        assert_eq!(record.list(Field::Directors), &[PROXY_SENTINEL.to_string()]);
    }

    #[test]
    fn test_street_address_skips_statutory_citation() {
        let doc = "Filed pursuant to Section 13 of the Securities Exchange Act, Washington, D.C. 20549\n\
                   Our headquarters are at 100 Main Street\nSpringfield, Illinois 62701\n";
        let record = extract(doc, &UnavailableClassifier);
        assert_eq!(record.text(Field::Address), Some("100 Main Street, Springfield, Illinois 62701"));
    }

    #[test]
    fn test_city_state_zip_fallback() {
        let record = extract("Mailing office: Springfield, Illinois 62701", &UnavailableClassifier);
        assert_eq!(record.text(Field::Address), Some("Springfield, Illinois 62701"));
    }

    #[test]
    fn test_trustee_listing_keeps_officer_titles() {
        let classifier = PhraseClassifier::new().with_people([
            "Ann Able",
            "Ben Baker",
            "Audit Committee Chair",
            "Cal Cole",
            "Dana Officer",
        ]);
        let doc = "Board of Trustees\nAnn Able\nBen Baker\nAudit Committee Chair\nCal Cole\nDana Officer\n";
        let record = extract(doc, &classifier);
        assert_eq!(
            record.list(Field::Directors),
            &["Ann Able".to_string(), "Ben Baker".to_string(), "Cal Cole".to_string(), "Dana Officer".to_string()]
        );
    }

    #[test]
    fn test_formerly_known_as() {
        let record = extract("The Company, formerly known as Acme Tools Inc.\n", &UnavailableClassifier);
        assert_eq!(record.text(Field::FormerName), Some("Acme Tools Inc"));
    }

    #[test]
    fn test_organized_under_laws_year() {
        let doc = "The Company was organized under the laws of the State of Nevada in 1987.";
        let record = extract(doc, &UnavailableClassifier);
        assert_eq!(record.text(Field::IncorporationDate), Some("1987"));
    }

    #[test]
    fn test_company_data_and_exhibit() {
        let doc = "Annual Report\nAcme\nSee Exhibit 21 for subsidiaries.";
        let record = extract(doc, &UnavailableClassifier);
        assert_eq!(record.text(Field::CompanyData), Some("Annual Report Acme See Exhibit 21 for subsidiaries."));
        assert_eq!(record.text(Field::SubsidiariesOwnership), Some("Referenced in Exhibit 21"));
        assert!(!record.is_resolved(Field::IndividualProfile));
    }
}
