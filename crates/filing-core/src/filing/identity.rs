//! Field registry for the filer-identity variant.

use super::cascade::{CascadeEngine, FieldSpec};
use super::profile::address_spec;
use super::rules::patterns::*;
use super::rules::tables::{self, ORG_NOISE};
use super::rules::{dates, jurisdiction, name, ownership, sections};
use super::strategy::{
    AnchorRegexStrategy, Capture, EntityFilter, EntityLookupStrategy, Gate, Gated, KnownValueStrategy, Lookup,
    LineWindowStrategy, Source,
};
use crate::models::Field;
use crate::nlp::EntityLabel;
use crate::text::{Anchor, Direction, Occurrence};

/// Holdings reports announce themselves on the first page.
const HOLDINGS_REPORT: Gate = Gate::PrefixContains {
    needle: "FORM 13F",
    within: 1000,
};

const OWNERSHIP_CHANGE: Gate = Gate::PrefixContains {
    needle: "FORM 4",
    within: 1000,
};

pub fn identity_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(Field::Name)
            .then(
                LineWindowStrategy::new(
                    "line-above-charter-caption",
                    Anchor::Pattern(&REGISTRANT_CAPTION),
                    Direction::Backward,
                    name::line_above_caption,
                )
                .max_chars(200),
            )
            .then(
                LineWindowStrategy::new(
                    "line-below-charter-caption",
                    Anchor::Pattern(&REGISTRANT_CAPTION),
                    Direction::Forward,
                    name::line_below_caption,
                )
                .max_chars(500),
            )
            .then(Gated::new(
                HOLDINGS_REPORT,
                LineWindowStrategy::new("holdings-filer", Anchor::Pattern(&FILER_LABEL), Direction::FromAnchor, name::filer_line)
                    .max_chars(200),
            ))
            .then(Gated::new(
                HOLDINGS_REPORT,
                LineWindowStrategy::new(
                    "holdings-manager",
                    Anchor::Pattern(&MANAGER_CAPTION),
                    Direction::FromAnchor,
                    name::manager_name,
                )
                .max_chars(300),
            ))
            .then(
                EntityLookupStrategy::new("first-page-organization", EntityLabel::Org, Anchor::Start, 5000).filter(
                    EntityFilter {
                        reject_tokens: ORG_NOISE,
                        ..EntityFilter::default()
                    },
                ),
            ),
        address_spec(),
        FieldSpec::new(Field::IncorporationCountry)
            .then(
                LineWindowStrategy::new(
                    "line-above-jurisdiction-caption",
                    Anchor::Pattern(&JURISDICTION_CAPTION),
                    Direction::Backward,
                    jurisdiction::line_above_caption,
                )
                .max_chars(200),
            )
            .then(
                LineWindowStrategy::new(
                    "line-below-jurisdiction-caption",
                    Anchor::Pattern(&JURISDICTION_CAPTION),
                    Direction::Forward,
                    jurisdiction::line_below_caption,
                )
                .max_chars(300),
            )
            .then(
                AnchorRegexStrategy::new("incorporated-in-place", &INCORPORATED_IN_PLACE, Capture::Group(1))
                    .within_prefix(5000),
            ),
        FieldSpec::new(Field::RegisteredCountry)
            .then(KnownValueStrategy::new(
                "incorporation-country",
                Source::Field(Field::IncorporationCountry),
                Lookup::Verbatim,
            ))
            .then(KnownValueStrategy::new(
                "address-country",
                Source::Field(Field::Address),
                Lookup::Table(tables::address_countries()),
            )),
        FieldSpec::new(Field::IncorporationDate).then(
            AnchorRegexStrategy::new("founding-date", &FOUNDING_DATE, Capture::With(dates::founding_date))
                .within_prefix(20_000)
                .flatten_newlines(),
        ),
        FieldSpec::new(Field::Ownership)
            .then(Gated::new(
                OWNERSHIP_CHANGE,
                LineWindowStrategy::new(
                    "reporting-person",
                    Anchor::Pattern(&REPORTING_PERSON),
                    Direction::FromAnchor,
                    ownership::reporting_person,
                )
                .max_chars(200),
            ))
            .then(Gated::new(
                HOLDINGS_REPORT,
                LineWindowStrategy::new("holdings-table", Anchor::Start, Direction::FromAnchor, ownership::holdings),
            ))
            .then(Gated::new(
                HOLDINGS_REPORT,
                KnownValueStrategy::new(
                    "holdings-manager-report",
                    Source::Field(Field::Name),
                    Lookup::Format(ownership::manager_report),
                ),
            ))
            .then(
                LineWindowStrategy::new(
                    "security-ownership-section",
                    Anchor::Pattern(&SECURITY_OWNERSHIP),
                    Direction::FromAnchor,
                    sections::security_ownership,
                )
                .max_chars(2000)
                .occurrence(Occurrence::All),
            ),
    ]
}

/// Identity cascade engine.
pub fn identity_engine() -> CascadeEngine {
    CascadeEngine::new(identity_specs())
}
