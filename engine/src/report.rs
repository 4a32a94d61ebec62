//! Report assembly - the contract consumed by the presentation layer
//!
//! Derives a profile per partner from the birth dates, runs the analysis
//! passes and packages everything into one serializable report. The
//! presentation layer treats the fields as opaque display strings plus a
//! single numeric score.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::analysis::elements::{element_relation, ElementRelation};
use crate::analysis::forecast::{child_forecast, format_wedding_years, wedding_years};
use crate::analysis::relations::{relations_between, ZodiacRelation};
use crate::analysis::scoring::{nayin_names_match, score};
use crate::nayin::{self, NayinEntry};
use crate::types::{Element, EngineError, Pillar, ZodiacSign};

/// Everything the engine derives for one partner from a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonProfile {
    pub birth_date: NaiveDate,
    pub zodiac: ZodiacSign,
    pub pillar: Pillar,
    pub nayin: &'static NayinEntry,
}

impl PersonProfile {
    /// Derive all attributes from a birth date. Only the year component is
    /// significant; the zodiac-year cutover ignores solar terms.
    pub fn from_birth_date(birth_date: NaiveDate) -> Result<Self, EngineError> {
        let year = birth_date.year();
        let pillar = Pillar::from_year(year);
        Ok(PersonProfile {
            birth_date,
            zodiac: ZodiacSign::from_year(year),
            pillar,
            nayin: nayin::lookup(pillar)?,
        })
    }

    pub fn element(&self) -> Element {
        self.nayin.element
    }
}

/// Full compatibility report for one pair of birth dates.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    pub partner_a: PersonProfile,
    pub partner_b: PersonProfile,
    pub relations: Vec<ZodiacRelation>,
    pub element_relation: ElementRelation,
    pub element_description: String,
    pub nayin_match: bool,
    pub score: u8,
    /// Recommended wedding years, derived from partner A's sign
    pub wedding_years: String,
    pub child_forecast: &'static str,
}

impl CompatibilityReport {
    /// JSON rendering handed to the presentation layer.
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Analyze the compatibility of two partners by birth date.
pub fn analyze(
    date_a: NaiveDate,
    date_b: NaiveDate,
) -> Result<CompatibilityReport, EngineError> {
    let partner_a = PersonProfile::from_birth_date(date_a)?;
    let partner_b = PersonProfile::from_birth_date(date_b)?;

    let relations = relations_between(partner_a.zodiac, partner_b.zodiac);
    let element_relation = element_relation(partner_a.element(), partner_b.element());
    let nayin_match = nayin_names_match(partner_a.nayin.name, partner_b.nayin.name);
    let score = score(&relations, &element_relation, nayin_match);

    debug!(
        "{} x {}: relations {:?}, elements {}, score {}",
        partner_a.zodiac, partner_b.zodiac, relations, element_relation, score
    );

    Ok(CompatibilityReport {
        partner_a,
        partner_b,
        relations,
        element_description: element_relation.to_string(),
        element_relation,
        nayin_match,
        score,
        wedding_years: format_wedding_years(wedding_years(partner_a.zodiac)),
        child_forecast: child_forecast(element_relation.kind),
    })
}
