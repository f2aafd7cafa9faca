//! oralcare-instruments
//!
//! The oral hygiene scoring engine. Pure functions only: category rules,
//! score evaluation, lenient input parsing, and the instrument metadata
//! (sites, declared ranges, rating criteria) the front end displays.

pub mod categories;
pub mod engine;
pub mod error;
pub mod parse;
pub mod scoring;

use std::sync::LazyLock;

use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;

use categories::{RULES, rule_for};
use error::InstrumentError;
use scoring::{Domain, ScoreEntry, ValidationError};

/// A clinical instrument: named domains with declared score ranges.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "oral_hygiene").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The domains this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Report entries whose value lies outside the declared range.
    /// Reporting only: the entries themselves are never altered.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(subscale) = all_subscales.iter().find(|s| s.id == entry.subscale_id)
                && !subscale.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} value {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        entry.value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                });
            }
        }
        errors
    }
}

/// The oral hygiene product assessment.
pub struct OralHygiene;

impl Instrument for OralHygiene {
    fn id(&self) -> &str {
        "oral_hygiene"
    }

    fn name(&self) -> &str {
        "Oral Hygiene Assessment"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: LazyLock<Vec<Domain>> =
            LazyLock::new(|| RULES.iter().map(|rule| rule.domain()).collect());
        &DOMAINS
    }
}

impl OralHygiene {
    pub fn domain(&self, category: Category) -> &Domain {
        &self.domains()[category as usize]
    }

    pub fn domain_by_id(&self, id: &str) -> Result<&Domain, InstrumentError> {
        self.domains()
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| InstrumentError::UnknownCategory(id.to_string()))
    }
}

/// Raw values outside their declared range, across all categories.
///
/// Out-of-range values still count toward the scores; this only flags them.
pub fn range_advisories(assessment: &Assessment) -> Vec<ValidationError> {
    let entries: Vec<ScoreEntry> = Category::ALL
        .iter()
        .flat_map(|&c| rule_for(c).entries(assessment))
        .collect();
    OralHygiene.validate_scores(&entries)
}
