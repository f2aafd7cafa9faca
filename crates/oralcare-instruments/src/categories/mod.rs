//! One scoring rule per assessment category.

pub mod arch;
pub mod interdental;
pub mod motor;
pub mod perio;
pub mod plaque;
pub mod sensitivity;

use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;

use crate::scoring::{Domain, ScoreEntry};

/// Scoring and warning logic for a single category.
///
/// Rules never reject input: whatever the raw fields hold is summed as-is.
pub trait CategoryRule: Send + Sync {
    fn category(&self) -> Category;

    /// Sites, declared ranges, and rating criteria for this category.
    fn domain(&self) -> Domain;

    /// Raw values keyed by subscale id, for range advisories.
    fn entries(&self, assessment: &Assessment) -> Vec<ScoreEntry>;

    /// The category's actual score.
    fn actual(&self, assessment: &Assessment) -> i64;

    /// Whether the category crossed its clinical warning threshold.
    fn warning(&self, assessment: &Assessment) -> bool;
}

/// All rules, in report order.
pub static RULES: [&dyn CategoryRule; 6] = [
    &plaque::Plaque,
    &perio::Perio,
    &interdental::Interdental,
    &sensitivity::Sensitivity,
    &arch::Arch,
    &motor::Motor,
];

pub fn rule_for(category: Category) -> &'static dyn CategoryRule {
    RULES[category as usize]
}

pub(crate) fn sum(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}
