//! Pure scoring over an [`Assessment`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::{Category, TOTAL_MAX};

use crate::categories::RULES;

/// Derived result for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: Category,
    pub label: String,
    pub actual: i64,
    pub max: i64,
    pub warning: bool,
    /// `actual / max * 100`, unrounded. Falls outside 0-100 when raw
    /// inputs are out of their declared range.
    pub normalized: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    /// One entry per category, in report order.
    pub categories: Vec<CategoryScore>,
    pub total_score: i64,
    pub total_max: i64,
    /// Total as a percentage of [`TOTAL_MAX`], rounded to one decimal.
    pub total_percent: f64,
    /// Labels of warned categories, in report order.
    pub warning_labels: Vec<String>,
}

impl ScoreReport {
    pub fn category(&self, category: Category) -> &CategoryScore {
        &self.categories[category as usize]
    }

    /// `"0.0"` ... `"100.0"`.
    pub fn total_percent_text(&self) -> String {
        format!("{:.1}", self.total_percent)
    }

    pub fn normalized_values(&self) -> [f64; 6] {
        Category::ALL.map(|c| self.category(c).normalized)
    }

    pub fn warnings(&self) -> [bool; 6] {
        Category::ALL.map(|c| self.category(c).warning)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warning_labels.is_empty()
    }
}

/// Scores every category. Deterministic and side-effect free: calling it
/// twice on the same assessment gives identical reports.
pub fn evaluate(assessment: &Assessment) -> ScoreReport {
    let categories: Vec<CategoryScore> = RULES
        .iter()
        .map(|rule| {
            let category = rule.category();
            let actual = rule.actual(assessment);
            let max = category.max_score();
            CategoryScore {
                category,
                label: category.label().to_string(),
                actual,
                max,
                warning: rule.warning(assessment),
                normalized: actual as f64 / max as f64 * 100.0,
            }
        })
        .collect();

    let total_score: i64 = categories.iter().map(|c| c.actual).sum();
    let warning_labels = categories
        .iter()
        .filter(|c| c.warning)
        .map(|c| c.label.clone())
        .collect();

    ScoreReport {
        categories,
        total_score,
        total_max: TOTAL_MAX,
        total_percent: round_one_decimal(total_score as f64 / TOTAL_MAX as f64 * 100.0),
        warning_labels,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
