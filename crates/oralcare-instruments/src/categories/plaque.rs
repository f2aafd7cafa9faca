use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;
use oralcare_core::teeth::{PLAQUE_MAXILLARY, PLAQUE_TEETH};

use super::{CategoryRule, sum};
use crate::scoring::{Domain, ScoreEntry, ScoreRange, level, rating};

/// Warning when the plaque sum exceeds this value.
const WARNING_ABOVE: i64 = 6;

/// Plaque deposition on six index surfaces, each rated 0-3.
pub struct Plaque;

impl CategoryRule for Plaque {
    fn category(&self) -> Category {
        Category::Plaque
    }

    fn domain(&self) -> Domain {
        let range = ScoreRange::integer(0, 3);
        let subscales = PLAQUE_TEETH
            .iter()
            .enumerate()
            .map(|(i, tooth)| {
                let arch = if i < PLAQUE_MAXILLARY {
                    "maxillary"
                } else {
                    "mandibular"
                };
                rating(
                    format!("plaque_{tooth}"),
                    format!("#{tooth} ({arch})"),
                    range,
                )
            })
            .collect();

        Domain {
            id: Category::Plaque.id().to_string(),
            name: Category::Plaque.label().to_string(),
            subscales,
            composite_range: ScoreRange::integer(0, 18),
            levels: vec![
                level(1, "Deposit along the gingival margin only"),
                level(2, "Deposit extending wider than the gingival margin"),
                level(3, "Deposit over the whole buccal surface"),
            ],
            description: Some("Select the plaque deposition level for each surface".to_string()),
        }
    }

    fn entries(&self, assessment: &Assessment) -> Vec<ScoreEntry> {
        PLAQUE_TEETH
            .iter()
            .zip(assessment.plaque.scores)
            .map(|(tooth, value)| ScoreEntry {
                subscale_id: format!("plaque_{tooth}"),
                value: f64::from(value),
            })
            .collect()
    }

    fn actual(&self, assessment: &Assessment) -> i64 {
        sum(&assessment.plaque.scores)
    }

    fn warning(&self, assessment: &Assessment) -> bool {
        self.actual(assessment) > WARNING_ABOVE
    }
}
