use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;

use super::CategoryRule;
use crate::scoring::{Domain, ScoreEntry, ScoreRange, level, rating};

/// Dentin sensitivity and cervical abrasion, rated 0-3.
pub struct Sensitivity;

impl CategoryRule for Sensitivity {
    fn category(&self) -> Category {
        Category::Sensitivity
    }

    fn domain(&self) -> Domain {
        let range = ScoreRange::integer(0, 3);
        Domain {
            id: Category::Sensitivity.id().to_string(),
            name: Category::Sensitivity.label().to_string(),
            subscales: vec![rating("sensitivity".to_string(), "Sensitivity".to_string(), range)],
            composite_range: range,
            levels: vec![
                level(0, "Neither advanced cervical abrasion nor sensitivity"),
                level(1, "Sensitivity only"),
                level(2, "Cervical abrasion without sensitivity"),
                level(3, "Both cervical abrasion and sensitivity"),
            ],
            description: None,
        }
    }

    fn entries(&self, assessment: &Assessment) -> Vec<ScoreEntry> {
        vec![ScoreEntry {
            subscale_id: "sensitivity".to_string(),
            value: f64::from(assessment.sensitivity.score),
        }]
    }

    fn actual(&self, assessment: &Assessment) -> i64 {
        i64::from(assessment.sensitivity.score)
    }

    fn warning(&self, assessment: &Assessment) -> bool {
        assessment.sensitivity.score >= 2
    }
}
