use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;

use super::CategoryRule;
use crate::scoring::{Domain, ScoreEntry, ScoreRange, level, rating};

/// Dental arch size, rated 0-2. Only a small arch (2) is flagged.
pub struct Arch;

impl CategoryRule for Arch {
    fn category(&self) -> Category {
        Category::Arch
    }

    fn domain(&self) -> Domain {
        let range = ScoreRange::integer(0, 2);
        Domain {
            id: Category::Arch.id().to_string(),
            name: Category::Arch.label().to_string(),
            subscales: vec![rating("arch".to_string(), "Arch size".to_string(), range)],
            composite_range: range,
            levels: vec![
                level(0, "Large"),
                level(1, "Medium"),
                level(2, "Small (special care needed)"),
            ],
            description: None,
        }
    }

    fn entries(&self, assessment: &Assessment) -> Vec<ScoreEntry> {
        vec![ScoreEntry {
            subscale_id: "arch".to_string(),
            value: f64::from(assessment.arch.score),
        }]
    }

    fn actual(&self, assessment: &Assessment) -> i64 {
        i64::from(assessment.arch.score)
    }

    fn warning(&self, assessment: &Assessment) -> bool {
        assessment.arch.score == 2
    }
}
