use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;

use super::CategoryRule;
use crate::scoring::{Domain, ScoreEntry, ScoreRange, level, rating};

/// Hand motor function, rated 0 (good) or 1 (poor).
pub struct Motor;

impl CategoryRule for Motor {
    fn category(&self) -> Category {
        Category::Motor
    }

    fn domain(&self) -> Domain {
        let range = ScoreRange::integer(0, 1);
        Domain {
            id: Category::Motor.id().to_string(),
            name: Category::Motor.label().to_string(),
            subscales: vec![rating(
                "motor".to_string(),
                "Hand motor function".to_string(),
                range,
            )],
            composite_range: range,
            levels: vec![level(0, "Good"), level(1, "Poor (attention needed)")],
            description: None,
        }
    }

    fn entries(&self, assessment: &Assessment) -> Vec<ScoreEntry> {
        vec![ScoreEntry {
            subscale_id: "motor".to_string(),
            value: f64::from(assessment.motor.score),
        }]
    }

    fn actual(&self, assessment: &Assessment) -> i64 {
        i64::from(assessment.motor.score)
    }

    fn warning(&self, assessment: &Assessment) -> bool {
        assessment.motor.score == 1
    }
}
