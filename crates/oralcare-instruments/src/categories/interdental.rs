use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;
use oralcare_core::teeth::INTERDENTAL_SITES;

use super::{CategoryRule, sum};
use crate::scoring::{Domain, ScoreEntry, ScoreRange, level, rating};

const WARNING_AT_LEAST: i32 = 2;

/// Interdental space at four posterior sites, each rated 0-3.
pub struct Interdental;

impl CategoryRule for Interdental {
    fn category(&self) -> Category {
        Category::Interdental
    }

    fn domain(&self) -> Domain {
        let range = ScoreRange::integer(0, 3);
        Domain {
            id: Category::Interdental.id().to_string(),
            name: Category::Interdental.label().to_string(),
            subscales: INTERDENTAL_SITES
                .iter()
                .map(|site| rating(format!("interdental_{site}"), format!("#{site}"), range))
                .collect(),
            composite_range: ScoreRange::integer(0, 12),
            levels: vec![
                level(0, "No recession; interdental brush hard to insert, floss usable"),
                level(1, "XS/S interdental brush fits"),
                level(2, "M interdental brush fits, or food impaction present"),
                level(3, "L interdental brush fits, or black triangle observed"),
            ],
            description: None,
        }
    }

    fn entries(&self, assessment: &Assessment) -> Vec<ScoreEntry> {
        INTERDENTAL_SITES
            .iter()
            .zip(assessment.interdental.scores)
            .map(|(site, value)| ScoreEntry {
                subscale_id: format!("interdental_{site}"),
                value: f64::from(value),
            })
            .collect()
    }

    fn actual(&self, assessment: &Assessment) -> i64 {
        sum(&assessment.interdental.scores)
    }

    fn warning(&self, assessment: &Assessment) -> bool {
        assessment
            .interdental
            .scores
            .iter()
            .any(|&v| v >= WARNING_AT_LEAST)
    }
}
