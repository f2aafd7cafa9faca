use oralcare_core::models::assessment::Assessment;
use oralcare_core::models::category::Category;
use oralcare_core::teeth::{PERIO_TEETH, ProbingSite};

use super::CategoryRule;
use crate::parse::parse_leading_int;
use crate::scoring::{Domain, ScoreEntry, ScoreRange, ScoreType, Subscale, level};

/// Any single depth above this raises the warning.
const WARNING_DEPTH_ABOVE: i32 = 5;

/// Probing depths at 24 buccal sites, banded into 0/1/2 points.
pub struct Perio;

/// Points for one probing depth: up to 3 mm is 0, 4-5 mm is 1, 6 mm and
/// deeper is 2.
pub fn probing_points(depth: i32) -> i64 {
    match depth {
        ..=3 => 0,
        4..=5 => 1,
        _ => 2,
    }
}

fn subscale_id(tooth: u8, site: ProbingSite) -> String {
    format!("perio_{tooth}_{}", site.name())
}

impl CategoryRule for Perio {
    fn category(&self) -> Category {
        Category::Perio
    }

    fn domain(&self) -> Domain {
        let range = ScoreRange::integer(0, 15);
        let subscales = PERIO_TEETH
            .iter()
            .flat_map(|&tooth| {
                ProbingSite::ALL.into_iter().map(move |site| Subscale {
                    id: subscale_id(tooth, site),
                    name: format!("#{tooth} {}", site.name()),
                    score_type: ScoreType::Depth,
                    range,
                })
            })
            .collect();

        Domain {
            id: Category::Perio.id().to_string(),
            name: Category::Perio.label().to_string(),
            subscales,
            composite_range: ScoreRange::integer(0, 48),
            levels: vec![
                level(0, "3 mm or less"),
                level(1, "4-5 mm"),
                level(2, "6 mm or more"),
            ],
            description: Some(
                "Enter buccal probing depths in mm; points are derived automatically".to_string(),
            ),
        }
    }

    fn entries(&self, assessment: &Assessment) -> Vec<ScoreEntry> {
        PERIO_TEETH
            .iter()
            .flat_map(|&tooth| ProbingSite::ALL.into_iter().map(move |site| (tooth, site)))
            .zip(assessment.perio.depths.iter())
            .filter_map(|((tooth, site), raw)| {
                parse_leading_int(raw).map(|depth| ScoreEntry {
                    subscale_id: subscale_id(tooth, site),
                    value: f64::from(depth),
                })
            })
            .collect()
    }

    fn actual(&self, assessment: &Assessment) -> i64 {
        assessment
            .perio
            .depths
            .iter()
            .filter_map(|raw| parse_leading_int(raw))
            .map(probing_points)
            .sum()
    }

    fn warning(&self, assessment: &Assessment) -> bool {
        assessment
            .perio
            .depths
            .iter()
            .filter_map(|raw| parse_leading_int(raw))
            .any(|depth| depth > WARNING_DEPTH_ABOVE)
    }
}
