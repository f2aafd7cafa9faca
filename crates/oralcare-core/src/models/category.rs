use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sum of all category maxima.
pub const TOTAL_MAX: i64 = 84;

/// One of the six scored areas of the assessment.
///
/// Declaration order is the canonical report order: plaque, perio,
/// interdental, sensitivity, arch, motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Plaque,
    Perio,
    Interdental,
    Sensitivity,
    Arch,
    Motor,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Plaque,
        Category::Perio,
        Category::Interdental,
        Category::Sensitivity,
        Category::Arch,
        Category::Motor,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Plaque => "plaque",
            Category::Perio => "perio",
            Category::Interdental => "interdental",
            Category::Sensitivity => "sensitivity",
            Category::Arch => "arch",
            Category::Motor => "motor",
        }
    }

    /// Human-readable name used in warning summaries and chart axes.
    pub fn label(self) -> &'static str {
        match self {
            Category::Plaque => "Plaque control",
            Category::Perio => "Periodontal health",
            Category::Interdental => "Interdental care",
            Category::Sensitivity => "Sensitivity",
            Category::Arch => "Arch size",
            Category::Motor => "Hand motor function",
        }
    }

    /// Fixed clinical maximum. These never change at runtime.
    pub fn max_score(self) -> i64 {
        match self {
            Category::Plaque => 18,
            Category::Perio => 48,
            Category::Interdental => 12,
            Category::Sensitivity => 3,
            Category::Arch => 2,
            Category::Motor => 1,
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
