use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The kind of value a subscale records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Likert-style clinical rating (e.g., 0-3).
    Rating,
    /// Probing depth in millimetres, banded into points.
    Depth,
}

/// Defines the declared range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const fn integer(min: i32, max: i32) -> Self {
        Self {
            min: min as f64,
            max: max as f64,
            step: Some(1.0),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// One scored site within a category (a tooth surface, a probing site...).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
}

/// Clinical meaning of one rating value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreLevel {
    pub value: i32,
    pub description: String,
}

/// A scored category: its sites, composite range, and rating criteria.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub composite_range: ScoreRange,
    pub levels: Vec<ScoreLevel>,
    pub description: Option<String>,
}

/// A raw value read off an assessment, keyed by subscale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub subscale_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub subscale_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}

pub(crate) fn level(value: i32, description: &str) -> ScoreLevel {
    ScoreLevel {
        value,
        description: description.to_string(),
    }
}

pub(crate) fn rating(id: String, name: String, range: ScoreRange) -> Subscale {
    Subscale {
        id,
        name,
        score_type: ScoreType::Rating,
        range,
    }
}
