use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::patient::PatientInfo;
use crate::error::CoreError;

pub const PLAQUE_SURFACES: usize = 6;
pub const PERIO_ENTRIES: usize = 24;
pub const INTERDENTAL_ENTRIES: usize = 4;

/// Per-surface plaque ratings, 0-3 each. Index order follows
/// [`crate::teeth::PLAQUE_TEETH`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlaqueInput {
    pub scores: [i32; PLAQUE_SURFACES],
}

/// Raw probing-depth text for 8 teeth x 3 sites. Entries are kept exactly
/// as typed; interpretation happens in the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PerioInput {
    pub depths: [String; PERIO_ENTRIES],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterdentalInput {
    pub scores: [i32; INTERDENTAL_ENTRIES],
}

/// A single 0-3 rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SensitivityInput {
    pub score: i32,
}

/// A single 0-2 rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArchInput {
    pub score: i32,
}

/// A single 0-1 rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MotorInput {
    pub score: i32,
}

/// Aggregate root for one patient's questionnaire.
///
/// Every raw field can be changed at any time and in any order. Setters
/// store values as given: no range checks are applied here, so an
/// out-of-range score flows straight into the category sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub patient: PatientInfo,
    pub plaque: PlaqueInput,
    pub perio: PerioInput,
    pub interdental: InterdentalInput,
    pub sensitivity: SensitivityInput,
    pub arch: ArchInput,
    pub motor: MotorInput,
    pub started_at: jiff::Timestamp,
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new()
    }
}

impl Assessment {
    /// An empty assessment: all ratings 0, all probing depths blank.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            patient: PatientInfo::default(),
            plaque: PlaqueInput::default(),
            perio: PerioInput::default(),
            interdental: InterdentalInput::default(),
            sensitivity: SensitivityInput::default(),
            arch: ArchInput::default(),
            motor: MotorInput::default(),
            started_at: jiff::Timestamp::now(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.patient.name = name.into();
    }

    pub fn set_chart_number(&mut self, chart_number: impl Into<String>) {
        self.patient.chart_number = chart_number.into();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.patient.date = date.into();
    }

    pub fn set_plaque(&mut self, index: usize, level: i32) -> Result<(), CoreError> {
        let slot = slot(&mut self.plaque.scores, "plaque", index)?;
        *slot = level;
        tracing::debug!(index, level, "plaque score set");
        Ok(())
    }

    pub fn set_perio(&mut self, index: usize, depth: impl Into<String>) -> Result<(), CoreError> {
        let slot = slot(&mut self.perio.depths, "perio", index)?;
        *slot = depth.into();
        tracing::debug!(index, depth = %slot, "probing depth set");
        Ok(())
    }

    pub fn set_interdental(&mut self, index: usize, score: i32) -> Result<(), CoreError> {
        let slot = slot(&mut self.interdental.scores, "interdental", index)?;
        *slot = score;
        tracing::debug!(index, score, "interdental score set");
        Ok(())
    }

    pub fn set_sensitivity(&mut self, score: i32) {
        self.sensitivity.score = score;
    }

    pub fn set_arch(&mut self, score: i32) {
        self.arch.score = score;
    }

    pub fn set_motor(&mut self, score: i32) {
        self.motor.score = score;
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn slot<'a, T, const N: usize>(
    values: &'a mut [T; N],
    field: &'static str,
    index: usize,
) -> Result<&'a mut T, CoreError> {
    values.get_mut(index).ok_or(CoreError::IndexOutOfBounds {
        field,
        index,
        len: N,
    })
}
