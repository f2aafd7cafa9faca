use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Patient identity as typed on the intake page. Free-form and unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInfo {
    pub name: String,
    pub chart_number: String,
    /// Examination date as entered; no calendar parsing is applied.
    pub date: String,
}
