//! oralcare-core
//!
//! Pure domain types for the oral hygiene assessment: the `Assessment`
//! aggregate, category constants, the clinical tooth map, and the wizard
//! state machine that drives data collection. No I/O.

pub mod error;
pub mod models;
pub mod teeth;
pub mod wizard;
