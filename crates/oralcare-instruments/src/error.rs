use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
