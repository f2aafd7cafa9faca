use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{field} index {index} is out of bounds (expected < {len})")]
    IndexOutOfBounds {
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("unknown tooth #{tooth} for {field}")]
    UnknownTooth { field: &'static str, tooth: u8 },

    #[error("unknown interdental site: {0}")]
    UnknownSite(String),

    #[error("invalid page index: {0}")]
    InvalidPage(usize),
}
