use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("failed to load watermark at {path}: {source}")]
    WatermarkLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("watermark at {path} did not load within {timeout:?}")]
    WatermarkTimeout { path: PathBuf, timeout: Duration },

    #[error("invalid watermark image: {0}")]
    InvalidWatermark(String),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
