//! The export step: capture the chart and summary, stamp the watermark,
//! encode PNG.
//!
//! Runs as one async unit with no cancellation. The only suspension is
//! loading the watermark, which is bounded by a timeout so a missing or
//! stalled asset fails the export instead of hanging it. The read runs on
//! its own detached thread; a stalled one is abandoned and never holds up
//! runtime shutdown.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::{ImageFormat, RgbaImage};
use tokio::sync::oneshot;

use oralcare_core::models::assessment::Assessment;
use oralcare_instruments::engine::ScoreReport;

use crate::chart::RadarChart;
use crate::error::ExportError;
use crate::raster::{RadarRasterizer, Surface};
use crate::render::render_summary;
use crate::styles::ChartStyles;
use crate::watermark::{WatermarkPlacement, apply_watermark, decode_watermark};

const FILENAME_PREFIX: &str = "oral_hygiene_result_";
const FALLBACK_NAME: &str = "patient";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub watermark_path: PathBuf,
    pub watermark_timeout: Duration,
    pub placement: WatermarkPlacement,
    pub styles: ChartStyles,
}

impl ExportOptions {
    pub fn new(watermark_path: impl Into<PathBuf>) -> Self {
        Self {
            watermark_path: watermark_path.into(),
            watermark_timeout: Duration::from_secs(10),
            placement: WatermarkPlacement::default(),
            styles: ChartStyles::default(),
        }
    }
}

/// The finished, downloadable report.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub filename: String,
    pub png: Vec<u8>,
    pub chart: RadarChart,
    pub summary: String,
}

impl ReportArtifact {
    /// Name of the plain-text copy of the summary, next to the image.
    pub fn summary_filename(&self) -> String {
        Path::new(&self.filename)
            .with_extension("txt")
            .to_string_lossy()
            .into_owned()
    }
}

/// `oral_hygiene_result_<name>.png`, or `..._patient.png` when the name is
/// empty. Path separators and control characters become `_`.
pub fn export_filename(patient_name: &str) -> String {
    let name = if patient_name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        patient_name
            .chars()
            .map(|c| {
                if matches!(c, '/' | '\\') || c.is_control() {
                    '_'
                } else {
                    c
                }
            })
            .collect()
    };
    format!("{FILENAME_PREFIX}{name}.png")
}

/// Reads the watermark asset, failing if it does not arrive in time.
pub async fn load_watermark(path: &Path, timeout: Duration) -> Result<RgbaImage, ExportError> {
    let (tx, rx) = oneshot::channel();
    let source_path = path.to_path_buf();
    std::thread::Builder::new()
        .name("watermark-read".to_string())
        .spawn(move || {
            // The receiver is gone once the export has timed out.
            let _ = tx.send(std::fs::read(source_path));
        })?;

    let bytes = match tokio::time::timeout(timeout, rx).await {
        Ok(Ok(Ok(bytes))) => bytes,
        Ok(Ok(Err(source))) => {
            return Err(ExportError::WatermarkLoad {
                path: path.to_path_buf(),
                source,
            });
        }
        Ok(Err(_)) => {
            return Err(ExportError::WatermarkLoad {
                path: path.to_path_buf(),
                source: std::io::Error::other("watermark reader exited without a result"),
            });
        }
        Err(_) => {
            tracing::warn!(path = %path.display(), ?timeout, "watermark read abandoned");
            return Err(ExportError::WatermarkTimeout {
                path: path.to_path_buf(),
                timeout,
            });
        }
    };
    decode_watermark(&bytes)
}

pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Builds the report image with the default rasterizer.
pub async fn export_report(
    assessment: &Assessment,
    report: &ScoreReport,
    options: &ExportOptions,
) -> Result<ReportArtifact, ExportError> {
    let rasterizer = RadarRasterizer::new(&options.styles);
    export_with(&rasterizer, assessment, report, options).await
}

/// Builds the report image, capturing the chart through `surface`.
pub async fn export_with(
    surface: &dyn Surface,
    assessment: &Assessment,
    report: &ScoreReport,
    options: &ExportOptions,
) -> Result<ReportArtifact, ExportError> {
    let chart = RadarChart::from_report(report, &options.styles);
    let summary = render_summary(assessment, report)?;
    let mut canvas = surface.capture(&chart, &summary);

    let watermark = load_watermark(&options.watermark_path, options.watermark_timeout).await?;
    apply_watermark(&mut canvas, &watermark, options.placement)?;

    let png = encode_png(&canvas)?;
    let filename = export_filename(&assessment.patient.name);
    tracing::info!(
        assessment_id = %assessment.id,
        filename = %filename,
        bytes = png.len(),
        "report exported"
    );

    Ok(ReportArtifact {
        filename,
        png,
        chart,
        summary,
    })
}

/// Writes the image and its summary text into `dir`. Returns the image path.
pub async fn save_artifact(artifact: &ReportArtifact, dir: &Path) -> Result<PathBuf, ExportError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(&artifact.filename);
    tokio::fs::write(&path, &artifact.png).await?;
    tokio::fs::write(dir.join(artifact.summary_filename()), &artifact.summary).await?;
    Ok(path)
}
