//! oralcare-export
//!
//! Turns a scored assessment into the downloadable report image: radar
//! chart contract and rasterizer, the summary text rendered from a Tera
//! template and drawn under the chart, and watermark compositing.

pub mod capture;
pub mod chart;
pub mod error;
pub mod raster;
pub mod render;
pub mod styles;
pub mod text;
pub mod watermark;
