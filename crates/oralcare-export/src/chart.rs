//! Data handed to the radar chart renderer.

use serde::{Deserialize, Serialize};

use oralcare_instruments::engine::ScoreReport;

use crate::styles::{ChartStyles, Color};

/// Fixed radial scale: 0 to 100 in steps of 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for RadialScale {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 10.0,
        }
    }
}

impl RadialScale {
    /// Grid values above `min`, up to and including `max`.
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (1..=count)
            .map(|i| self.min + self.step * i as f64)
            .collect()
    }

    /// Position of `value` along an axis, clamped to `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    /// Category label as the chart library shows it, marker included.
    pub label: String,
    /// Bare category label.
    pub name: String,
    pub value: f64,
    pub warning: bool,
    pub point_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub title: String,
    pub axes: Vec<RadarAxis>,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub scale: RadialScale,
}

impl RadarChart {
    /// One axis per category, in report order. Warned axes get the
    /// warning marker on their label and the warning point color.
    pub fn from_report(report: &ScoreReport, styles: &ChartStyles) -> Self {
        let axes = report
            .categories
            .iter()
            .map(|score| {
                let (label, point_color) = if score.warning {
                    (
                        format!("{} {}", score.label, styles.warning_marker),
                        styles.warning_point_color,
                    )
                } else {
                    (score.label.clone(), styles.point_color)
                };
                RadarAxis {
                    label,
                    name: score.label.clone(),
                    value: score.normalized,
                    warning: score.warning,
                    point_color,
                }
            })
            .collect();

        Self {
            title: "Oral health score (scaled to 100)".to_string(),
            axes,
            fill_color: styles.fill_color,
            border_color: styles.border_color,
            border_width: styles.border_width,
            scale: RadialScale::default(),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.axes.iter().map(|a| a.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.axes.iter().map(|a| a.value).collect()
    }
}
