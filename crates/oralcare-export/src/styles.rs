use serde::{Deserialize, Serialize};

/// An RGBA color with a fractional alpha, as chart libraries take it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub alpha: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// CSS notation, e.g. `rgba(255, 99, 132, 0.2)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

/// Visual settings for the radar chart and the captured canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyles {
    /// Canvas size in pixels.
    pub canvas_width: u32,
    pub canvas_height: u32,

    pub background: Color,
    pub grid_color: Color,

    /// Area under the data polygon.
    pub fill_color: Color,

    /// Data polygon outline.
    pub border_color: Color,
    pub border_width: f64,

    pub point_color: Color,
    pub warning_point_color: Color,
    pub point_radius: f64,

    /// Chart radius as a fraction of the shorter canvas side.
    pub radius_ratio: f64,

    /// Appended to the axis label of a warned category.
    pub warning_marker: String,

    /// Summary lines and axis names.
    pub text_color: Color,
    /// Glyph magnification for the summary; 1 draws 8x8 pixel characters.
    pub text_scale: u32,
    /// Glyph magnification for axis names.
    pub label_scale: u32,
    /// Blank pixels between summary lines.
    pub line_spacing: u32,
    /// Margin around the summary block under the chart.
    pub summary_padding: u32,
}

impl Default for ChartStyles {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 800,
            background: Color::WHITE,
            grid_color: Color::rgb(220, 220, 220),
            fill_color: Color::rgba(255, 99, 132, 0.2),
            border_color: Color::rgba(255, 99, 132, 1.0),
            border_width: 2.0,
            point_color: Color::BLACK,
            warning_point_color: Color::RED,
            point_radius: 4.0,
            radius_ratio: 0.4,
            warning_marker: "\u{26a0}\u{fe0f}".to_string(),
            text_color: Color::BLACK,
            text_scale: 2,
            label_scale: 1,
            line_spacing: 6,
            summary_padding: 24,
        }
    }
}
