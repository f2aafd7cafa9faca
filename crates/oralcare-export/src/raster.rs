//! Software rasterizer for the report canvas.
//!
//! The chart area comes first: grid rings, spokes, the filled data
//! polygon, its outline, the per-axis points and the axis names. The
//! rendered summary text follows below it, line by line.

use std::f64::consts::{FRAC_PI_2, TAU};

use image::{Rgba, RgbaImage};

use crate::chart::RadarChart;
use crate::styles::{ChartStyles, Color};
use crate::text::{GLYPH_SIZE, draw_text, text_width};

type Point = (f64, f64);

/// Produces the raster surface for a rendered chart and its summary.
pub trait Surface: Send + Sync {
    fn capture(&self, chart: &RadarChart, summary: &str) -> RgbaImage;
}

/// Draws the chart centered in the top area of an opaque canvas, with
/// the summary block underneath.
pub struct RadarRasterizer<'a> {
    styles: &'a ChartStyles,
}

impl<'a> RadarRasterizer<'a> {
    pub fn new(styles: &'a ChartStyles) -> Self {
        Self { styles }
    }

    pub fn center(&self) -> Point {
        (
            f64::from(self.styles.canvas_width) / 2.0,
            f64::from(self.styles.canvas_height) / 2.0,
        )
    }

    pub fn radius(&self) -> f64 {
        f64::from(self.styles.canvas_width.min(self.styles.canvas_height)) * self.styles.radius_ratio
    }

    /// Canvas position of `value` on axis `index` of `count`. Axis 0 points
    /// straight up; the rest follow clockwise.
    pub fn vertex(&self, chart: &RadarChart, index: usize, count: usize, value: f64) -> Point {
        let (cx, cy) = self.center();
        let r = self.radius() * chart.scale.fraction(value);
        let angle = -FRAC_PI_2 + TAU * index as f64 / count as f64;
        (cx + r * angle.cos(), cy + r * angle.sin())
    }

    fn line_height(&self) -> u32 {
        GLYPH_SIZE * self.styles.text_scale.max(1) + self.styles.line_spacing
    }

    /// Height of the block holding `summary`; zero for empty text.
    pub fn summary_height(&self, summary: &str) -> u32 {
        let lines = summary.lines().count() as u32;
        if lines == 0 {
            return 0;
        }
        self.styles.summary_padding * 2 + lines * self.line_height()
    }

    fn draw_axis_names(&self, canvas: &mut RgbaImage, chart: &RadarChart) {
        let scale = self.styles.label_scale.max(1);
        let glyph = f64::from(GLYPH_SIZE * scale);
        let (cx, cy) = self.center();
        let radius = self.radius();
        let count = chart.axes.len();
        let canvas_width = i64::from(canvas.width());

        for (i, axis) in chart.axes.iter().enumerate() {
            let (tx, ty) = self.vertex(chart, i, count, chart.scale.max);
            let (ux, uy) = ((tx - cx) / radius, (ty - cy) / radius);
            let (ax, ay) = (tx + ux * glyph, ty + uy * glyph);

            let width = i64::from(text_width(&axis.name, scale));
            let left = if ux > 0.1 {
                ax.round() as i64
            } else if ux < -0.1 {
                ax.round() as i64 - width
            } else {
                ax.round() as i64 - width / 2
            };
            let left = left.clamp(0, (canvas_width - width).max(0));
            let top = (ay - glyph / 2.0).round() as i64;
            draw_text(canvas, left, top, &axis.name, axis.point_color, scale);
        }
    }

    fn draw_summary(&self, canvas: &mut RgbaImage, summary: &str) {
        let styles = self.styles;
        let padding = i64::from(styles.summary_padding);
        let line_height = i64::from(self.line_height());
        let mut top = i64::from(styles.canvas_height) + padding;
        for line in summary.lines() {
            draw_text(canvas, padding, top, line, styles.text_color, styles.text_scale);
            top += line_height;
        }
    }
}

impl Surface for RadarRasterizer<'_> {
    fn capture(&self, chart: &RadarChart, summary: &str) -> RgbaImage {
        let styles = self.styles;
        let mut canvas = RgbaImage::from_pixel(
            styles.canvas_width,
            styles.canvas_height + self.summary_height(summary),
            opaque(styles.background),
        );
        self.draw_summary(&mut canvas, summary);

        let count = chart.axes.len();
        if count < 3 {
            return canvas;
        }

        for tick in chart.scale.ticks() {
            let ring: Vec<Point> = (0..count)
                .map(|i| self.vertex(chart, i, count, tick))
                .collect();
            draw_closed_path(&mut canvas, &ring, styles.grid_color, 1.0);
        }
        for i in 0..count {
            let tip = self.vertex(chart, i, count, chart.scale.max);
            draw_line(&mut canvas, self.center(), tip, styles.grid_color, 1.0);
        }

        let data: Vec<Point> = chart
            .axes
            .iter()
            .enumerate()
            .map(|(i, axis)| self.vertex(chart, i, count, axis.value))
            .collect();
        fill_polygon(&mut canvas, &data, chart.fill_color);
        draw_closed_path(&mut canvas, &data, chart.border_color, chart.border_width);
        for (point, axis) in data.iter().zip(&chart.axes) {
            fill_circle(&mut canvas, *point, styles.point_radius, axis.point_color);
        }
        self.draw_axis_names(&mut canvas, chart);

        canvas
    }
}

fn opaque(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

/// Source-over blend of `color` onto one pixel. Out-of-bounds is a no-op.
pub(crate) fn blend(canvas: &mut RgbaImage, x: i64, y: i64, color: [u8; 3], alpha: f64) {
    if x < 0 || y < 0 || x >= i64::from(canvas.width()) || y >= i64::from(canvas.height()) {
        return;
    }
    let alpha = alpha.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in pixel.0.iter_mut().zip(color) {
        *dst = (f64::from(src) * alpha + f64::from(*dst) * (1.0 - alpha)).round() as u8;
    }
    pixel.0[3] = (255.0 * alpha + f64::from(pixel.0[3]) * (1.0 - alpha)).round() as u8;
}

fn paint(canvas: &mut RgbaImage, x: i64, y: i64, color: Color) {
    blend(canvas, x, y, [color.r, color.g, color.b], f64::from(color.alpha));
}

fn draw_line(canvas: &mut RgbaImage, from: Point, to: Point, color: Color, width: f64) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let p = (from.0 + dx * t, from.1 + dy * t);
        if width <= 1.0 {
            paint(canvas, p.0.round() as i64, p.1.round() as i64, color);
        } else {
            fill_circle(canvas, p, width / 2.0, color);
        }
    }
}

fn draw_closed_path(canvas: &mut RgbaImage, points: &[Point], color: Color, width: f64) {
    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        draw_line(canvas, from, to, color, width);
    }
}

fn fill_circle(canvas: &mut RgbaImage, center: Point, radius: f64, color: Color) {
    let (cx, cy) = center;
    let r2 = radius * radius;
    for y in (cy - radius).floor() as i64..=(cy + radius).ceil() as i64 {
        for x in (cx - radius).floor() as i64..=(cx + radius).ceil() as i64 {
            let (px, py) = (x as f64 - cx, y as f64 - cy);
            if px * px + py * py <= r2 {
                paint(canvas, x, y, color);
            }
        }
    }
}

/// Even-odd scanline fill, sampling pixel centers.
fn fill_polygon(canvas: &mut RgbaImage, points: &[Point], color: Color) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min).floor() as i64;
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max).ceil() as i64;

    let mut crossings = Vec::new();
    for y in min_y..=max_y {
        let sy = y as f64 + 0.5;
        crossings.clear();
        for (i, &(x0, y0)) in points.iter().enumerate() {
            let (x1, y1) = points[(i + 1) % points.len()];
            if (y0 <= sy && sy < y1) || (y1 <= sy && sy < y0) {
                crossings.push(x0 + (sy - y0) / (y1 - y0) * (x1 - x0));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil() as i64;
            let end = (pair[1] - 0.5).floor() as i64;
            for x in start..=end {
                paint(canvas, x, y, color);
            }
        }
    }
}
