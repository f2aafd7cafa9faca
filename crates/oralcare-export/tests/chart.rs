use oralcare_core::models::assessment::Assessment;
use oralcare_export::chart::{RadarChart, RadialScale};
use oralcare_export::raster::{RadarRasterizer, Surface};
use oralcare_export::styles::{ChartStyles, Color};
use oralcare_instruments::engine::evaluate;

fn warned_assessment() -> Assessment {
    let mut a = Assessment::new();
    a.set_arch(2);
    a.set_sensitivity(1);
    a
}

#[test]
fn scale_ticks_are_every_ten() {
    let scale = RadialScale::default();
    let ticks = scale.ticks();
    assert_eq!(ticks.len(), 10);
    assert_eq!(ticks[0], 10.0);
    assert_eq!(ticks[9], 100.0);
    assert_eq!(scale.fraction(-20.0), 0.0);
    assert_eq!(scale.fraction(50.0), 0.5);
    assert_eq!(scale.fraction(250.0), 1.0);
}

#[test]
fn warned_axes_get_marker_and_warning_color() {
    let styles = ChartStyles::default();
    let report = evaluate(&warned_assessment());
    let chart = RadarChart::from_report(&report, &styles);

    let labels = chart.labels();
    assert_eq!(labels.len(), 6);
    assert_eq!(labels[4], "Arch size \u{26a0}\u{fe0f}");
    assert_eq!(labels[3], "Sensitivity");

    assert_eq!(chart.axes[4].point_color, Color::RED);
    assert_eq!(chart.axes[3].point_color, Color::BLACK);
    assert_eq!(chart.values()[4], 100.0);
    assert!((chart.values()[3] - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn chart_styling_follows_defaults() {
    let styles = ChartStyles::default();
    let chart = RadarChart::from_report(&evaluate(&Assessment::new()), &styles);
    assert_eq!(chart.fill_color.css(), "rgba(255, 99, 132, 0.2)");
    assert_eq!(chart.border_color.css(), "rgba(255, 99, 132, 1)");
    assert_eq!(chart.border_width, 2.0);
    assert_eq!(chart.scale, RadialScale::default());
}

#[test]
fn rasterized_canvas_matches_styles() {
    let styles = ChartStyles {
        canvas_width: 300,
        canvas_height: 200,
        ..ChartStyles::default()
    };
    let chart = RadarChart::from_report(&evaluate(&Assessment::new()), &styles);
    let rasterizer = RadarRasterizer::new(&styles);

    let bare = rasterizer.capture(&chart, "");
    assert_eq!(bare.dimensions(), (300, 200));

    let canvas = rasterizer.capture(&chart, "Patient: Kim\nTotal: 0 / 84 (0.0%)");
    // Two 16px glyph rows plus spacing and padding.
    assert_eq!(rasterizer.summary_height("a\nb"), 2 * 24 + 2 * 22);
    assert_eq!(canvas.dimensions(), (300, 200 + 2 * 24 + 2 * 22));
    // Corners are background.
    assert_eq!(canvas.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(canvas.get_pixel(299, canvas.height() - 1).0, [255, 255, 255, 255]);
}

#[test]
fn summary_text_is_drawn_below_the_chart() {
    let styles = ChartStyles::default();
    let chart = RadarChart::from_report(&evaluate(&Assessment::new()), &styles);
    let rasterizer = RadarRasterizer::new(&styles);

    let kim = rasterizer.capture(&chart, "Patient: Kim");
    let lee = rasterizer.capture(&chart, "Patient: Lee");

    let below_chart = |image: &image::RgbaImage| {
        image
            .enumerate_pixels()
            .filter(|(_, y, p)| *y >= styles.canvas_height && p.0 != [255, 255, 255, 255])
            .count()
    };
    assert!(below_chart(&kim) > 0);
    assert_ne!(kim.as_raw(), lee.as_raw());
}

#[test]
fn axis_names_are_drawn_outside_the_grid() {
    let styles = ChartStyles::default();
    let chart = RadarChart::from_report(&evaluate(&Assessment::new()), &styles);
    let rasterizer = RadarRasterizer::new(&styles);
    let canvas = rasterizer.capture(&chart, "");

    // "Plaque control" sits above the top spoke, clear of the outer ring.
    let (x, y) = rasterizer.vertex(&chart, 0, 6, 100.0);
    let (x, y) = (x.round() as u32, y.round() as u32);
    let inked = (y - 20..y - 4)
        .flat_map(|row| (x - 60..x + 60).map(move |col| (col, row)))
        .filter(|&(col, row)| canvas.get_pixel(col, row).0 == [0, 0, 0, 255])
        .count();
    assert!(inked > 0);
}

#[test]
fn warned_point_is_drawn_in_warning_color() {
    let styles = ChartStyles::default();
    let mut a = Assessment::new();
    for i in 0..6 {
        a.set_plaque(i, 3).unwrap();
    }
    let chart = RadarChart::from_report(&evaluate(&a), &styles);
    let rasterizer = RadarRasterizer::new(&styles);
    let canvas = rasterizer.capture(&chart, "");

    // Plaque is axis 0, pointing straight up, at full scale.
    let (x, y) = rasterizer.vertex(&chart, 0, 6, 100.0);
    let pixel = canvas.get_pixel(x.round() as u32, y.round() as u32);
    assert_eq!(pixel.0, [255, 0, 0, 255]);
}
