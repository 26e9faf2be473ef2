// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Rasterised line chart for one step of the angle animation.

use ab_glyph::{FontVec, PxScale};
use image::RgbImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::visualizer::color::{Color, LINE_COLOR_INDEX};
use crate::visualizer::window::WindowView;

/// Margins around the axes in pixels: left, top, right, bottom.
const MARGINS: (u32, u32, u32, u32) = (72, 48, 24, 56);
/// Approximate number of ticks per axis.
const TARGET_TICKS: usize = 6;
/// Tick mark length in pixels.
const TICK_LEN: f32 = 5.0;

/// Pixel rectangle occupied by the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotArea {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PlotArea {
    fn width(self) -> f32 {
        (self.right - self.left) as f32
    }

    fn height(self) -> f32 {
        (self.bottom - self.top) as f32
    }
}

/// Draws angle series windows onto RGB canvases.
pub struct ChartRenderer {
    config: PlotConfig,
    font: Option<FontVec>,
    line_color: Color,
}

impl ChartRenderer {
    /// Create a renderer; text is drawn only if `font` is available.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PoseError::ConfigError`] if the configuration is invalid,
    /// including canvases too small to hold the axes margins.
    pub fn new(config: PlotConfig, font: Option<FontVec>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            font,
            line_color: Color::from_pose_index(LINE_COLOR_INDEX),
        })
    }

    /// Color used for the data line.
    #[must_use]
    pub const fn line_color(&self) -> Color {
        self.line_color
    }

    /// Canvas size in pixels.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        self.config.size
    }

    /// Axes rectangle for the configured canvas.
    #[must_use]
    pub const fn plot_area(&self) -> PlotArea {
        let (w, h) = self.config.size;
        PlotArea {
            left: MARGINS.0,
            top: MARGINS.1,
            right: w - MARGINS.2,
            bottom: h - MARGINS.3,
        }
    }

    /// Render the visible part of `values` for one animation step.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn render(&self, values: &[f64], view: &WindowView) -> RgbImage {
        let (width, height) = self.config.size;
        let area = self.plot_area();
        let mut img = RgbImage::from_pixel(width, height, Color::GREY.to_rgb());

        draw_filled_rect_mut(
            &mut img,
            Rect::at(area.left as i32, area.top as i32)
                .of_size(area.right - area.left, area.bottom - area.top),
            Color::BLACK.to_rgb(),
        );

        let x_span = view.x_max.saturating_sub(view.x_min).max(1) as f64;
        let (y_min, y_max) = self.config.y_range;
        let to_px = |frame: f64, value: f64| -> (f32, f32) {
            let fx = (frame - view.x_min as f64) / x_span;
            let fy = ((value - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
            (
                area.left as f32 + fx as f32 * area.width(),
                area.bottom as f32 - fy as f32 * area.height(),
            )
        };

        self.draw_y_axis(&mut img, area, &to_px);
        self.draw_x_axis(&mut img, area, view, &to_px);

        // Data line, two pixels thick.
        let color = self.line_color.to_rgb();
        let points: Vec<(f32, f32)> = view
            .frames
            .clone()
            .filter_map(|i| {
                let v = *values.get(i)?;
                v.is_finite().then(|| to_px(i as f64, v))
            })
            .collect();
        if let [(x, y)] = points.as_slice() {
            draw_filled_rect_mut(
                &mut img,
                Rect::at(*x as i32 - 1, *y as i32 - 1).of_size(3, 3),
                color,
            );
        }
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            draw_line_segment_mut(&mut img, a, b, color);
            draw_line_segment_mut(&mut img, (a.0, a.1 + 1.0), (b.0, b.1 + 1.0), color);
        }

        self.draw_labels(&mut img, area);
        img
    }

    fn draw_y_axis(
        &self,
        img: &mut RgbImage,
        area: PlotArea,
        to_px: &impl Fn(f64, f64) -> (f32, f32),
    ) {
        let (y_min, y_max) = self.config.y_range;
        let step = nice_step(y_max - y_min);
        let decimals = tick_decimals(step);

        for value in ticks(y_min, y_max, step) {
            let (_, py) = to_px(0.0, value);
            draw_line_segment_mut(
                img,
                (area.left as f32, py),
                (area.right as f32, py),
                Color::DARK_GREY.to_rgb(),
            );
            draw_line_segment_mut(
                img,
                (area.left as f32 - TICK_LEN, py),
                (area.left as f32, py),
                Color::BLACK.to_rgb(),
            );
            let label = format!("{value:.decimals$}");
            self.text_right_aligned(img, &label, area.left as f32 - TICK_LEN - 3.0, py);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_x_axis(
        &self,
        img: &mut RgbImage,
        area: PlotArea,
        view: &WindowView,
        to_px: &impl Fn(f64, f64) -> (f32, f32),
    ) {
        let (x_min, x_max) = (view.x_min as f64, view.x_max as f64);
        let step = nice_step(x_max - x_min).max(1.0);

        for frame in ticks(x_min, x_max, step) {
            let (px, _) = to_px(frame, self.config.y_range.0);
            draw_line_segment_mut(
                img,
                (px, area.top as f32),
                (px, area.bottom as f32),
                Color::DARK_GREY.to_rgb(),
            );
            draw_line_segment_mut(
                img,
                (px, area.bottom as f32),
                (px, area.bottom as f32 + TICK_LEN),
                Color::BLACK.to_rgb(),
            );
            let label = format!("{frame:.0}");
            self.text_centered(img, &label, px, area.bottom as f32 + TICK_LEN + 2.0, 14.0);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_labels(&self, img: &mut RgbImage, area: PlotArea) {
        let (width, height) = self.config.size;
        if !self.config.title.is_empty() {
            self.text_centered(img, &self.config.title, width as f32 / 2.0, 14.0, 20.0);
        }
        self.text_centered(
            img,
            &self.config.xlabel,
            (area.left + area.right) as f32 / 2.0,
            height as f32 - 26.0,
            16.0,
        );
        self.text_at(img, &self.config.ylabel, 8.0, area.top as f32 - 20.0, 16.0);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn text_at(&self, img: &mut RgbImage, text: &str, x: f32, y: f32, px: f32) {
        let Some(font) = &self.font else { return };
        let scale = PxScale::from(px);
        draw_text_mut(img, Color::BLACK.to_rgb(), x as i32, y as i32, scale, font, text);
    }

    #[allow(clippy::cast_precision_loss)]
    fn text_centered(&self, img: &mut RgbImage, text: &str, cx: f32, y: f32, px: f32) {
        let Some(font) = &self.font else { return };
        let (w, _) = text_size(PxScale::from(px), font, text);
        self.text_at(img, text, cx - w as f32 / 2.0, y, px);
    }

    #[allow(clippy::cast_precision_loss)]
    fn text_right_aligned(&self, img: &mut RgbImage, text: &str, right: f32, cy: f32) {
        let Some(font) = &self.font else { return };
        let scale = PxScale::from(14.0);
        let (w, h) = text_size(scale, font, text);
        self.text_at(img, text, right - w as f32, cy - h as f32 / 2.0, 14.0);
    }
}

/// Round `span / TARGET_TICKS` up to 1, 2 or 5 times a power of ten.
#[allow(clippy::cast_precision_loss)]
fn nice_step(span: f64) -> f64 {
    let raw = span / TARGET_TICKS as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Decimal places needed to print multiples of `step`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_decimals(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}

/// Multiples of `step` within `[min, max]`.
fn ticks(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil();
    let last = (max / step).floor();
    #[allow(clippy::cast_possible_truncation)]
    let count = (last - first).max(-1.0) as i64 + 1;
    // `+ 0.0` turns -0.0 into 0.0 so labels never read "-0".
    (0..count).map(move |i| (first + i as f64) * step + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ChartRenderer {
        ChartRenderer::new(PlotConfig::new().with_size(320, 240), None).unwrap()
    }

    #[test]
    fn test_canvas_smaller_than_margins_rejected() {
        assert!(matches!(
            ChartRenderer::new(PlotConfig::new().with_size(50, 40), None),
            Err(crate::error::PoseError::ConfigError(_))
        ));
    }

    #[test]
    fn test_nice_step() {
        assert!((nice_step(210.0) - 50.0).abs() < 1e-9);
        assert!((nice_step(3.7) - 1.0).abs() < 1e-9);
        assert!((nice_step(200.0) - 50.0).abs() < 1e-9);
        assert!((nice_step(10.0) - 2.0).abs() < 1e-9);
        assert!((nice_step(0.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ticks() {
        let ys: Vec<f64> = ticks(-10.0, 200.0, 50.0).collect();
        assert_eq!(ys, [0.0, 50.0, 100.0, 150.0, 200.0]);
        assert_eq!(ticks(1.0, 2.0, 5.0).count(), 0);
        assert_eq!(tick_decimals(0.5), 1);
        assert_eq!(tick_decimals(50.0), 0);
    }

    #[test]
    fn test_render_backgrounds() {
        let chart = renderer();
        let view = WindowView {
            frames: 0..3,
            x_min: 0,
            x_max: 10,
        };
        let img = chart.render(&[90.0, 95.0, 100.0], &view);
        assert_eq!(img.dimensions(), (320, 240));
        assert_eq!(*img.get_pixel(1, 1), Color::GREY.to_rgb());

        let area = chart.plot_area();
        assert_eq!(
            *img.get_pixel(area.right - 3, area.top + 3),
            Color::BLACK.to_rgb()
        );
    }

    #[test]
    fn test_render_draws_line() {
        let chart = renderer();
        let view = WindowView {
            frames: 0..4,
            x_min: 0,
            x_max: 4,
        };
        let img = chart.render(&[10.0, 170.0, 10.0, 170.0], &view);
        let line = chart.line_color().to_rgb();
        assert!(img.pixels().any(|p| *p == line));
    }

    #[test]
    fn test_render_single_point() {
        let chart = renderer();
        let view = WindowView {
            frames: 0..1,
            x_min: 0,
            x_max: 200,
        };
        let img = chart.render(&[45.0], &view);
        let line = chart.line_color().to_rgb();
        assert!(img.pixels().any(|p| *p == line));
    }
}
