// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Plot configuration.
//!
//! This module defines the [`PlotConfig`] struct, which controls how an angle
//! series is animated: sliding-window width, labels, axis range, canvas size,
//! frame rate, and the font used for text.

use std::path::PathBuf;

use crate::error::{PoseError, Result};

/// Default sliding-window width in frames.
pub const DEFAULT_WINDOW: usize = 200;
/// Default animation frame rate.
pub const DEFAULT_FPS: f32 = 30.0;
/// Slowest accepted animation frame rate.
pub const MIN_FPS: f32 = 0.1;
/// Default y-axis label for degree output.
pub const DEFAULT_YLABEL: &str = "Angle (deg)";
/// Default x-axis label.
pub const DEFAULT_XLABEL: &str = "Frame Number";
/// Default font asset.
pub const DEFAULT_FONT: &str = "Arial.ttf";

/// Configuration for the angle plot animation.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use pose_angles::PlotConfig;
///
/// let config = PlotConfig::new()
///     .with_window(120)
///     .with_title("Right knee")
///     .with_fps(25.0)
///     .with_size(640, 480);
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Number of frames visible at once.
    pub window: usize,
    /// Animation frames per second (window pacing and video rate).
    pub fps: f32,
    /// Plot title.
    pub title: String,
    /// Y-axis label.
    pub ylabel: String,
    /// X-axis label.
    pub xlabel: String,
    /// Fixed y-axis range `(min, max)`.
    pub y_range: (f64, f64),
    /// Canvas size `(width, height)` in pixels.
    pub size: (u32, u32),
    /// Explicit TrueType font file. Falls back to [`DEFAULT_FONT`] when `None`.
    pub font: Option<PathBuf>,
    /// Whether the default font may be downloaded if it is not cached.
    pub download_font: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            fps: DEFAULT_FPS,
            title: String::new(),
            ylabel: DEFAULT_YLABEL.to_string(),
            xlabel: DEFAULT_XLABEL.to_string(),
            y_range: (-10.0, 200.0),
            size: (800, 600),
            font: None,
            download_font: true,
        }
    }
}

impl PlotConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sliding-window width in frames.
    #[must_use]
    pub const fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the animation frame rate.
    #[must_use]
    pub const fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Set the plot title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the y-axis label.
    #[must_use]
    pub fn with_ylabel(mut self, label: impl Into<String>) -> Self {
        self.ylabel = label.into();
        self
    }

    /// Set the x-axis label.
    #[must_use]
    pub fn with_xlabel(mut self, label: impl Into<String>) -> Self {
        self.xlabel = label.into();
        self
    }

    /// Set the fixed y-axis range.
    #[must_use]
    pub const fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = (min, max);
        self
    }

    /// Use the axis range and label suited to radian output.
    #[must_use]
    pub fn for_radians(self) -> Self {
        self.with_y_range(-0.2, 3.5).with_ylabel("Angle (rad)")
    }

    /// Set the canvas size in pixels.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Use an explicit font file.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<PathBuf>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Allow or forbid downloading the default font.
    #[must_use]
    pub const fn with_download_font(mut self, download: bool) -> Self {
        self.download_font = download;
        self
    }

    /// Check that the configuration can drive an animation.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::ConfigError`] for a zero window, a frame rate below
    /// [`MIN_FPS`], an empty y range, or a canvas too small to hold the axes.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(PoseError::ConfigError(
                "window must be at least 1 frame".to_string(),
            ));
        }
        if !(self.fps.is_finite() && self.fps >= MIN_FPS) {
            return Err(PoseError::ConfigError(format!(
                "fps must be at least {MIN_FPS}, got {}",
                self.fps
            )));
        }
        if !(self.y_range.0 < self.y_range.1) {
            return Err(PoseError::ConfigError(format!(
                "invalid y range {:?}",
                self.y_range
            )));
        }
        if self.size.0 < 160 || self.size.1 < 120 {
            return Err(PoseError::ConfigError(format!(
                "canvas {}x{} is too small, minimum is 160x120",
                self.size.0, self.size.1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.window, 200);
        assert!((config.fps - 30.0).abs() < f32::EPSILON);
        assert_eq!(config.ylabel, "Angle (deg)");
        assert_eq!(config.xlabel, "Frame Number");
        assert_eq!(config.y_range, (-10.0, 200.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PlotConfig::new()
            .with_window(50)
            .with_title("Knee")
            .with_size(320, 240)
            .for_radians();
        assert_eq!(config.window, 50);
        assert_eq!(config.title, "Knee");
        assert_eq!(config.size, (320, 240));
        assert_eq!(config.ylabel, "Angle (rad)");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(PlotConfig::new().with_window(0).validate().is_err());
        assert!(PlotConfig::new().with_fps(0.0).validate().is_err());
        assert!(PlotConfig::new().with_fps(1e-39).validate().is_err());
        assert!(PlotConfig::new().with_fps(f32::NAN).validate().is_err());
        assert!(PlotConfig::new().with_fps(MIN_FPS).validate().is_ok());
        assert!(PlotConfig::new().with_y_range(5.0, 5.0).validate().is_err());
        assert!(PlotConfig::new().with_size(100, 100).validate().is_err());
    }
}
