// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Sliding-window animation of an angle series.
//!
//! [`AnglePlot`] consumes a flat, frame-ordered sequence of angles and renders
//! one chart per [`SlidingWindow`] step into a window, a video file, or a
//! directory of PNG frames.

/// Chart rasterisation.
pub mod chart;
/// Color definitions and palettes.
pub mod color;
/// Font asset lookup.
pub mod font;
/// Animation controller.
pub mod window;

#[cfg(feature = "visualize")]
pub mod viewer;

use std::path::{Path, PathBuf};

pub use chart::ChartRenderer;
pub use color::Color;
pub use window::{SlidingWindow, WindowView};

#[cfg(feature = "visualize")]
pub use viewer::Viewer;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::io::FrameWriter;

/// Where the animation is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationTarget {
    /// Interactive window.
    Window,
    /// Encoded video file.
    Video(PathBuf),
    /// Directory of numbered PNG frames.
    Frames(PathBuf),
}

impl AnimationTarget {
    /// Pick a save target from an output path: video extensions encode a
    /// video, anything else is a frame directory.
    #[must_use]
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let is_video = path.extension().is_some_and(|ext| {
            matches!(
                ext.to_string_lossy().to_lowercase().as_str(),
                "mp4" | "mkv" | "mov" | "avi"
            )
        });
        if is_video {
            Self::Video(path.to_path_buf())
        } else {
            Self::Frames(path.to_path_buf())
        }
    }
}

/// Animated line plot of per-frame angles.
pub struct AnglePlot<'a> {
    angles: &'a [f64],
    renderer: ChartRenderer,
    controller: SlidingWindow,
    fps: f32,
    title: String,
}

impl<'a> AnglePlot<'a> {
    /// Create a plot, loading the configured font.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PoseError::ConfigError`] if the configuration is invalid.
    pub fn new(angles: &'a [f64], config: PlotConfig) -> Result<Self> {
        config.validate()?;
        let font = font::load_font(&config);
        Self::with_font(angles, config, font)
    }

    /// Create a plot with an already loaded font (or none, to skip text).
    ///
    /// # Errors
    ///
    /// Returns [`crate::PoseError::ConfigError`] if the configuration is invalid.
    pub fn with_font(
        angles: &'a [f64],
        config: PlotConfig,
        font: Option<ab_glyph::FontVec>,
    ) -> Result<Self> {
        let controller = SlidingWindow::new(angles.len(), config.window)?;
        let fps = config.fps;
        let title = config.title.clone();
        Ok(Self {
            angles,
            controller,
            fps,
            title,
            renderer: ChartRenderer::new(config, font)?,
        })
    }

    /// A fresh animation controller for this plot.
    #[must_use]
    pub fn controller(&self) -> SlidingWindow {
        self.controller.clone()
    }

    /// Render a single animation step.
    #[must_use]
    pub fn render(&self, view: &WindowView) -> image::RgbImage {
        self.renderer.render(self.angles, view)
    }

    /// Run the animation to completion and return the number of frames shown.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PoseError::FeatureNotEnabled`] if the target needs a Cargo
    /// feature that is not compiled in, or any error raised by the output.
    pub fn animate(&self, target: &AnimationTarget) -> Result<usize> {
        crate::verbose!("Generating plot animation ({} frames)", self.angles.len());
        match target {
            AnimationTarget::Window => self.animate_window(),
            AnimationTarget::Video(path) => self.animate_video(path),
            AnimationTarget::Frames(dir) => {
                let mut writer = FrameWriter::new(dir)?;
                for view in self.controller() {
                    writer.write_frame(&self.render(&view))?;
                }
                crate::success!("Plot frames have been saved at {}", dir.display());
                Ok(writer.count())
            }
        }
    }

    #[cfg(feature = "visualize")]
    fn animate_window(&self) -> Result<usize> {
        let (w, h) = self.renderer.size();
        let title = if self.title.is_empty() {
            "pose-angles"
        } else {
            self.title.as_str()
        };
        let mut viewer = Viewer::new(title, w as usize, h as usize, self.fps)?;

        let mut shown = 0;
        for view in self.controller() {
            if !viewer.show(&self.render(&view))? {
                return Ok(shown);
            }
            shown += 1;
        }
        viewer.hold()?;
        Ok(shown)
    }

    #[cfg(not(feature = "visualize"))]
    fn animate_window(&self) -> Result<usize> {
        Err(crate::error::PoseError::FeatureNotEnabled(
            "Window display requires 'visualize' feature".to_string(),
        ))
    }

    #[cfg(feature = "video")]
    fn animate_video(&self, path: &Path) -> Result<usize> {
        let (w, h) = self.renderer.size();
        let mut writer = crate::io::VideoWriter::new(path, w as usize, h as usize, self.fps)?;
        let mut written = 0;
        for view in self.controller() {
            writer.write_frame(&self.render(&view))?;
            written += 1;
        }
        writer.finish()?;
        crate::success!("Plot animation has been saved at {}", path.display());
        Ok(written)
    }

    #[cfg(not(feature = "video"))]
    fn animate_video(&self, _path: &Path) -> Result<usize> {
        Err(crate::error::PoseError::FeatureNotEnabled(
            "Video export requires 'video' feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PoseError;

    #[test]
    fn test_target_for_path() {
        assert_eq!(
            AnimationTarget::for_path("out/angles.mp4"),
            AnimationTarget::Video(PathBuf::from("out/angles.mp4"))
        );
        assert_eq!(
            AnimationTarget::for_path("out/frames"),
            AnimationTarget::Frames(PathBuf::from("out/frames"))
        );
    }

    #[test]
    fn test_animate_to_frames() {
        let dir = tempfile::tempdir().unwrap();
        let angles = [10.0, 20.0, 30.0, 40.0];
        let config = PlotConfig::new().with_window(2).with_size(200, 150);
        let plot = AnglePlot::with_font(&angles, config, None).unwrap();

        let out = dir.path().join("frames");
        let n = plot.animate(&AnimationTarget::Frames(out.clone())).unwrap();
        assert_eq!(n, 4);
        assert!(out.join("frame_000003.png").is_file());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PlotConfig::new().with_window(0);
        assert!(matches!(
            AnglePlot::with_font(&[1.0], config, None),
            Err(PoseError::ConfigError(_))
        ));
    }

    #[cfg(not(feature = "video"))]
    #[test]
    fn test_video_needs_feature() {
        let plot = AnglePlot::with_font(&[1.0], PlotConfig::new(), None).unwrap();
        assert!(matches!(
            plot.animate(&AnimationTarget::Video(PathBuf::from("x.mp4"))),
            Err(crate::error::PoseError::FeatureNotEnabled(_))
        ));
    }
}
