// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Writers for exporting the plot animation as video or numbered images.

#[cfg(feature = "video")]
use video_rs::{Encoder, Time, encode::Settings as EncoderSettings};

use image::RgbImage;

use crate::error::{PoseError, Result};
use std::path::{Path, PathBuf};

#[cfg(feature = "video")]
use std::sync::Once;

#[cfg(feature = "video")]
static INIT: Once = Once::new();

/// Initialize `video-rs` once and silence FFmpeg below error level.
#[allow(clippy::missing_const_for_fn)]
pub fn init_video() {
    #[cfg(feature = "video")]
    INIT.call_once(|| {
        if let Err(e) = video_rs::init() {
            crate::warn!("Failed to initialize video-rs: {e}");
        }
    });
}

/// Create `dir` and its parents if missing.
fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        PoseError::IoError(format!("Failed to create directory {}: {e}", dir.display()))
    })
}

/// A wrapper around the `video-rs` encoder for plot frames.
#[cfg(feature = "video")]
pub struct VideoWriter {
    encoder: Encoder,
    frame_duration: Time,
    position: Time,
    width: usize,
    height: usize,
}

#[cfg(feature = "video")]
impl VideoWriter {
    /// Create a new `VideoWriter`.
    ///
    /// # Arguments
    ///
    /// * `path` - Output video path (e.g., "angles.mp4").
    /// * `width` - Video width.
    /// * `height` - Video height.
    /// * `fps` - Frames per second.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder cannot be initialized.
    pub fn new<P: AsRef<Path>>(path: P, width: usize, height: usize, fps: f32) -> Result<Self> {
        init_video();
        let output_path = path.as_ref().to_path_buf();

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            ensure_dir(parent)?;
        }

        let settings = EncoderSettings::preset_h264_yuv420p(width, height, false);
        let encoder = Encoder::new(output_path.as_path(), settings).map_err(|e| {
            PoseError::VideoError(format!("Failed to create video encoder: {e}"))
        })?;

        Ok(Self {
            encoder,
            frame_duration: Time::from_secs_f64(1.0 / f64::from(fps)),
            position: Time::zero(),
            width,
            height,
        })
    }

    /// Append a frame.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or frame dimensions don't match.
    pub fn write_frame(&mut self, frame: &RgbImage) -> Result<()> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;

        if width != self.width || height != self.height {
            return Err(PoseError::VideoError(format!(
                "Frame dimensions {width}x{height} do not match video dimensions {}x{}",
                self.width, self.height
            )));
        }

        let frame_array =
            ndarray::Array3::from_shape_vec((height, width, 3), frame.as_raw().clone())
                .map_err(|e| PoseError::VideoError(e.to_string()))?;

        self.encoder
            .encode(&frame_array, self.position)
            .map_err(|e| PoseError::VideoError(format!("Failed to encode frame: {e}")))?;

        self.position = self.position.aligned_with(self.frame_duration).add();
        Ok(())
    }

    /// Flush the encoder and close the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails to finish.
    pub fn finish(mut self) -> Result<()> {
        self.encoder.finish().map_err(|e| {
            PoseError::VideoError(format!("Failed to finish video encoding: {e}"))
        })
    }
}

/// Writes animation frames as `frame_000000.png`, `frame_000001.png`, ...
pub struct FrameWriter {
    dir: PathBuf,
    count: usize,
}

impl FrameWriter {
    /// Create the output directory and a writer into it.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directory cannot be created.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        ensure_dir(&dir)?;
        Ok(Self { dir, count: 0 })
    }

    /// Path of the frame with the given index.
    #[must_use]
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame_{index:06}.png"))
    }

    /// Save the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::RenderError`] if encoding or writing fails.
    pub fn write_frame(&mut self, frame: &RgbImage) -> Result<()> {
        frame.save(self.frame_path(self.count))?;
        self.count += 1;
        Ok(())
    }

    /// Number of frames written.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_writer_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plot");
        let mut writer = FrameWriter::new(&out).unwrap();

        let img = RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]));
        writer.write_frame(&img).unwrap();
        writer.write_frame(&img).unwrap();

        assert_eq!(writer.count(), 2);
        assert!(out.join("frame_000000.png").is_file());
        assert!(out.join("frame_000001.png").is_file());
        assert!(!out.join("frame_000002.png").exists());
    }
}
