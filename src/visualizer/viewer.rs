// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Window for showing the plot animation.

use std::time::{Duration, Instant};

use image::RgbImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{PoseError, Result};
use crate::visualizer::color::Color;

/// A simple frame viewer using minifb.
pub struct Viewer {
    window: Window,
    pub width: usize,
    pub height: usize,
    buffer: Vec<u32>,
    frame_interval: Duration,
    last_frame: Option<Instant>,
}

impl Viewer {
    /// Create a new viewer window showing `fps` frames per second.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::ConfigError`] if `fps` gives no representable frame
    /// interval and [`PoseError::VisualizerError`] if the window cannot be created.
    pub fn new(title: &str, width: usize, height: usize, fps: f32) -> Result<Self> {
        let frame_interval = frame_interval(fps)?;
        let window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| PoseError::VisualizerError(format!("Failed to create window: {e}")))?;

        Ok(Self {
            window,
            width,
            height,
            buffer: vec![0; width * height],
            frame_interval,
            last_frame: None,
        })
    }

    /// Whether the user asked to close the window (close button, Esc or Q).
    pub fn is_closed(&self) -> bool {
        !self.window.is_open()
            || self.window.is_key_down(Key::Escape)
            || self.window.is_key_down(Key::Q)
    }

    /// Show the next frame, waiting so frames are spaced by the frame interval.
    ///
    /// Returns `Ok(false)` once the window has been closed.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::VisualizerError`] if the window update fails.
    pub fn show(&mut self, frame: &RgbImage) -> Result<bool> {
        if self.is_closed() {
            return Ok(false);
        }

        let (w, h) = (frame.width() as usize, frame.height() as usize);
        if self.buffer.len() != w * h {
            self.buffer.resize(w * h, 0);
        }
        self.width = w;
        self.height = h;
        for (dst, p) in self.buffer.iter_mut().zip(frame.pixels()) {
            *dst = Color(p[0], p[1], p[2]).to_u32();
        }

        if let Some(last) = self.last_frame {
            let elapsed = last.elapsed();
            if elapsed < self.frame_interval {
                std::thread::sleep(self.frame_interval - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| PoseError::VisualizerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }

    /// Keep the last frame on screen until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::VisualizerError`] if the window update fails.
    pub fn hold(&mut self) -> Result<()> {
        while !self.is_closed() {
            self.window
                .update_with_buffer(&self.buffer, self.width, self.height)
                .map_err(|e| {
                    PoseError::VisualizerError(format!("Failed to update window: {e}"))
                })?;
            std::thread::sleep(self.frame_interval);
        }
        Ok(())
    }
}

/// Time between frames at `fps` frames per second.
fn frame_interval(fps: f32) -> Result<Duration> {
    Duration::try_from_secs_f32(1.0 / fps)
        .map_err(|e| PoseError::ConfigError(format!("invalid fps {fps}: {e}")))
}
