// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Sliding-window animation state.
//!
//! At step `k` (1-based) the frames `[k - width, k)` are visible, clipped at
//! frame 0. Until the window has filled, the x-axis stays pinned to
//! `[0, width]` so the line grows from the left edge; afterwards the axis
//! slides forward one frame per step. The animation ends once step `total`
//! has been produced.

use std::ops::Range;

use crate::error::{PoseError, Result};

/// What to draw for one animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowView {
    /// Visible frame indices.
    pub frames: Range<usize>,
    /// Left edge of the x-axis (frame number).
    pub x_min: usize,
    /// Right edge of the x-axis (frame number).
    pub x_max: usize,
}

/// Animation controller for a sliding-window line plot.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    total: usize,
    width: usize,
    right: usize,
}

impl SlidingWindow {
    /// Create a controller over `total` values with a window of `width` frames.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::ConfigError`] if `width` is zero.
    pub fn new(total: usize, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(PoseError::ConfigError(
                "window must be at least 1 frame".to_string(),
            ));
        }
        Ok(Self {
            total,
            width,
            right: 0,
        })
    }

    /// Total number of steps.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Steps already produced.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.right
    }

    /// Whether every step has been produced.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.right >= self.total
    }

    /// Advance one step and return the view to draw, or `None` when finished.
    pub fn tick(&mut self) -> Option<WindowView> {
        if self.is_done() {
            return None;
        }
        self.right += 1;

        let left = self.right.saturating_sub(self.width);
        let (x_min, x_max) = if self.right < self.width {
            (0, self.width)
        } else {
            (left, self.right)
        };

        Some(WindowView {
            frames: left..self.right,
            x_min,
            x_max,
        })
    }
}

impl Iterator for SlidingWindow {
    type Item = WindowView;

    fn next(&mut self) -> Option<WindowView> {
        self.tick()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.right.min(self.total);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlidingWindow {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_grows_then_slides() {
        let views: Vec<_> = SlidingWindow::new(5, 3).unwrap().collect();
        let frames: Vec<_> = views.iter().map(|v| v.frames.clone()).collect();
        assert_eq!(frames, [0..1, 0..2, 0..3, 1..4, 2..5]);

        assert_eq!((views[0].x_min, views[0].x_max), (0, 3));
        assert_eq!((views[1].x_min, views[1].x_max), (0, 3));
        assert_eq!((views[2].x_min, views[2].x_max), (0, 3));
        assert_eq!((views[3].x_min, views[3].x_max), (1, 4));
        assert_eq!((views[4].x_min, views[4].x_max), (2, 5));
    }

    #[test]
    fn test_tick_stops_at_end() {
        let mut window = SlidingWindow::new(2, 10).unwrap();
        assert_eq!(window.len(), 2);
        assert!(window.tick().is_some());
        assert!(window.tick().is_some());
        assert!(window.is_done());
        assert!(window.tick().is_none());
        assert_eq!(window.position(), 2);
    }

    #[test]
    fn test_window_shorter_than_series() {
        let mut window = SlidingWindow::new(4, 1).unwrap();
        let view = window.tick().unwrap();
        assert_eq!(view.frames, 0..1);
        assert_eq!((view.x_min, view.x_max), (0, 1));
        let view = window.nth(2).unwrap();
        assert_eq!(view.frames, 3..4);
    }

    #[test]
    fn test_empty_series() {
        let mut window = SlidingWindow::new(0, 5).unwrap();
        assert!(window.is_done());
        assert!(window.tick().is_none());
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            SlidingWindow::new(3, 0),
            Err(PoseError::ConfigError(_))
        ));
    }
}
