// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose documents as written by OpenPose with `--write_json`.
//!
//! One document describes one frame:
//!
//! ```json
//! {"version": 1.3, "people": [{"pose_keypoints_2d": [x0, y0, c0, x1, y1, c1, ...]}]}
//! ```
//!
//! Fields other than `people[].pose_keypoints_2d` are ignored.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PoseError, Result};
use crate::joint::{Body25Joint, CONF_OFFSET, LAYOUT_SIZE, X_OFFSET, Y_OFFSET};

/// A single joint observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
    /// Detector confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Keypoint {
    /// Create a new keypoint.
    #[must_use]
    pub const fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }
}

/// One detected person.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    /// Flat BODY_25 keypoint array, `x, y, confidence` per joint.
    pub pose_keypoints_2d: Vec<f64>,
}

impl Person {
    /// Create a person from a flat keypoint array.
    #[must_use]
    pub const fn new(pose_keypoints_2d: Vec<f64>) -> Self {
        Self { pose_keypoints_2d }
    }

    /// Read one joint's keypoint.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::FormatError`] if the keypoint array does not hold
    /// exactly one triple per BODY_25 joint.
    pub fn keypoint(&self, joint: Body25Joint) -> Result<Keypoint> {
        let keypoints = &self.pose_keypoints_2d;
        if keypoints.len() != LAYOUT_SIZE {
            return Err(PoseError::FormatError(format!(
                "keypoints do not match expected joint-layout size: got {}, expected {LAYOUT_SIZE}",
                keypoints.len()
            )));
        }

        let offset = joint.offset();
        Ok(Keypoint::new(
            keypoints[offset + X_OFFSET],
            keypoints[offset + Y_OFFSET],
            keypoints[offset + CONF_OFFSET],
        ))
    }
}

/// One frame of pose output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PoseFrame {
    /// People detected in the frame, in detector order.
    pub people: Vec<Person>,
}

impl PoseFrame {
    /// Create a frame from its people.
    #[must_use]
    pub const fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Parse a frame from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read and
    /// [`PoseError::FormatError`] if it is not a valid pose document.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            PoseError::IoError(format!("Failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            PoseError::FormatError(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    /// Number of people in the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Check if nobody was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Get a person by detector index.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::LookupError`] if the frame has fewer than
    /// `person_id + 1` people.
    pub fn person(&self, person_id: usize) -> Result<&Person> {
        self.people.get(person_id).ok_or_else(|| {
            PoseError::LookupError(format!(
                "person index {person_id} out of range for frame with {} people",
                self.people.len()
            ))
        })
    }

    /// Read one joint of one person.
    ///
    /// # Errors
    ///
    /// See [`PoseFrame::person`] and [`Person::keypoint`].
    pub fn keypoint(&self, joint: Body25Joint, person_id: usize) -> Result<Keypoint> {
        self.person(person_id)?.keypoint(joint)
    }
}

impl FromStr for PoseFrame {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| PoseError::FormatError(e.to_string()))
    }
}
