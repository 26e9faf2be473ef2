// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Frame store and joint locator.
//!
//! [`FrameStore`] owns the parsed pose documents and answers joint queries by
//! [`Body25Joint`] and person index. Data is set once when the store is built
//! and never changes afterwards.

use std::path::Path;

use crate::error::{PoseError, Result};
use crate::frame::{Keypoint, PoseFrame};
use crate::joint::Body25Joint;
use crate::source::{Source, read_frames};
use crate::verbose;

/// Loaded pose data.
#[derive(Debug, Clone, PartialEq)]
enum FrameData {
    /// A single pose document (single image).
    Single(PoseFrame),
    /// One pose document per frame, in time order.
    Sequence(Vec<PoseFrame>),
}

/// Per-frame coordinates of one joint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointTrack {
    /// x coordinate per frame.
    pub x: Vec<f64>,
    /// y coordinate per frame.
    pub y: Vec<f64>,
    /// Detector confidence per frame.
    pub confidence: Vec<f64>,
}

impl JointTrack {
    /// Number of frames in the track.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the track has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Keypoint at a frame index.
    #[must_use]
    pub fn get(&self, frame: usize) -> Option<Keypoint> {
        Some(Keypoint::new(
            *self.x.get(frame)?,
            *self.y.get(frame)?,
            *self.confidence.get(frame)?,
        ))
    }

    /// Iterate over keypoints in frame order.
    pub fn iter(&self) -> impl Iterator<Item = Keypoint> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.confidence)
            .map(|((&x, &y), &c)| Keypoint::new(x, y, c))
    }

    fn push(&mut self, kp: Keypoint) {
        self.x.push(kp.x);
        self.y.push(kp.y);
        self.confidence.push(kp.confidence);
    }

    /// Ensure the three coordinate sequences have equal length.
    fn check_consistent(&self) -> Result<()> {
        if self.x.len() == self.y.len() && self.y.len() == self.confidence.len() {
            Ok(())
        } else {
            Err(PoseError::ConsistencyError(format!(
                "length of x ({}), y ({}) and confidence ({}) values from frames do not match",
                self.x.len(),
                self.y.len(),
                self.confidence.len()
            )))
        }
    }
}

/// Result of a joint query, shaped by the store's mode.
#[derive(Debug, Clone, PartialEq)]
pub enum JointCoords {
    /// Single-frame store: the keypoint itself.
    Single(Keypoint),
    /// Multi-frame store: one value per frame.
    Sequence(JointTrack),
}

impl JointCoords {
    /// Convert into a track; a single keypoint becomes a one-frame track.
    #[must_use]
    pub fn into_track(self) -> JointTrack {
        match self {
            Self::Sequence(track) => track,
            Self::Single(kp) => {
                let mut track = JointTrack::default();
                track.push(kp);
                track
            }
        }
    }
}

/// Write-once store of pose frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStore {
    data: FrameData,
}

impl FrameStore {
    /// Load a single pose file or a directory of per-frame files.
    ///
    /// Directory entries are loaded in ascending file-name order, which is
    /// taken as time order.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::NotFound`] if `path` is neither a file nor a
    /// directory, and [`PoseError::FormatError`] if any document fails to
    /// parse. Nothing is loaded on failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = Source::resolve(path)?;
        let frames = read_frames(&source)?;

        verbose!(
            "Loaded {} pose frame(s) from {}",
            frames.len(),
            source.path().display()
        );

        let data = match source {
            Source::Directory(_) => FrameData::Sequence(frames),
            Source::File(_) => FrameData::Single(frames.into_iter().next().ok_or_else(|| {
                PoseError::ConsistencyError("single-file source produced no frame".to_string())
            })?),
        };
        Ok(Self { data })
    }

    /// Build a single-frame store from an in-memory document.
    #[must_use]
    pub const fn from_frame(frame: PoseFrame) -> Self {
        Self {
            data: FrameData::Single(frame),
        }
    }

    /// Build a multi-frame store from in-memory documents in time order.
    #[must_use]
    pub const fn from_frames(frames: Vec<PoseFrame>) -> Self {
        Self {
            data: FrameData::Sequence(frames),
        }
    }

    /// Whether the store holds a frame sequence rather than a single frame.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self.data, FrameData::Sequence(_))
    }

    /// Number of frames held.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.data {
            FrameData::Single(_) => 1,
            FrameData::Sequence(frames) => frames.len(),
        }
    }

    /// Check if the store holds no frames (an empty directory).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All frames in time order.
    #[must_use]
    pub fn frames(&self) -> &[PoseFrame] {
        match &self.data {
            FrameData::Single(frame) => std::slice::from_ref(frame),
            FrameData::Sequence(frames) => frames,
        }
    }

    /// Frame at a position.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&PoseFrame> {
        self.frames().get(index)
    }

    /// Get the coordinates of a joint for one person.
    ///
    /// A single-frame store returns [`JointCoords::Single`]; a multi-frame
    /// store returns [`JointCoords::Sequence`] with one entry per frame.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::LookupError`] if a frame has no person
    /// `person_id`, [`PoseError::FormatError`] if a keypoint array has the
    /// wrong size, and [`PoseError::ConsistencyError`] if the extracted
    /// sequences disagree in length.
    pub fn joint_coords(&self, joint: Body25Joint, person_id: usize) -> Result<JointCoords> {
        match &self.data {
            FrameData::Single(frame) => Ok(JointCoords::Single(frame.keypoint(joint, person_id)?)),
            FrameData::Sequence(frames) => {
                let mut track = JointTrack {
                    x: Vec::with_capacity(frames.len()),
                    y: Vec::with_capacity(frames.len()),
                    confidence: Vec::with_capacity(frames.len()),
                };
                for (frame_num, frame) in frames.iter().enumerate() {
                    let kp = frame
                        .keypoint(joint, person_id)
                        .map_err(|e| with_frame_context(e, frame_num))?;
                    track.push(kp);
                }
                track.check_consistent()?;
                Ok(JointCoords::Sequence(track))
            }
        }
    }

    /// Get the per-frame track of a joint regardless of store mode.
    ///
    /// # Errors
    ///
    /// See [`FrameStore::joint_coords`].
    pub fn joint_track(&self, joint: Body25Joint, person_id: usize) -> Result<JointTrack> {
        Ok(self.joint_coords(joint, person_id)?.into_track())
    }
}

/// Prefix a per-frame extraction error with its frame position.
fn with_frame_context(err: PoseError, frame_num: usize) -> PoseError {
    match err {
        PoseError::LookupError(msg) => PoseError::LookupError(format!("frame {frame_num}: {msg}")),
        PoseError::FormatError(msg) => PoseError::FormatError(format!("frame {frame_num}: {msg}")),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Person;
    use crate::joint::LAYOUT_SIZE;

    fn frame_with(joint: Body25Joint, x: f64, y: f64, c: f64) -> PoseFrame {
        let mut kp = vec![0.0; LAYOUT_SIZE];
        kp[joint.offset()..joint.offset() + 3].copy_from_slice(&[x, y, c]);
        PoseFrame::new(vec![Person::new(kp)])
    }

    #[test]
    fn test_single_frame_query() {
        let store = FrameStore::from_frame(frame_with(Body25Joint::RWrist, 1.0, 2.0, 0.5));
        assert!(!store.is_sequence());
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.joint_coords(Body25Joint::RWrist, 0).unwrap(),
            JointCoords::Single(Keypoint::new(1.0, 2.0, 0.5))
        );
    }

    #[test]
    fn test_sequence_query() {
        let store = FrameStore::from_frames(vec![
            frame_with(Body25Joint::RWrist, 1.0, 2.0, 0.5),
            frame_with(Body25Joint::RWrist, 3.0, 4.0, 0.6),
            frame_with(Body25Joint::RWrist, 5.0, 6.0, 0.7),
        ]);
        assert!(store.is_sequence());

        let JointCoords::Sequence(track) = store.joint_coords(Body25Joint::RWrist, 0).unwrap()
        else {
            panic!("expected a sequence");
        };
        assert_eq!(track.x, [1.0, 3.0, 5.0]);
        assert_eq!(track.y, [2.0, 4.0, 6.0]);
        assert_eq!(track.confidence, [0.5, 0.6, 0.7]);
        assert_eq!(track.get(1), Some(Keypoint::new(3.0, 4.0, 0.6)));
        assert_eq!(track.get(3), None);
        assert_eq!(track.iter().count(), 3);
    }

    #[test]
    fn test_joint_track_wraps_single_frame() {
        let store = FrameStore::from_frame(frame_with(Body25Joint::Nose, 7.0, 8.0, 0.9));
        let track = store.joint_track(Body25Joint::Nose, 0).unwrap();
        assert_eq!(track.len(), 1);
        assert_eq!(track.get(0), Some(Keypoint::new(7.0, 8.0, 0.9)));
    }

    #[test]
    fn test_missing_person_names_frame() {
        let store = FrameStore::from_frames(vec![
            frame_with(Body25Joint::Nose, 0.0, 0.0, 0.0),
            PoseFrame::new(vec![]),
        ]);
        match store.joint_coords(Body25Joint::Nose, 0) {
            Err(PoseError::LookupError(msg)) => assert!(msg.starts_with("frame 1:")),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            store.joint_coords(Body25Joint::Nose, 1),
            Err(PoseError::LookupError(_))
        ));
    }

    #[test]
    fn test_short_array_in_sequence() {
        let store = FrameStore::from_frames(vec![PoseFrame::new(vec![Person::new(vec![
            0.0;
            LAYOUT_SIZE - 1
        ])])]);
        assert!(matches!(
            store.joint_coords(Body25Joint::Neck, 0),
            Err(PoseError::FormatError(_))
        ));
    }

    #[test]
    fn test_inconsistent_track() {
        let track = JointTrack {
            x: vec![1.0, 2.0],
            y: vec![1.0],
            confidence: vec![1.0, 2.0],
        };
        assert!(matches!(
            track.check_consistent(),
            Err(PoseError::ConsistencyError(_))
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let store = FrameStore::from_frames(vec![]);
        assert!(store.is_empty());
        let track = store.joint_track(Body25Joint::Neck, 0).unwrap();
        assert!(track.is_empty());
    }
}
