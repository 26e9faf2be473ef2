// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-frame joint angles.
//!
//! Combines the [`FrameStore`] with the vector math in [`crate::geometry`]:
//! for each frame the angle at the triplet's vertex is measured between the
//! segments to its two outer joints.

use crate::error::{PoseError, Result};
use crate::geometry::{Point2, joint_angle};
use crate::joint::JointTriplet;
use crate::store::FrameStore;

/// Compute the angle at `triplet.vertex` for every frame of the store.
///
/// Confidence values are not used; undetected joints (reported by OpenPose
/// as `0, 0, 0`) are measured like any other point.
///
/// # Errors
///
/// Propagates joint lookup errors from [`FrameStore::joint_track`], returns
/// [`PoseError::ConsistencyError`] if the three tracks differ in length, and
/// [`PoseError::DegenerateInput`] (naming the frame) if an outer joint
/// coincides with the vertex.
pub fn angle_series(
    store: &FrameStore,
    triplet: JointTriplet,
    person_id: usize,
    in_degrees: bool,
) -> Result<Vec<f64>> {
    let a = store.joint_track(triplet.a, person_id)?;
    let vertex = store.joint_track(triplet.vertex, person_id)?;
    let c = store.joint_track(triplet.c, person_id)?;

    if a.len() != vertex.len() || vertex.len() != c.len() {
        return Err(PoseError::ConsistencyError(format!(
            "joint tracks differ in frame count: {} {}, {} {}, {} {}",
            triplet.a,
            a.len(),
            triplet.vertex,
            vertex.len(),
            triplet.c,
            c.len()
        )));
    }

    a.iter()
        .zip(vertex.iter())
        .zip(c.iter())
        .enumerate()
        .map(|(frame_num, ((pa, pv), pc))| {
            joint_angle(
                Point2::from(pa),
                Point2::from(pv),
                Point2::from(pc),
                in_degrees,
            )
            .map_err(|e| match e {
                PoseError::DegenerateInput(msg) => {
                    PoseError::DegenerateInput(format!("frame {frame_num}: {msg}"))
                }
                other => other,
            })
        })
        .collect()
}

/// Basic statistics over an angle series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    /// Number of values.
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
}

impl SeriesSummary {
    /// Summarise a series; `None` when it is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let (min, max, sum) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
        );
        Some(Self {
            count: values.len(),
            min,
            max,
            mean: sum / values.len() as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Person, PoseFrame};
    use crate::joint::{Body25Joint, LAYOUT_SIZE};

    fn arm_frame(shoulder: (f64, f64), elbow: (f64, f64), wrist: (f64, f64)) -> PoseFrame {
        let mut kp = vec![0.0; LAYOUT_SIZE];
        for (joint, (x, y)) in [
            (Body25Joint::RShoulder, shoulder),
            (Body25Joint::RElbow, elbow),
            (Body25Joint::RWrist, wrist),
        ] {
            kp[joint.offset()..joint.offset() + 3].copy_from_slice(&[x, y, 0.9]);
        }
        PoseFrame::new(vec![Person::new(kp)])
    }

    #[test]
    fn test_right_arm_series() {
        let store = FrameStore::from_frames(vec![
            arm_frame((0.0, 0.0), (0.0, 10.0), (10.0, 10.0)),
            arm_frame((0.0, 0.0), (0.0, 10.0), (0.0, 20.0)),
            arm_frame((0.0, 0.0), (0.0, 10.0), (0.0, 0.5)),
        ]);
        let angles = angle_series(&store, JointTriplet::RIGHT_ARM, 0, true).unwrap();
        assert_eq!(angles.len(), 3);
        assert!((angles[0] - 90.0).abs() < 1e-9);
        assert!((angles[1] - 180.0).abs() < 1e-9);
        assert!(angles[2].abs() < 1e-9);
    }

    #[test]
    fn test_single_frame_series() {
        let store = FrameStore::from_frame(arm_frame((0.0, 0.0), (0.0, 10.0), (10.0, 10.0)));
        let angles = angle_series(&store, JointTriplet::RIGHT_ARM, 0, false).unwrap();
        assert_eq!(angles.len(), 1);
        assert!((angles[0] - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_frame_is_reported() {
        let store = FrameStore::from_frames(vec![
            arm_frame((0.0, 0.0), (0.0, 10.0), (10.0, 10.0)),
            arm_frame((0.0, 10.0), (0.0, 10.0), (10.0, 10.0)),
        ]);
        match angle_series(&store, JointTriplet::RIGHT_ARM, 0, true) {
            Err(PoseError::DegenerateInput(msg)) => assert!(msg.starts_with("frame 1:")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_summary() {
        let summary = SeriesSummary::from_values(&[90.0, 180.0, 0.0, 30.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert!((summary.min - 0.0).abs() < f64::EPSILON);
        assert!((summary.max - 180.0).abs() < f64::EPSILON);
        assert!((summary.mean - 75.0).abs() < f64::EPSILON);
        assert!(SeriesSummary::from_values(&[]).is_none());
    }
}
