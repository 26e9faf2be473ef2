// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! OpenPose BODY_25 joint layout.
//!
//! The ordinal of each variant is the joint's position in the flat
//! `pose_keypoints_2d` array emitted by OpenPose, so the numbering is part of
//! the input format and must not change.

use std::fmt;
use std::str::FromStr;

/// Number of joints in the BODY_25 layout.
pub const NUM_JOINTS: usize = 25;

/// Scalars per keypoint in 2D (x, y, confidence).
pub const KEYPOINT_LENGTH: usize = 3;

/// Offset of the x coordinate within a keypoint.
pub const X_OFFSET: usize = 0;
/// Offset of the y coordinate within a keypoint.
pub const Y_OFFSET: usize = 1;
/// Offset of the confidence within a keypoint.
pub const CONF_OFFSET: usize = 2;

/// Expected length of one person's flat keypoint array.
pub const LAYOUT_SIZE: usize = NUM_JOINTS * KEYPOINT_LENGTH;

/// Joints of the OpenPose BODY_25 model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum Body25Joint {
    Nose = 0,
    Neck = 1,
    RShoulder = 2,
    RElbow = 3,
    RWrist = 4,
    LShoulder = 5,
    LElbow = 6,
    LWrist = 7,
    MidHip = 8,
    RHip = 9,
    RKnee = 10,
    RAnkle = 11,
    LHip = 12,
    LKnee = 13,
    LAnkle = 14,
    REye = 15,
    LEye = 16,
    REar = 17,
    LEar = 18,
    LBigToe = 19,
    LSmallToe = 20,
    LHeel = 21,
    RBigToe = 22,
    RSmallToe = 23,
    RHeel = 24,
}

impl Body25Joint {
    /// All joints in ordinal order.
    pub const ALL: [Self; NUM_JOINTS] = [
        Self::Nose,
        Self::Neck,
        Self::RShoulder,
        Self::RElbow,
        Self::RWrist,
        Self::LShoulder,
        Self::LElbow,
        Self::LWrist,
        Self::MidHip,
        Self::RHip,
        Self::RKnee,
        Self::RAnkle,
        Self::LHip,
        Self::LKnee,
        Self::LAnkle,
        Self::REye,
        Self::LEye,
        Self::REar,
        Self::LEar,
        Self::LBigToe,
        Self::LSmallToe,
        Self::LHeel,
        Self::RBigToe,
        Self::RSmallToe,
        Self::RHeel,
    ];

    /// Position of this joint in the BODY_25 layout.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Offset of this joint's keypoint triple in the flat array.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.index() * KEYPOINT_LENGTH
    }

    /// Look up a joint by its layout position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_JOINTS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Short identifier, matching the OpenPose naming (`r_elbow`, `midhip`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::Neck => "neck",
            Self::RShoulder => "r_shoulder",
            Self::RElbow => "r_elbow",
            Self::RWrist => "r_wrist",
            Self::LShoulder => "l_shoulder",
            Self::LElbow => "l_elbow",
            Self::LWrist => "l_wrist",
            Self::MidHip => "midhip",
            Self::RHip => "r_hip",
            Self::RKnee => "r_knee",
            Self::RAnkle => "r_ankle",
            Self::LHip => "l_hip",
            Self::LKnee => "l_knee",
            Self::LAnkle => "l_ankle",
            Self::REye => "r_eye",
            Self::LEye => "l_eye",
            Self::REar => "r_ear",
            Self::LEar => "l_ear",
            Self::LBigToe => "l_big_toe",
            Self::LSmallToe => "l_small_toe",
            Self::LHeel => "l_heel",
            Self::RBigToe => "r_big_toe",
            Self::RSmallToe => "r_small_toe",
            Self::RHeel => "r_heel",
        }
    }

    /// Human-readable name used in plot titles.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Nose => "Nose",
            Self::Neck => "Neck",
            Self::RShoulder => "Right Shoulder",
            Self::RElbow => "Right Elbow",
            Self::RWrist => "Right Wrist",
            Self::LShoulder => "Left Shoulder",
            Self::LElbow => "Left Elbow",
            Self::LWrist => "Left Wrist",
            Self::MidHip => "Mid Hip",
            Self::RHip => "Right Hip",
            Self::RKnee => "Right Knee",
            Self::RAnkle => "Right Ankle",
            Self::LHip => "Left Hip",
            Self::LKnee => "Left Knee",
            Self::LAnkle => "Left Ankle",
            Self::REye => "Right Eye",
            Self::LEye => "Left Eye",
            Self::REar => "Right Ear",
            Self::LEar => "Left Ear",
            Self::LBigToe => "Left Big Toe",
            Self::LSmallToe => "Left Small Toe",
            Self::LHeel => "Left Heel",
            Self::RBigToe => "Right Big Toe",
            Self::RSmallToe => "Right Small Toe",
            Self::RHeel => "Right Heel",
        }
    }
}

impl fmt::Display for Body25Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalise a user-supplied joint name: lowercase, `-`/space become `_`.
fn normalize_name(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

impl FromStr for Body25Joint {
    type Err = JointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);

        if let Ok(index) = name.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| JointParseError(s.to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|joint| joint.as_str() == name || normalize_name(joint.display_name()) == name)
            .ok_or_else(|| JointParseError(s.to_string()))
    }
}

/// Error returned when parsing an invalid joint string.
#[derive(Debug, Clone)]
pub struct JointParseError(String);

impl fmt::Display for JointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid joint '{}', expected a BODY_25 name (e.g. r_elbow, left_knee) or index 0-24",
            self.0
        )
    }
}

impl std::error::Error for JointParseError {}

/// Three joints naming a planar angle measured at `vertex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointTriplet {
    /// First outer joint.
    pub a: Body25Joint,
    /// Joint at which the angle is measured.
    pub vertex: Body25Joint,
    /// Second outer joint.
    pub c: Body25Joint,
}

impl JointTriplet {
    /// Right shoulder, elbow, wrist.
    pub const RIGHT_ARM: Self = Self::new(
        Body25Joint::RShoulder,
        Body25Joint::RElbow,
        Body25Joint::RWrist,
    );
    /// Left shoulder, elbow, wrist.
    pub const LEFT_ARM: Self = Self::new(
        Body25Joint::LShoulder,
        Body25Joint::LElbow,
        Body25Joint::LWrist,
    );
    /// Right hip, knee, ankle.
    pub const RIGHT_LEG: Self =
        Self::new(Body25Joint::RHip, Body25Joint::RKnee, Body25Joint::RAnkle);
    /// Left hip, knee, ankle.
    pub const LEFT_LEG: Self =
        Self::new(Body25Joint::LHip, Body25Joint::LKnee, Body25Joint::LAnkle);

    /// Create a triplet from its outer joints and vertex.
    #[must_use]
    pub const fn new(a: Body25Joint, vertex: Body25Joint, c: Body25Joint) -> Self {
        Self { a, vertex, c }
    }

    /// Default plot title, e.g. `Angle Between Right Shoulder--Right Elbow--Right Wrist`.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "Angle Between {}--{}--{}",
            self.a.display_name(),
            self.vertex.display_name(),
            self.c.display_name()
        )
    }
}

impl Default for JointTriplet {
    fn default() -> Self {
        Self::RIGHT_ARM
    }
}

impl fmt::Display for JointTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.a, self.vertex, self.c)
    }
}

impl FromStr for JointTriplet {
    type Err = JointParseError;

    /// Parse either a preset (`right-arm`, `left-leg`, ...) or `a,vertex,c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "right_arm" => return Ok(Self::RIGHT_ARM),
            "left_arm" => return Ok(Self::LEFT_ARM),
            "right_leg" => return Ok(Self::RIGHT_LEG),
            "left_leg" => return Ok(Self::LEFT_LEG),
            _ => {}
        }

        let parts: Vec<&str> = s.split(',').collect();
        let [a, vertex, c] = parts.as_slice() else {
            return Err(JointParseError(s.to_string()));
        };
        Ok(Self::new(a.parse()?, vertex.parse()?, c.parse()?))
    }
}
