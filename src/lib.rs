// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Pose Angles
//!
//! Joint-angle time series from [OpenPose](https://github.com/CMU-Perceptual-Computing-Lab/openpose)
//! BODY_25 keypoints, with a sliding-window animated plot of the result.
//!
//! ## Features
//!
//! - **BODY_25 layout** - Closed [`Body25Joint`] enum pinned to the OpenPose keypoint order
//! - **Frame store** - Load one JSON file or a directory of per-frame files in file-name order
//! - **Angle math** - Vertex-centred joint angles with explicit handling of degenerate vectors
//! - **Animation** - Sliding-window line plot in a window, as MP4, or as PNG frames
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use pose_angles::{FrameStore, JointTriplet, angle_series};
//!
//! fn main() -> pose_angles::Result<()> {
//!     // Directory with one OpenPose JSON file per frame
//!     let store = FrameStore::load("pose_json_data")?;
//!
//!     // Right shoulder -- right elbow -- right wrist, person 0, in degrees
//!     let angles = angle_series(&store, JointTriplet::RIGHT_ARM, 0, true)?;
//!     for (frame, angle) in angles.iter().enumerate() {
//!         println!("frame {frame}: {angle:.1} deg");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Raw joint coordinates, including confidence, are available from the store:
//!
//! ```no_run
//! use pose_angles::{Body25Joint, FrameStore, JointCoords};
//!
//! # fn main() -> pose_angles::Result<()> {
//! let store = FrameStore::load("pose_json_data")?;
//! if let JointCoords::Sequence(track) = store.joint_coords(Body25Joint::RElbow, 0)? {
//!     println!("{} frames, first x = {:?}", track.len(), track.x.first());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The angle primitives work on plain points:
//!
//! ```rust
//! use pose_angles::geometry::{Point2, angle_between, make_vector};
//!
//! let v1 = make_vector(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
//! let v2 = make_vector(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0));
//! let angle = angle_between(v1, v2, true).unwrap();
//! assert!((angle - 90.0).abs() < 1e-9);
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Right-arm angle for every frame, with a summary
//! pose-angles angle --source pose_json_data
//!
//! # Animate a knee angle in a window
//! pose-angles angle -s pose_json_data --joints right-leg --show
//!
//! # Save the animation as video (requires the `video` feature)
//! pose-angles angle -s pose_json_data --save angles.mp4 --fps 30
//!
//! # Save the animation as PNG frames
//! pose-angles angle -s pose_json_data --save runs/frames
//!
//! # Coordinates of one joint per frame
//! pose-angles coords -s pose_json_data --joint r_wrist
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`joint`] | BODY_25 joint enum and joint triplets |
//! | [`frame`] | OpenPose JSON document types |
//! | [`source`] | File / directory input resolution |
//! | [`store`] | [`FrameStore`] and joint coordinate queries |
//! | [`geometry`] | Vector construction and angle computation |
//! | [`analysis`] | Per-frame angle series |
//! | [`config`] | [`PlotConfig`] for the animation |
//! | [`visualizer`] | Sliding-window controller, chart renderer, viewer |
//! | [`io`] | Video and PNG frame writers |
//! | [`error`] | Error types ([`PoseError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `visualize` | Real-time window display (default) |
//! | `video` | MP4 export through FFmpeg |

// Modules
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod io;
pub mod joint;
pub mod source;
pub mod store;
pub mod visualizer;

// Re-export main types for convenience
pub use analysis::{SeriesSummary, angle_series};
pub use config::PlotConfig;
pub use error::{PoseError, Result};
pub use frame::{Keypoint, Person, PoseFrame};
pub use geometry::{Point2, Vector2, angle_between, joint_angle, make_vector};
pub use joint::{Body25Joint, JointTriplet};
pub use source::Source;
pub use store::{FrameStore, JointCoords, JointTrack};
pub use visualizer::{AnglePlot, AnimationTarget, SlidingWindow};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
