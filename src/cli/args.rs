// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_FPS, DEFAULT_WINDOW, DEFAULT_XLABEL};
use crate::joint::{Body25Joint, JointTriplet};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Examples:
    pose-angles angle --source pose_json_data
    pose-angles angle -s pose_json_data --joints left-leg --show
    pose-angles angle -s pose_json_data --joints r_hip,r_knee,r_ankle --save knee.mp4 --fps 30
    pose-angles angle -s pose_json_data --save runs/frames --window 100
    pose-angles coords -s pose_json_data --joint r_elbow
    pose-angles joints"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a joint angle for every frame and optionally animate it
    Angle(AngleArgs),
    /// Print the coordinates of one joint for every frame
    Coords(CoordsArgs),
    /// List the BODY_25 joint layout
    Joints,
}

/// Arguments for the angle command.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AngleArgs {
    /// OpenPose JSON file or directory of per-frame JSON files
    #[arg(short, long)]
    pub source: PathBuf,

    /// Joints as `outer,vertex,outer` or a preset (right-arm, left-arm, right-leg, left-leg)
    #[arg(short, long, default_value_t = JointTriplet::RIGHT_ARM)]
    pub joints: JointTriplet,

    /// Index of the person in each frame
    #[arg(short, long, default_value_t = 0)]
    pub person: usize,

    /// Report angles in radians instead of degrees
    #[arg(long, default_value_t = false)]
    pub radians: bool,

    /// Sliding-window width in frames
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// Plot title [default: derived from the joints]
    #[arg(long)]
    pub title: Option<String>,

    /// Y-axis label [default: "Angle (deg)" or "Angle (rad)"]
    #[arg(long)]
    pub ylabel: Option<String>,

    /// X-axis label
    #[arg(long, default_value = DEFAULT_XLABEL)]
    pub xlabel: String,

    /// Display the animated plot in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Save the animation: a video file (.mp4) or a directory for PNG frames
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Animation frame rate
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: f32,

    /// TrueType font for plot text [default: cached Arial.ttf]
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Arguments for the coords command.
#[derive(Args, Debug)]
pub struct CoordsArgs {
    /// OpenPose JSON file or directory of per-frame JSON files
    #[arg(short, long)]
    pub source: PathBuf,

    /// Joint name (e.g. r_elbow, left_knee) or BODY_25 index
    #[arg(short, long)]
    pub joint: Body25Joint,

    /// Index of the person in each frame
    #[arg(short, long, default_value_t = 0)]
    pub person: usize,
}
