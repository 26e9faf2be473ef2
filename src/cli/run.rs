// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::analysis::{SeriesSummary, angle_series};
use crate::cli::args::{AngleArgs, CoordsArgs};
use crate::cli::logging::set_verbose;
use crate::config::PlotConfig;
use crate::error::Result;
use crate::joint::{Body25Joint, KEYPOINT_LENGTH};
use crate::store::{FrameStore, JointCoords};
use crate::visualizer::{AnglePlot, AnimationTarget};
use crate::{info, section, verbose, warn};

/// Build the plot configuration from CLI arguments.
pub fn plot_config(args: &AngleArgs) -> PlotConfig {
    let mut config = PlotConfig::new();
    if args.radians {
        config = config.for_radians();
    }
    config = config
        .with_window(args.window)
        .with_fps(args.fps)
        .with_title(args.title.clone().unwrap_or_else(|| args.joints.title()))
        .with_xlabel(args.xlabel.clone());
    if let Some(ylabel) = &args.ylabel {
        config = config.with_ylabel(ylabel.clone());
    }
    if let Some(font) = &args.font {
        config = config.with_font(font.clone());
    }
    config
}

/// Compute the per-frame angle for a joint triplet, print it, and animate it
/// when `--show` or `--save` is given.
///
/// # Errors
///
/// Returns any load, lookup, angle, or plotting error.
pub fn run_angle(args: &AngleArgs) -> Result<()> {
    set_verbose(args.verbose);
    let config = plot_config(args);
    config.validate()?;

    let store = FrameStore::load(&args.source)?;
    let angles = angle_series(&store, args.joints, args.person, !args.radians)?;
    let unit = if args.radians { "rad" } else { "deg" };

    section!("{}", config.title);
    for (frame, angle) in angles.iter().enumerate() {
        verbose!("frame {frame:>6}: {angle:8.3} {unit}");
    }

    match SeriesSummary::from_values(&angles) {
        Some(s) => {
            info!(
                "{} frames, min {:.3} {unit}, max {:.3} {unit}, mean {:.3} {unit}",
                s.count, s.min, s.max, s.mean
            );
        }
        None => {
            warn!("No frames found in {}", args.source.display());
            return Ok(());
        }
    }

    if !args.show && args.save.is_none() {
        return Ok(());
    }

    let plot = AnglePlot::new(&angles, config)?;
    if let Some(path) = &args.save {
        plot.animate(&AnimationTarget::for_path(path))?;
    }
    if args.show {
        plot.animate(&AnimationTarget::Window)?;
    }
    Ok(())
}

/// Print one joint's coordinates per frame.
///
/// # Errors
///
/// Returns any load or lookup error.
pub fn run_coords(args: &CoordsArgs) -> Result<()> {
    let store = FrameStore::load(&args.source)?;

    info!("{:>6} {:>12} {:>12} {:>10}", "frame", "x", "y", "confidence");
    match store.joint_coords(args.joint, args.person)? {
        JointCoords::Single(kp) => {
            info!("{:>6} {:>12.3} {:>12.3} {:>10.3}", 0, kp.x, kp.y, kp.confidence);
        }
        JointCoords::Sequence(track) => {
            for (frame, kp) in track.iter().enumerate() {
                info!(
                    "{frame:>6} {:>12.3} {:>12.3} {:>10.3}",
                    kp.x, kp.y, kp.confidence
                );
            }
        }
    }
    Ok(())
}

/// Print the BODY_25 layout: index, name, and keypoint array offset.
pub fn run_joints() {
    section!("BODY_25 joints");
    info!("{:>5}  {:<12} {:<16} {:>6}", "index", "id", "name", "offset");
    for joint in Body25Joint::ALL {
        info!(
            "{:>5}  {:<12} {:<16} {:>6}",
            joint.index(),
            joint.as_str(),
            joint.display_name(),
            joint.index() * KEYPOINT_LENGTH
        );
    }
}
