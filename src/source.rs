// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Input source handling for pose documents.
//!
//! A source is either a single OpenPose JSON file (one frame) or a directory
//! holding one JSON file per frame.

use std::path::{Path, PathBuf};

use crate::error::{PoseError, Result};
use crate::frame::PoseFrame;

/// Represents the two supported pose inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Path to a single pose document.
    File(PathBuf),
    /// Directory containing one pose document per frame.
    Directory(PathBuf),
}

impl Source {
    /// Resolve a path against the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::NotFound`] if the path is neither a file nor a directory.
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            Ok(Self::Directory(path.to_path_buf()))
        } else if path.is_file() {
            Ok(Self::File(path.to_path_buf()))
        } else {
            Err(PoseError::NotFound(format!(
                "File or directory does not exist: {}",
                path.display()
            )))
        }
    }

    /// Check if this source yields a frame sequence.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// Get the underlying path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::Directory(p) => p,
        }
    }

    /// List the frame files of this source in time order.
    ///
    /// Directory entries are sorted by file name (ascending, lexicographic);
    /// OpenPose's default `<name>_000000000000_keypoints.json` naming sorts
    /// into frame order. Subdirectories are skipped.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directory cannot be read.
    pub fn frame_paths(&self) -> Result<Vec<PathBuf>> {
        match self {
            Self::File(path) => Ok(vec![path.clone()]),
            Self::Directory(dir) => collect_frames_from_dir(dir),
        }
    }
}

/// Collect frame file paths from a directory, sorted by file name.
fn collect_frames_from_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| PoseError::IoError(format!("Failed to read {}: {e}", dir.display())))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Parse every frame of a source, all-or-nothing.
///
/// # Errors
///
/// Returns the first read or parse failure; no frames are returned in that case.
pub fn read_frames(source: &Source) -> Result<Vec<PoseFrame>> {
    source
        .frame_paths()?
        .iter()
        .map(PoseFrame::from_path)
        .collect()
}

impl TryFrom<&str> for Source {
    type Error = PoseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl TryFrom<&Path> for Source {
    type Error = PoseError;

    fn try_from(path: &Path) -> Result<Self> {
        Self::resolve(path)
    }
}

impl TryFrom<PathBuf> for Source {
    type Error = PoseError;

    fn try_from(path: PathBuf) -> Result<Self> {
        Self::resolve(path)
    }
}
