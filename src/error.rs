// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for pose loading, angle math, and plotting.

use std::fmt;

/// Result type alias for pose-angle operations.
pub type Result<T> = std::result::Result<T, PoseError>;

/// Main error type for the library.
#[derive(Debug)]
pub enum PoseError {
    /// Load path is neither an existing file nor a directory.
    NotFound(String),
    /// Malformed pose document or keypoint array of the wrong size.
    FormatError(String),
    /// Requested person index has no record in a frame.
    LookupError(String),
    /// Extracted per-joint sequences disagree in length.
    ConsistencyError(String),
    /// Zero-length vector passed to an angle computation.
    DegenerateInput(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// IO error with context.
    IoError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
    /// Plot rasterisation or image encoding error.
    RenderError(String),
    /// Visualizer error.
    VisualizerError(String),
    /// Video encoding error.
    VideoError(String),
    /// Feature not enabled.
    FeatureNotEnabled(String),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::FormatError(msg) => write!(f, "Format error: {msg}"),
            Self::LookupError(msg) => write!(f, "Lookup error: {msg}"),
            Self::ConsistencyError(msg) => write!(f, "Consistency error: {msg}"),
            Self::DegenerateInput(msg) => write!(f, "Degenerate input: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::RenderError(msg) => write!(f, "Render error: {msg}"),
            Self::VisualizerError(msg) => write!(f, "Visualizer error: {msg}"),
            Self::VideoError(msg) => write!(f, "Video error: {msg}"),
            Self::FeatureNotEnabled(msg) => write!(f, "Feature not enabled: {msg}"),
        }
    }
}

impl std::error::Error for PoseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PoseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for PoseError {
    fn from(err: image::ImageError) -> Self {
        Self::RenderError(err.to_string())
    }
}
