// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for the `pose-angles` binary.
//!
//! This module contains the command-line interface logic, including argument
//! parsing, console output, and the command implementations.

// Modules
/// CLI arguments.
pub mod args;

/// Console output macros and verbosity.
pub mod logging;

/// Command implementations.
pub mod run;
