//! # mkvtool-av
//!
//! mkvtoolnix integration for mkvtool.
//!
//! This crate provides functionality for:
//! - Locating `mkvmerge`, `mkvextract` and `mkvpropedit`
//! - Listing the tracks of a Matroska file (`mkvmerge -J`)
//! - Setting the default subtitle track, extracting tracks, muxing and
//!   remuxing
//!
//! Commands are executed through a [`Runner`], which makes dry runs and
//! tests possible without touching any file.
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use mkvtool_av::{actions, probe, CommandRunner, ToolOverrides, Toolset};
//! use std::path::Path;
//!
//! let tools = Toolset::resolve(&ToolOverrides::default())?;
//! let file = probe(&tools.mkvmerge, Path::new("movie.mkv"))?;
//! actions::set_default_track(&tools, &file, 2, &CommandRunner)?;
//! # Ok::<(), mkvtool_av::Error>(())
//! ```

mod error;
pub mod actions;
pub mod probe;
pub mod runner;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use probe::{parse_identification, probe};
pub use runner::{command_line, CommandRunner, DryRunRunner, RecordingRunner, Runner};
pub use tools::{
    check_tool, check_tools, get_tool_path, require_tool, ToolInfo, ToolOverrides, Toolset,
};
