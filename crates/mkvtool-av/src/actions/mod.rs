//! mkvtoolnix operations.
//!
//! Each operation has a pure argument builder and an executing function
//! that hands the arguments to a [`Runner`](crate::Runner).
//!
//! - Default subtitle flag editing (`mkvpropedit`)
//! - Track extraction (`mkvextract`)
//! - Subtitle muxing and remuxing (`mkvmerge`)

mod default;
mod extract;
mod mux;

pub use default::{clear_default_args, flag_default_args, set_default_track, MKVPROPEDIT_TRACK_OFFSET};
pub use extract::{extract_args, extract_track, ExtractedTrack};
pub use mux::{remux, remux_args, submux, submux_args};

/// Lossy path-to-argument conversion; mkvtoolnix takes UTF-8 file names.
pub(crate) fn path_arg(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}
