//! # mkvtool-core
//!
//! The pure parts of mkvtool: deciding which track of a Matroska file to act
//! on, and rendering new file names from release metadata.
//!
//! Nothing in this crate performs I/O. Track lists come from container
//! introspection (see `mkvtool-av`) and field mappings come from release-name
//! extraction (see `mkvtool-parser`); both are plain values here.
//!
//! ## Track selection
//!
//! ```
//! use mkvtool_core::{select_track, MediaFile, SelectionPolicy, Track, TrackType};
//!
//! let file = MediaFile::new(
//!     "movie.mkv",
//!     vec![
//!         Track::new(0, TrackType::Video),
//!         Track::new(1, TrackType::Subtitles).with_language("fra"),
//!         Track::new(2, TrackType::Subtitles).with_language("eng"),
//!     ],
//! );
//!
//! let policy = SelectionPolicy::by_language(["eng", "fra"], TrackType::Subtitles, ["forced"]);
//! let track = select_track(&file, &policy)?;
//! assert_eq!(track.index, 2);
//! # Ok::<(), mkvtool_core::SelectionError>(())
//! ```
//!
//! ## Mask rendering
//!
//! ```
//! use mkvtool_core::{render_mask, Fields};
//!
//! let fields = Fields::new()
//!     .with_text("title", "foo")
//!     .with_number("season", 1)
//!     .with_number("episode", 2);
//!
//! let name = render_mask(&fields, "%{title} S%02.2{season}E%02.2{episode}")?;
//! assert_eq!(name, "Foo S01E02");
//! # Ok::<(), mkvtool_core::MaskError>(())
//! ```

mod error;
pub mod fields;
pub mod mask;
pub mod select;
pub mod track;

pub use error::{MaskError, SelectionError};
pub use fields::{FieldValue, Fields, UNSET_NUMBER_CEILING};
pub use mask::{render_mask, tokenize, Segment, SizeSpec, Token};
pub use select::{
    select_by_index, select_by_language_priority, select_track, SelectionPolicy,
    DEFAULT_LANGUAGE_TOKEN, IMPLICIT_LANGUAGE,
};
pub use track::{MediaFile, Track, TrackType};
