//! Track model shared by introspection, selection and the command builders.
//!
//! Track indices follow the container's native zero-based numbering, as
//! reported by `mkvmerge --identify`. Tools that count from one apply their
//! own offset when building arguments.

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Short names accepted wherever a user names a track type.
static TRACK_TYPE_ALIASES: phf::Map<&'static str, TrackType> = phf_map! {
    "a" => TrackType::Audio,
    "aud" => TrackType::Audio,
    "audio" => TrackType::Audio,
    "v" => TrackType::Video,
    "vid" => TrackType::Video,
    "video" => TrackType::Video,
    "s" => TrackType::Subtitles,
    "sub" => TrackType::Subtitles,
    "subtitles" => TrackType::Subtitles,
};

/// Kind of stream held by a track.
///
/// Types the container reports that are not video, audio or subtitles are
/// kept verbatim in [`TrackType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackType {
    Video,
    Audio,
    Subtitles,
    Other(String),
}

impl TrackType {
    /// Name used by mkvtoolnix for this type.
    pub fn as_str(&self) -> &str {
        match self {
            TrackType::Video => "video",
            TrackType::Audio => "audio",
            TrackType::Subtitles => "subtitles",
            TrackType::Other(name) => name,
        }
    }

    /// Resolve a user supplied alias (`s`, `sub`, `subtitles`, ...).
    ///
    /// Only the three known types have aliases; anything else is `None`.
    pub fn from_alias(alias: &str) -> Option<TrackType> {
        TRACK_TYPE_ALIASES.get(alias).cloned()
    }
}

impl From<String> for TrackType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "video" => TrackType::Video,
            "audio" => TrackType::Audio,
            "subtitles" => TrackType::Subtitles,
            _ => TrackType::Other(s),
        }
    }
}

impl From<&str> for TrackType {
    fn from(s: &str) -> Self {
        TrackType::from(s.to_string())
    }
}

impl From<TrackType> for String {
    fn from(t: TrackType) -> Self {
        match t {
            TrackType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stream inside a Matroska file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Zero-based track number.
    pub index: usize,
    /// Stream kind.
    #[serde(rename = "type")]
    pub track_type: TrackType,
    /// Language code. Empty when the track carries no language element.
    pub language: String,
    /// Track name, possibly empty.
    pub name: String,
    /// Codec identifier.
    pub codec: String,
    /// Whether the track carries the "default" flag.
    pub is_default: bool,
    /// Track UID, zero when unknown.
    pub uid: u64,
}

impl Track {
    /// Create a track with empty language, name and codec.
    pub fn new(index: usize, track_type: TrackType) -> Self {
        Self {
            index,
            track_type,
            language: String::new(),
            name: String::new(),
            codec: String::new(),
            is_default: false,
            uid: 0,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_codec(mut self, codec: impl Into<String>) -> Self {
        self.codec = codec.into();
        self
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn with_uid(mut self, uid: u64) -> Self {
        self.uid = uid;
        self
    }

    /// Whether this is a subtitle track.
    pub fn is_subtitle(&self) -> bool {
        self.track_type == TrackType::Subtitles
    }
}

/// The tracks of one file, in container order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    /// File name as given to the introspection tool.
    pub file_name: String,
    pub tracks: Vec<Track>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            file_name: file_name.into(),
            tracks,
        }
    }

    /// Iterate over the subtitle tracks.
    pub fn subtitle_tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.is_subtitle())
    }
}
