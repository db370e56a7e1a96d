//! Container introspection via `mkvmerge -J`.

use crate::{Error, Result};
use mkvtool_core::{MediaFile, Track, TrackType};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct Identification {
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    tracks: Vec<IdentifiedTrack>,
}

#[derive(Debug, Deserialize)]
struct IdentifiedTrack {
    id: usize,
    #[serde(rename = "type")]
    track_type: String,
    #[serde(default)]
    codec: String,
    #[serde(default)]
    properties: TrackProperties,
}

#[derive(Debug, Default, Deserialize)]
struct TrackProperties {
    language: Option<String>,
    track_name: Option<String>,
    #[serde(default)]
    default_track: bool,
    uid: Option<u64>,
}

impl From<IdentifiedTrack> for Track {
    fn from(track: IdentifiedTrack) -> Self {
        let props = track.properties;
        Track::new(track.id, TrackType::from(track.track_type))
            .with_codec(track.codec)
            .with_language(props.language.unwrap_or_default())
            .with_name(props.track_name.unwrap_or_default())
            .with_default(props.default_track)
            .with_uid(props.uid.unwrap_or(0))
    }
}

/// List the tracks of a Matroska file.
///
/// Track errors mention the file the way it was given on the command line.
pub fn probe(mkvmerge: &Path, path: &Path) -> Result<MediaFile> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Identifying {:?}", path);

    let output = Command::new(mkvmerge)
        .arg("-J")
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found("mkvmerge")
            } else {
                Error::Io(e)
            }
        })?;

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("mkvmerge", format!("Invalid UTF-8: {}", e)))?;

    // Identification failures still produce JSON with an `errors` list.
    if !output.status.success() && output.status.code() != Some(1) {
        return match parse_identification(&json_str, &path.display().to_string()) {
            Err(err @ Error::ToolFailed { .. }) => Err(err),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(Error::tool_failed("mkvmerge", stderr.trim()))
            }
        };
    }

    parse_identification(&json_str, &path.display().to_string())
}

/// Decode `mkvmerge -J` output into the tracks of `file_name`.
pub fn parse_identification(json: &str, file_name: &str) -> Result<MediaFile> {
    let identification: Identification = serde_json::from_str(json)?;

    if !identification.errors.is_empty() {
        return Err(Error::tool_failed(
            "mkvmerge",
            identification.errors.join("; "),
        ));
    }

    let tracks = identification
        .tracks
        .into_iter()
        .map(Track::from)
        .collect();

    Ok(MediaFile::new(file_name, tracks))
}
