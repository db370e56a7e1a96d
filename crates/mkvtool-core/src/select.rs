//! Track selection.
//!
//! A track is chosen either by its explicit index or by an ordered language
//! preference. Language selection is a total order, not a score: languages
//! are tried in priority order and, within a language, tracks in container
//! order. The first track that is of the wanted type, has the wanted language
//! and whose name contains none of the exclusion substrings wins.

use crate::error::SelectionError;
use crate::track::{MediaFile, Track, TrackType};

/// Reserved language token meaning "the container's implicit language",
/// i.e. tracks with no language element.
pub const DEFAULT_LANGUAGE_TOKEN: &str = "default";

/// Language value of a track without a language element.
pub const IMPLICIT_LANGUAGE: &str = "";

/// How to pick a track. The two ways are never combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Pick the track with exactly this zero-based index.
    Index(usize),
    /// Pick by ordered language preference.
    Language {
        languages: Vec<String>,
        track_type: TrackType,
        exclude: Vec<String>,
    },
}

impl SelectionPolicy {
    pub fn by_index(index: usize) -> Self {
        Self::Index(index)
    }

    pub fn by_language<L, E>(
        languages: impl IntoIterator<Item = L>,
        track_type: TrackType,
        exclude: impl IntoIterator<Item = E>,
    ) -> Self
    where
        L: Into<String>,
        E: Into<String>,
    {
        Self::Language {
            languages: languages.into_iter().map(Into::into).collect(),
            track_type,
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }
}

/// Resolve a policy against the tracks of a file.
pub fn select_track<'a>(
    file: &'a MediaFile,
    policy: &SelectionPolicy,
) -> Result<&'a Track, SelectionError> {
    match policy {
        SelectionPolicy::Index(index) => select_by_index(file, *index),
        SelectionPolicy::Language {
            languages,
            track_type,
            exclude,
        } => select_by_language_priority(
            file,
            languages.as_slice(),
            track_type,
            exclude.as_slice(),
        ),
    }
}

/// Return the track whose index is exactly `index`.
pub fn select_by_index(file: &MediaFile, index: usize) -> Result<&Track, SelectionError> {
    file.tracks
        .iter()
        .find(|t| t.index == index)
        .ok_or_else(|| SelectionError::not_found(index, &file.file_name))
}

/// Return the first track of `track_type` matching the highest priority
/// language that has a non-excluded candidate.
///
/// [`DEFAULT_LANGUAGE_TOKEN`] in `languages` matches tracks without a
/// language. A track whose name contains (case-insensitively) any of
/// `exclude` is skipped for every language.
pub fn select_by_language_priority<'a, L, E>(
    file: &'a MediaFile,
    languages: &[L],
    track_type: &TrackType,
    exclude: &[E],
) -> Result<&'a Track, SelectionError>
where
    L: AsRef<str>,
    E: AsRef<str>,
{
    let exclude: Vec<String> = exclude.iter().map(|e| e.as_ref().to_lowercase()).collect();

    for language in languages {
        let wanted = resolve_language(language.as_ref());

        let found = file.tracks.iter().find(|track| {
            &track.track_type == track_type
                && track.language == wanted
                && !is_excluded(&track.name, &exclude)
        });

        if let Some(track) = found {
            return Ok(track);
        }
    }

    Err(SelectionError::NoMatch {
        languages: languages.iter().map(|l| l.as_ref().to_string()).collect(),
    })
}

fn resolve_language(language: &str) -> &str {
    if language == DEFAULT_LANGUAGE_TOKEN {
        IMPLICIT_LANGUAGE
    } else {
        language
    }
}

/// `exclude` must already be lowercase.
fn is_excluded(name: &str, exclude: &[String]) -> bool {
    let name = name.to_lowercase();
    exclude.iter().any(|pattern| name.contains(pattern.as_str()))
}
