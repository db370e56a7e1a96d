//! Track extraction.

use super::path_arg;
use crate::{Result, Runner, Toolset};
use mkvtool_core::{select_by_index, MediaFile};
use std::path::{Path, PathBuf};

/// A track written to its own file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTrack {
    /// Language of the source track, possibly empty.
    pub language: String,
    pub path: PathBuf,
}

pub fn extract_args(file: &Path, index: usize, dest: &Path) -> Vec<String> {
    vec![
        path_arg(file),
        "tracks".to_string(),
        format!("{}:{}", index, path_arg(dest)),
    ]
}

/// Extract track `index` of `file` into `dest`.
pub fn extract_track(
    tools: &Toolset,
    file: &MediaFile,
    index: usize,
    dest: &Path,
    runner: &dyn Runner,
) -> Result<ExtractedTrack> {
    let track = select_by_index(file, index)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Extracting track {} of {} to {:?}", index, file.file_name, dest);

    runner.run(
        &tools.mkvextract,
        &extract_args(Path::new(&file.file_name), index, dest),
    )?;

    Ok(ExtractedTrack {
        language: track.language.clone(),
        path: dest.to_path_buf(),
    })
}
