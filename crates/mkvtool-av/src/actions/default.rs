//! Default subtitle flag editing.

use super::path_arg;
use crate::{Result, Runner, Toolset};
use mkvtool_core::{select_by_index, MediaFile};
use std::path::Path;

/// mkvpropedit numbers tracks from 1, the rest of mkvtoolnix from 0.
pub const MKVPROPEDIT_TRACK_OFFSET: usize = 1;

/// Arguments setting the default flag of zero-based track `index`.
pub fn flag_default_args(file: &Path, index: usize, default: bool) -> Vec<String> {
    vec![
        path_arg(file),
        "--edit".to_string(),
        format!("track:{}", index + MKVPROPEDIT_TRACK_OFFSET),
        "--set".to_string(),
        format!("flag-default={}", u8::from(default)),
    ]
}

/// Arguments clearing the default flag of every zero-based track in
/// `indices` with a single mkvpropedit run.
pub fn clear_default_args(file: &Path, indices: impl IntoIterator<Item = usize>) -> Vec<String> {
    let mut args = vec![path_arg(file)];
    for index in indices {
        args.extend([
            "--edit".to_string(),
            format!("track:{}", index + MKVPROPEDIT_TRACK_OFFSET),
            "--set".to_string(),
            "flag-default=0".to_string(),
        ]);
    }
    args
}

/// Make track `index` the only default subtitle track of `file`.
///
/// The index is checked before anything is modified. One mkvpropedit run
/// clears the default flag of every subtitle track, a second one sets it
/// on the chosen track.
pub fn set_default_track(
    tools: &Toolset,
    file: &MediaFile,
    index: usize,
    runner: &dyn Runner,
) -> Result<()> {
    select_by_index(file, index)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Setting track {} as default in {}", index, file.file_name);

    let path = Path::new(&file.file_name);
    let subtitles: Vec<usize> = file.subtitle_tracks().map(|track| track.index).collect();
    if !subtitles.is_empty() {
        runner.run(&tools.mkvpropedit, &clear_default_args(path, subtitles))?;
    }
    runner.run(&tools.mkvpropedit, &flag_default_args(path, index, true))
}
