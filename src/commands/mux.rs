//! Merging, remuxing and single-track extraction.

use super::Context;
use anyhow::{anyhow, Context as _, Result};
use mkvtool_av::{actions, probe};
use mkvtool_core::{select_track, SelectionPolicy, TrackType};
use std::path::{Path, PathBuf};

/// How `only` picks the track to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackChoice {
    Index(usize),
    Language {
        languages: Vec<String>,
        /// Track type alias (`a`, `v`, `s` or their long forms).
        track_type: String,
        ignore: Vec<String>,
    },
}

impl TrackChoice {
    fn policy(&self) -> Result<SelectionPolicy> {
        match self {
            TrackChoice::Index(index) => Ok(SelectionPolicy::by_index(*index)),
            TrackChoice::Language {
                languages,
                track_type,
                ignore,
            } => {
                let track_type = TrackType::from_alias(track_type).ok_or_else(|| {
                    anyhow!("invalid track type (use a, v, or s): {}", track_type)
                })?;
                Ok(SelectionPolicy::by_language(
                    languages.iter().cloned(),
                    track_type,
                    ignore.iter().cloned(),
                ))
            }
        }
    }
}

/// Merge `files` into `output`.
pub fn merge(ctx: &Context, files: &[PathBuf], output: &Path, keep_subs: bool) -> Result<()> {
    let tools = ctx.toolset()?;
    actions::remux(&tools, files, output, keep_subs, ctx.runner().as_ref())?;
    Ok(())
}

/// Remux a single file, subtitles included.
pub fn remux(ctx: &Context, input: &Path, output: &Path) -> Result<()> {
    let tools = ctx.toolset()?;
    actions::remux(&tools, &[input], output, true, ctx.runner().as_ref())?;
    Ok(())
}

/// Write `input` to `output` keeping a single subtitle track.
///
/// The chosen track is extracted to a temporary directory, then muxed back
/// into a copy of `input` stripped of its subtitles.
pub fn only(ctx: &Context, input: &Path, output: &Path, choice: &TrackChoice) -> Result<()> {
    let policy = choice.policy()?;
    let tools = ctx.toolset()?;
    let runner = ctx.runner();

    let media = probe(&tools.mkvmerge, input)?;
    let track = select_track(&media, &policy)?;
    tracing::info!("Keeping track {} of {:?}", track.index, input);

    let workdir = tempfile::Builder::new()
        .prefix("mkvtool-")
        .tempdir()
        .context("Failed to create temporary directory")?;
    let dest = workdir.path().join(format!("track{}", track.index));

    let extracted = actions::extract_track(&tools, &media, track.index, &dest, runner.as_ref())?;
    actions::submux(
        &tools,
        input,
        output,
        true,
        std::slice::from_ref(&extracted),
        runner.as_ref(),
    )?;

    Ok(())
}
