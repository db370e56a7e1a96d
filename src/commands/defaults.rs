//! Default subtitle track selection.

use super::{each_file, readable, Context};
use anyhow::Result;
use mkvtool_av::{actions, probe};
use mkvtool_core::{select_track, SelectionPolicy, TrackType};
use std::path::PathBuf;

/// Make track `track` the default subtitle track of every file.
pub fn set_default(ctx: &Context, files: &[PathBuf], track: usize) -> Result<()> {
    let tools = ctx.toolset()?;
    let runner = ctx.runner();

    each_file(readable(files), |file| {
        let media = probe(&tools.mkvmerge, file)?;
        actions::set_default_track(&tools, &media, track, runner.as_ref())?;
        Ok(())
    })
}

/// Pick the default subtitle track of every file by language priority.
///
/// Empty `languages`/`ignore` fall back to the `[subtitles]` section of the
/// configuration.
pub fn set_default_by_lang(
    ctx: &Context,
    files: &[PathBuf],
    languages: &[String],
    ignore: &[String],
) -> Result<()> {
    let policy = language_policy(ctx, languages, ignore)?;
    let tools = ctx.toolset()?;
    let runner = ctx.runner();

    each_file(readable(files), |file| {
        let media = probe(&tools.mkvmerge, file)?;
        let track = select_track(&media, &policy)?;
        tracing::info!(
            "Selected track {} ({}) in {:?}",
            track.index,
            track.language,
            file
        );
        actions::set_default_track(&tools, &media, track.index, runner.as_ref())?;
        Ok(())
    })
}

fn language_policy(ctx: &Context, languages: &[String], ignore: &[String]) -> Result<SelectionPolicy> {
    let subtitles = &ctx.config.subtitles;
    let languages = if languages.is_empty() {
        subtitles.languages.as_slice()
    } else {
        languages
    };
    let ignore = if ignore.is_empty() {
        subtitles.ignore.as_slice()
    } else {
        ignore
    };

    if languages.is_empty() {
        anyhow::bail!("no language given (use --lang or set [subtitles] languages in the config file)");
    }

    Ok(SelectionPolicy::by_language(
        languages.iter().cloned(),
        TrackType::Subtitles,
        ignore.iter().cloned(),
    ))
}
