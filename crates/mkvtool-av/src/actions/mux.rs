//! Subtitle muxing and remuxing with mkvmerge.

use super::{path_arg, ExtractedTrack};
use crate::{Error, Result, Runner, Toolset};
use std::path::Path;

/// Arguments muxing extracted tracks into a copy of `input`.
///
/// Tracks without a language are added without a `--language` option.
pub fn submux_args(
    input: &Path,
    output: &Path,
    drop_subs: bool,
    extracted: &[ExtractedTrack],
) -> Vec<String> {
    let mut args = vec!["-o".to_string(), path_arg(output)];
    if drop_subs {
        args.push("-S".to_string());
    }
    args.push(path_arg(input));
    for track in extracted {
        if !track.language.is_empty() {
            args.push("--language".to_string());
            args.push(format!("0:{}", track.language));
        }
        args.push(path_arg(&track.path));
    }
    args
}

/// Write `input` plus the extracted tracks into `output`.
///
/// With `drop_subs`, the subtitle tracks already in `input` are left out.
pub fn submux(
    tools: &Toolset,
    input: &Path,
    output: &Path,
    drop_subs: bool,
    extracted: &[ExtractedTrack],
    runner: &dyn Runner,
) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::info!("Muxing {} track(s) into {:?}", extracted.len(), output);

    runner.run(
        &tools.mkvmerge,
        &submux_args(input, output, drop_subs, extracted),
    )
}

pub fn remux_args<P: AsRef<Path>>(inputs: &[P], output: &Path, keep_subs: bool) -> Vec<String> {
    let mut args = Vec::with_capacity(inputs.len() + 3);
    if !keep_subs {
        args.push("-S".to_string());
    }
    args.extend(inputs.iter().map(|p| path_arg(p.as_ref())));
    args.push("-o".to_string());
    args.push(path_arg(output));
    args
}

/// Merge `inputs` into `output`, optionally without subtitles.
pub fn remux<P: AsRef<Path>>(
    tools: &Toolset,
    inputs: &[P],
    output: &Path,
    keep_subs: bool,
    runner: &dyn Runner,
) -> Result<()> {
    if inputs.is_empty() {
        return Err(Error::InvalidInput("no input files to remux".to_string()));
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Remuxing {} file(s) into {:?}", inputs.len(), output);

    runner.run(&tools.mkvmerge, &remux_args(inputs, output, keep_subs))
}
