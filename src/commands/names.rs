//! Scene-name printing and renaming.

use super::{each_file, readable, Context};
use anyhow::{Context as _, Result};
use mkvtool_core::{render_mask, tokenize};
use mkvtool_parser::extract_fields;
use std::path::{Path, PathBuf};

/// Render `mask` with the metadata found in the file name of `file`.
pub fn format_name(mask: &str, file: &Path) -> Result<String> {
    let name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let fields = extract_fields(&name);
    tracing::debug!("Fields for {:?}: {:?}", name, fields);

    Ok(render_mask(&fields, mask)?)
}

/// Path `file` would be renamed to, in the same directory.
pub fn rename_target(mask: &str, file: &Path) -> Result<PathBuf> {
    let name = format_name(mask, file)?;
    if !is_plain_file_name(&name) {
        anyhow::bail!("rendered name {:?} is not a valid file name", name);
    }
    Ok(file.with_file_name(name))
}

fn is_plain_file_name(name: &str) -> bool {
    !(name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', std::path::MAIN_SEPARATOR]))
}

/// Print the rendered mask for every file name. The files need not exist.
pub fn print(ctx: &Context, files: &[PathBuf], mask: Option<&str>) -> Result<()> {
    let mask = mask.unwrap_or(&ctx.config.format.print);
    tokenize(mask).context("Invalid format mask")?;

    each_file(files, |file| {
        println!("{}", format_name(mask, file)?);
        Ok(())
    })
}

/// Rename every file to its rendered mask, printing `old => new`.
pub fn rename(ctx: &Context, files: &[PathBuf], mask: Option<&str>) -> Result<()> {
    let mask = mask.unwrap_or(&ctx.config.format.rename);
    tokenize(mask).context("Invalid format mask")?;

    each_file(readable(files), |file| {
        let target = rename_target(mask, file)?;
        println!("{} => {}", file.display(), target.display());

        if ctx.dry_run || target == file {
            return Ok(());
        }
        if target.exists() {
            anyhow::bail!("refusing to overwrite existing file {:?}", target);
        }

        std::fs::rename(file, &target)
            .with_context(|| format!("Failed to rename to {:?}", target))?;
        tracing::info!("Renamed {:?} to {:?}", file, target);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_name_ignores_directories() {
        let name = format_name(
            "%{title} (%{year})",
            Path::new("/media/2019/Some.Movie.2020.1080p.mkv"),
        )
        .unwrap();
        assert_eq!(name, "Some Movie (2020)");
    }

    #[test]
    fn test_rename_target_stays_in_directory() {
        let target = rename_target(
            "%{title}.%{container}",
            Path::new("/media/tv/Series.Title.S01E02.720p.HDTV.x264-GRP.mkv"),
        )
        .unwrap();
        assert_eq!(target, PathBuf::from("/media/tv/Series Title.mkv"));
    }

    #[test]
    fn test_rename_target_rejects_separators() {
        let err = rename_target("%{title}/x", Path::new("Movie.2020.mkv")).unwrap_err();
        assert!(err.to_string().contains("is not a valid file name"));
    }

    #[test]
    fn test_rename_moves_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Some.Movie.2020.1080p.BluRay.mkv");
        std::fs::write(&source, b"data").unwrap();

        let ctx = Context::default();
        rename(&ctx, &[source.clone()], Some("%{title} (%{year}).%{container}")).unwrap();

        assert!(!source.exists());
        assert!(dir.path().join("Some Movie (2020).mkv").exists());
    }

    #[test]
    fn test_rename_dry_run_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Some.Movie.2020.mkv");
        std::fs::write(&source, b"data").unwrap();

        let ctx = Context::new(Default::default(), true);
        rename(&ctx, &[source.clone()], None).unwrap();

        assert!(source.exists());
        assert!(!dir.path().join("Some Movie.mkv").exists());
    }

    #[test]
    fn test_rename_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Some.Movie.2020.mkv");
        let existing = dir.path().join("Some Movie.mkv");
        std::fs::write(&source, b"new").unwrap();
        std::fs::write(&existing, b"old").unwrap();

        let err = rename(&Context::default(), &[source.clone()], None).unwrap_err();

        assert!(err.to_string().contains("refusing to overwrite"));
        assert!(source.exists());
        assert_eq!(std::fs::read(&existing).unwrap(), b"old");
    }

    #[test]
    fn test_print_rejects_malformed_mask() {
        let err = print(
            &Context::default(),
            &[PathBuf::from("a.mkv")],
            Some("%{title} %9999999{year}"),
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("malformed mask"));
    }
}
