//! Command implementations.
//!
//! Every multi-file command skips unreadable files, keeps going after a
//! per-file failure and reports all failures together at the end.

mod defaults;
mod mux;
mod names;
mod show;
mod tools;

pub use defaults::{set_default, set_default_by_lang};
pub use mux::{merge, only, remux, TrackChoice};
pub use names::{format_name, print, rename, rename_target};
pub use show::{render_table, show};
pub use tools::check_tools;

use crate::config::Config;
use anyhow::Result;
use mkvtool_av::{CommandRunner, DryRunRunner, Runner, Toolset};
use std::path::{Path, PathBuf};

/// State shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: Config,
    /// Print commands and planned renames instead of performing them.
    pub dry_run: bool,
}

impl Context {
    pub fn new(config: Config, dry_run: bool) -> Self {
        Self { config, dry_run }
    }

    pub fn runner(&self) -> Box<dyn Runner> {
        if self.dry_run {
            Box::new(DryRunRunner)
        } else {
            Box::new(CommandRunner)
        }
    }

    /// Locate mkvtoolnix, failing with the list of missing programs.
    pub fn toolset(&self) -> Result<Toolset> {
        let tools = Toolset::resolve(&self.config.tools.overrides())?;
        Ok(tools)
    }
}

/// Files that can be opened, warning about the rest.
pub fn readable(files: &[PathBuf]) -> Vec<&PathBuf> {
    files
        .iter()
        .filter(|file| {
            let ok = std::fs::File::open(file).is_ok();
            if !ok {
                tracing::warn!("File {:?} is not readable. Skipping.", file);
            }
            ok
        })
        .collect()
}

/// Run `action` on every file, collecting failures as `<file>: <error>`.
pub fn each_file<'a, I, F>(files: I, mut action: F) -> Result<()>
where
    I: IntoIterator<Item = &'a PathBuf>,
    F: FnMut(&Path) -> Result<()>,
{
    let mut failures = Vec::new();

    for file in files {
        if let Err(err) = action(file) {
            tracing::debug!("{:?} failed: {:?}", file, err);
            failures.push(format!("{}: {:#}", file.display(), err));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{}", failures.join("\n"))
    }
}
