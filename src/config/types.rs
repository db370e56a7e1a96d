use mkvtool_av::ToolOverrides;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub subtitles: SubtitlesConfig,
}

/// Explicit mkvtoolnix locations. Unset entries are searched in `PATH`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub mkvmerge_path: Option<PathBuf>,

    #[serde(default)]
    pub mkvextract_path: Option<PathBuf>,

    #[serde(default)]
    pub mkvpropedit_path: Option<PathBuf>,
}

impl ToolsConfig {
    pub fn overrides(&self) -> ToolOverrides {
        ToolOverrides {
            mkvmerge: self.mkvmerge_path.clone(),
            mkvextract: self.mkvextract_path.clone(),
            mkvpropedit: self.mkvpropedit_path.clone(),
        }
    }

    pub fn configured_paths(&self) -> impl Iterator<Item = &PathBuf> {
        [
            &self.mkvmerge_path,
            &self.mkvextract_path,
            &self.mkvpropedit_path,
        ]
        .into_iter()
        .flatten()
    }
}

/// Default masks for `print` and `rename`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormatConfig {
    #[serde(default = "default_print_mask")]
    pub print: String,

    #[serde(default = "default_rename_mask")]
    pub rename: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            print: default_print_mask(),
            rename: default_rename_mask(),
        }
    }
}

fn default_print_mask() -> String {
    "%{title}.mkv".to_string()
}

fn default_rename_mask() -> String {
    "%{title}.%{container}".to_string()
}

/// Fallbacks for `setdefaultbylang` when no `--lang`/`--ignore` is given.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SubtitlesConfig {
    /// Language priority, highest first. `default` means "no language".
    #[serde(default)]
    pub languages: Vec<String>,

    /// Track-name substrings that disqualify a track (case-insensitive).
    #[serde(default)]
    pub ignore: Vec<String>,
}
