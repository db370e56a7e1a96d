//! External tool detection and management.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Matroska multiplexer, also used for identification.
pub const MKVMERGE: &str = "mkvmerge";
/// Track extractor.
pub const MKVEXTRACT: &str = "mkvextract";
/// In-place property editor.
pub const MKVPROPEDIT: &str = "mkvpropedit";

/// Every program mkvtool drives.
pub const REQUIRED_TOOLS: [&str; 3] = [MKVMERGE, MKVEXTRACT, MKVPROPEDIT];

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool is available and get its information.
///
/// # Example
///
/// ```no_run
/// use mkvtool_av::check_tool;
///
/// let info = check_tool("mkvmerge");
/// if info.available {
///     println!("mkvmerge version: {:?}", info.version);
/// }
/// ```
pub fn check_tool(name: &str) -> ToolInfo {
    check_tool_at(name, Path::new(name))
}

/// Check a tool at an explicit location, reporting it under `name`.
pub fn check_tool_at(name: &str, program: &Path) -> ToolInfo {
    let result = Command::new(program).arg("--version").output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string());

            let path = which::which(program).ok();

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path,
            }
        }
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}

/// Check every mkvtoolnix program, honoring configured locations.
pub fn check_tools(overrides: &ToolOverrides) -> Vec<ToolInfo> {
    REQUIRED_TOOLS
        .iter()
        .map(|name| match overrides.get(name) {
            Some(path) if path.exists() => check_tool_at(name, path),
            _ => check_tool(name),
        })
        .collect()
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Configured {} path {:?} does not exist, searching PATH",
            name,
            path
        );
    }

    require_tool(name)
}

/// Explicit tool locations, typically from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOverrides {
    pub mkvmerge: Option<PathBuf>,
    pub mkvextract: Option<PathBuf>,
    pub mkvpropedit: Option<PathBuf>,
}

impl ToolOverrides {
    fn get(&self, name: &str) -> Option<&Path> {
        match name {
            MKVMERGE => self.mkvmerge.as_deref(),
            MKVEXTRACT => self.mkvextract.as_deref(),
            MKVPROPEDIT => self.mkvpropedit.as_deref(),
            _ => None,
        }
    }
}

/// Resolved locations of the three mkvtoolnix programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolset {
    pub mkvmerge: PathBuf,
    pub mkvextract: PathBuf,
    pub mkvpropedit: PathBuf,
}

impl Toolset {
    /// Build a toolset from known paths without any lookup.
    pub fn new(
        mkvmerge: impl Into<PathBuf>,
        mkvextract: impl Into<PathBuf>,
        mkvpropedit: impl Into<PathBuf>,
    ) -> Self {
        Self {
            mkvmerge: mkvmerge.into(),
            mkvextract: mkvextract.into(),
            mkvpropedit: mkvpropedit.into(),
        }
    }

    /// Locate every program, reporting all missing ones at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTools`] naming each program that could not be
    /// found.
    pub fn resolve(overrides: &ToolOverrides) -> Result<Self> {
        let mut missing = Vec::new();
        let mut locate = |name: &str| {
            get_tool_path(name, overrides.get(name))
                .map_err(|_| missing.push(name.to_string()))
                .ok()
        };
        let mkvmerge = locate(MKVMERGE);
        let mkvextract = locate(MKVEXTRACT);
        let mkvpropedit = locate(MKVPROPEDIT);

        match (mkvmerge, mkvextract, mkvpropedit) {
            (Some(mkvmerge), Some(mkvextract), Some(mkvpropedit)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "Resolved mkvtoolnix: {:?}, {:?}, {:?}",
                    mkvmerge,
                    mkvextract,
                    mkvpropedit
                );
                Ok(Self::new(mkvmerge, mkvextract, mkvpropedit))
            }
            _ => Err(Error::MissingTools { tools: missing }),
        }
    }
}
