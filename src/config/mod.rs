mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Locations searched, in order, when no config file is given.
pub const DEFAULT_CONFIG_PATHS: [&str; 3] = [
    "./mkvtool.toml",
    "~/.config/mkvtool/config.toml",
    "/etc/mkvtool/config.toml",
];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    tracing::debug!("Loaded config from {:?}", path);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    for path_str in DEFAULT_CONFIG_PATHS {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    mkvtool_core::tokenize(&config.format.print)
        .with_context(|| format!("Invalid print mask: {:?}", config.format.print))?;
    mkvtool_core::tokenize(&config.format.rename)
        .with_context(|| format!("Invalid rename mask: {:?}", config.format.rename))?;

    // Missing tool paths fall back to PATH lookup
    for path in config.tools.configured_paths() {
        if !path.exists() {
            tracing::warn!("Configured tool path does not exist: {:?}", path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.format.print, "%{title}.mkv");
        assert_eq!(config.format.rename, "%{title}.%{container}");
        assert!(config.subtitles.languages.is_empty());
        assert_eq!(config.tools.overrides(), mkvtool_av::ToolOverrides::default());
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let config: Config = toml::from_str(
            r#"
            [format]
            print = "%{title} (%{year})"

            [subtitles]
            languages = ["eng", "default"]
            "#,
        )
        .unwrap();

        assert_eq!(config.format.print, "%{title} (%{year})");
        assert_eq!(config.format.rename, "%{title}.%{container}");
        assert_eq!(config.subtitles.languages, vec!["eng", "default"]);
        assert!(config.subtitles.ignore.is_empty());
    }

    #[test]
    fn test_tool_overrides() {
        let config: Config = toml::from_str(
            r#"
            [tools]
            mkvmerge_path = "/opt/mkvtoolnix/mkvmerge"
            "#,
        )
        .unwrap();

        let overrides = config.tools.overrides();
        assert_eq!(
            overrides.mkvmerge,
            Some(PathBuf::from("/opt/mkvtoolnix/mkvmerge"))
        );
        assert_eq!(overrides.mkvextract, None);
        assert_eq!(config.tools.configured_paths().count(), 1);
    }

    #[test]
    fn test_validate_rejects_malformed_mask() {
        let mut config = Config::default();
        config.format.rename = "%{title}.%2000000{container}".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("malformed mask"));
    }

    #[test]
    fn test_missing_tool_path_is_not_fatal() {
        let mut config = Config::default();
        config.tools.mkvpropedit_path = Some(PathBuf::from("/nonexistent/mkvpropedit"));

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mkvtool.toml");
        std::fs::write(&path, "[subtitles]\nignore = [\"forced\"]\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.subtitles.ignore, vec!["forced"]);
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let err = load_config_or_default(Some(Path::new("/nonexistent/mkvtool.toml")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[format\nprint = 1").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
