//! Configuration file handling
//!
//! The tool reads an optional TOML file:
//!
//! ```toml
//! [enumerator]
//! max_devices = 8
//!
//! [output]
//! format = "json"
//! ```

use std::{fs, path::Path, path::PathBuf};

use btadapters::EnumeratorConfig;
use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub enumerator: EnumeratorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Load `path`, or the default config file if it exists, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// `$XDG_CONFIG_HOME/btadapters/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("btadapters").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btadapters::hci::constants::HCI_MAX_DEV;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.enumerator.max_devices, HCI_MAX_DEV);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [enumerator]
            max_devices = 4

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.enumerator.max_devices, 4);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        let result = Config::parse("[output]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(CliError::TomlParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[enumerator]\nmax_devices = 2").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.enumerator.max_devices, 2);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(matches!(
            Config::load(Some(&path)),
            Err(CliError::ConfigRead { .. })
        ));
    }
}
