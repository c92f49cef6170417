use std::fs;
use std::path::Path;

use cv_chain_core::config::SourceConfig;
use serde::Deserialize;

use crate::cli::Cli;

/// Top-level driver configuration file.
///
/// ```toml
/// [source]
/// use_file = true
/// file_path = "sample.txt"
/// fallback_text = "The quick brown fox jumps over the lazy dog."
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

impl DriverConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads and parses a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;
        Ok(Self::from_toml(&text).map_err(|e| format!("failed to parse config {}: {e}", path.display()))?)
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        let mut source = self.source;
        if let Some(file) = &cli.file {
            source = source.with_use_file(true).with_file_path(file);
        }
        if cli.inline {
            source = source.with_use_file(false);
        }
        if let Some(text) = &cli.text {
            source = source.with_fallback_text(text.as_str());
        }
        self.source = source;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn empty_file_uses_defaults() {
        let config = DriverConfig::from_toml("").unwrap();
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn partial_source_table() {
        let config = DriverConfig::from_toml("[source]\nuse_file = false\n").unwrap();
        assert!(!config.source.use_file);
        assert_eq!(config.source.file_path, PathBuf::from("sample.txt"));
    }

    #[test]
    fn full_source_table() {
        let toml = r#"
            [source]
            use_file = true
            file_path = "data/corpus.txt"
            fallback_text = "aeiou"
        "#;
        let config = DriverConfig::from_toml(toml).unwrap();
        assert_eq!(config.source.file_path, PathBuf::from("data/corpus.txt"));
        assert_eq!(config.source.fallback_text, "aeiou");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(DriverConfig::from_toml("[source]\nuse_files = true\n").is_err());
        assert!(DriverConfig::from_toml("[sources]\n").is_err());
    }

    #[test]
    fn cli_overrides_file() {
        let cli = Cli::parse_from(["cv-chain", "--inline", "--text", "ab"]);
        let config = DriverConfig::default().with_overrides(&cli);
        assert!(!config.source.use_file);
        assert_eq!(config.source.fallback_text, "ab");

        let cli = Cli::parse_from(["cv-chain", "--file", "other.txt"]);
        let config = DriverConfig::from_toml("[source]\nuse_file = false\n").unwrap().with_overrides(&cli);
        assert!(config.source.use_file);
        assert_eq!(config.source.file_path, PathBuf::from("other.txt"));
    }
}
