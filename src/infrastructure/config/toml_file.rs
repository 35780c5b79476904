//! TOML file config adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigSource;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Config source backed by a user-named TOML file
pub struct TomlFileConfig {
    path: PathBuf,
}

impl TomlFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ConfigSource for TomlFileConfig {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            ConfigError::ReadError(format!("{}: {}", self.path.display(), e))
        })?;

        Self::parse_toml(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn load_reads_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "app_id = \"Builder\"").unwrap();
        writeln!(file, "backend = \"notify-send\"").unwrap();

        let source = TomlFileConfig::new(file.path());
        let config = source.load().await.unwrap();

        assert_eq!(config.app_id, Some("Builder".to_string()));
        assert_eq!(config.backend, Some("notify-send".to_string()));
        assert!(config.title.is_none());
    }

    #[tokio::test]
    async fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = TomlFileConfig::new(dir.path().join("absent.toml"));

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[tokio::test]
    async fn load_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = ").unwrap();

        let source = TomlFileConfig::new(file.path());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn path_is_reported() {
        let source = TomlFileConfig::new("/tmp/toast.toml");
        assert_eq!(source.path(), PathBuf::from("/tmp/toast.toml"));
    }
}
