//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Data directory used when nothing else is configured, relative to the
/// working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Name of the per-directory config file
pub const PROJECT_CONFIG_FILE: &str = "aerocode.yaml";

/// Aerocode configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the collection files and reports
    pub data_dir: Option<PathBuf>,

    /// Log filter directive, e.g. `aerocode=debug`
    pub log: Option<String>,

    /// Problems met while loading, logged once logging is up
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    ///
    /// CLI flags and `AEROCODE_DATA_DIR` are applied on top of this by the
    /// binary.
    pub fn load() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_with(Self::global_config_path().as_deref(), &cwd)
    }

    /// Merge the global config file (if any) with the one in `dir`
    pub fn load_with(global_path: Option<&Path>, dir: &Path) -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/aerocode/config.yaml)
        if let Some(global) = global_path {
            config.merge_file(global);
        }

        // 3. Project config (./aerocode.yaml)
        config.merge_file(&dir.join(PROJECT_CONFIG_FILE));

        config
    }

    fn merge_file(&mut self, path: &Path) {
        match Self::read_file(path) {
            Ok(Some(other)) => self.merge(other),
            Ok(None) => {}
            Err(err) => self.warnings.push(format!(
                "ignoring invalid config file {}: {}",
                path.display(),
                err
            )),
        }
    }

    fn read_file(path: &Path) -> Result<Option<Config>, String> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_yml::from_str::<Config>(&contents)
            .map(Some)
            .map_err(|e| e.to_string())
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "aerocode")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.log.is_some() {
            self.log = other.log;
        }
    }

    /// Get the data directory, falling back to `./data`
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_with(None, dir.path());
        assert_eq!(config.data_dir(), PathBuf::from("data"));
        assert!(config.log.is_none());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.yaml");
        std::fs::write(&global, "data_dir: /srv/aerocode\nlog: aerocode=info\n").unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "data_dir: hangar\n").unwrap();

        let config = Config::load_with(Some(&global), dir.path());
        assert_eq!(config.data_dir(), PathBuf::from("hangar"));
        assert_eq!(config.log.as_deref(), Some("aerocode=info"));
    }

    #[test]
    fn test_invalid_file_is_ignored() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "data_dir: [unclosed").unwrap();
        let config = Config::load_with(None, dir.path());
        assert_eq!(config.data_dir(), PathBuf::from("data"));
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].starts_with("ignoring invalid config file"));
        assert!(config.warnings[0].contains(PROJECT_CONFIG_FILE));
    }

    #[test]
    fn test_invalid_global_keeps_project() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.yaml");
        std::fs::write(&global, "log: [").unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "data_dir: hangar\n").unwrap();

        let config = Config::load_with(Some(&global), dir.path());
        assert_eq!(config.data_dir(), PathBuf::from("hangar"));
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("global.yaml"));
    }
}
