use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// How the config in use was obtained
#[derive(Debug)]
pub enum ConfigOrigin {
    /// Read from the config file
    File,
    /// No config file yet; defaults should be written to this path
    FirstRun(PathBuf),
    /// The config file exists but could not be read; it is left untouched
    Invalid(anyhow::Error),
    /// No home directory, so no config file
    NoHome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset file replacing the built-in schedule (.json, .yaml, .yml, .csv)
    #[serde(default)]
    pub dataset_path: Option<String>,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Default log filter, overridden by DEPT_SCHEDULE_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Event poll timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_show_splash")]
    pub show_splash: bool,
}

fn default_title() -> String {
    "Faculty of Medical Technology".to_string()
}

fn default_subtitle() -> String {
    "DERNA".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_show_splash() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            title: default_title(),
            subtitle: default_subtitle(),
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate_ms(),
            show_splash: default_show_splash(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".dept-schedule"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Read the config file in the config directory
    pub fn load() -> (Config, ConfigOrigin) {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => (Config::default(), ConfigOrigin::NoHome),
        }
    }

    /// Read a config file, `Ok(None)` if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(Some(config))
    }

    /// Read a config file, falling back to defaults when it is missing or broken
    pub fn load_or_default(path: &Path) -> (Config, ConfigOrigin) {
        match Self::load_from(path) {
            Ok(Some(config)) => (config, ConfigOrigin::File),
            Ok(None) => (Config::default(), ConfigOrigin::FirstRun(path.to_path_buf())),
            Err(e) => (Config::default(), ConfigOrigin::Invalid(e)),
        }
    }

    /// Write this config as the default file on a first run.
    /// Returns whether a file was written; an existing file is never replaced.
    pub fn write_if_first_run(&self, origin: &ConfigOrigin) -> anyhow::Result<bool> {
        match origin {
            ConfigOrigin::FirstRun(path) => {
                self.save_to(path)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Save the config to disk
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create config directory if it doesn't exist
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Configured dataset file, if any
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"dataset_path": "/srv/schedule.csv"}"#).unwrap();

        assert_eq!(config.dataset_path(), Some(PathBuf::from("/srv/schedule.csv")));
        assert_eq!(config.title, "Faculty of Medical Technology");
        assert_eq!(config.subtitle, "DERNA");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tick_rate_ms, 100);
        assert!(config.show_splash);
    }

    #[test]
    fn test_blank_dataset_path_is_ignored() {
        let config = Config {
            dataset_path: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(config.dataset_path(), None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            title: "Faculty of Science".to_string(),
            show_splash: false,
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Some(config));
    }

    #[test]
    fn test_load_from_missing_and_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(Config::load_from(&path).is_err());
        assert_eq!(Config::load_from(&dir.path().join("absent.json")).unwrap(), None);
    }

    #[test]
    fn test_missing_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let (config, origin) = Config::load_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(matches!(origin, ConfigOrigin::FirstRun(ref p) if p == &path));

        assert!(config.write_if_first_run(&origin).unwrap());
        assert_eq!(Config::load_from(&path).unwrap(), Some(Config::default()));
    }

    #[test]
    fn test_malformed_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let contents = r#"{"dataset_path": "/srv/my.csv", "title": "X",}"#;
        fs::write(&path, contents).unwrap();

        let (config, origin) = Config::load_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(matches!(origin, ConfigOrigin::Invalid(_)));

        assert!(!config.write_if_first_run(&origin).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn test_valid_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"title": "Faculty of Science"}"#).unwrap();

        let (config, origin) = Config::load_or_default(&path);
        assert_eq!(config.title, "Faculty of Science");
        assert!(matches!(origin, ConfigOrigin::File));
    }
}
