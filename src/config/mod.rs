use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;

const APP_DIR: &str = "select_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Base-directory override, mainly for tests and scripted runs.
const CONFIG_DIR_ENV: &str = "SELECT_CORE_CONFIG_DIR";

/// Persisted output preferences for the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub plain_mode: bool,
    #[serde(default)]
    pub quiet_mode: bool,
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager rooted at `SELECT_CORE_CONFIG_DIR` when set, otherwise the
    /// platform configuration directory, otherwise the working directory.
    pub fn new() -> Self {
        let base = env::var_os(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::from_base(base)
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Self {
        Self {
            path: base.join(APP_DIR).join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored config, or defaults when none has been saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves through a temporary file and rename, so an interrupted write
    /// never leaves a truncated config behind.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".");
    os.push(TMP_SUFFIX);
    PathBuf::from(os)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_defaults_when_missing() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        assert_eq!(manager.load().expect("load"), Config::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        let config = Config {
            plain_mode: true,
            quiet_mode: false,
        };

        manager.save(&config).expect("save");

        assert!(manager.path().exists());
        assert!(!tmp_path(manager.path()).exists());
        assert_eq!(manager.load().expect("load"), config);
    }

    #[test]
    fn unknown_fields_default_instead_of_failing() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        fs::create_dir_all(manager.path().parent().expect("parent")).expect("mkdir");
        fs::write(manager.path(), "{\"plain_mode\": true}").expect("write");

        let config = manager.load().expect("load");
        assert!(config.plain_mode);
        assert!(!config.quiet_mode);
    }
}
