use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "RSHEETLOG_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_headers")]
    pub headers: Vec<String>,
    /// Columns that only accept numbers from the CLI.
    #[serde(default)]
    pub numeric_columns: Vec<String>,
    /// user name → Argon2 PHC hash; empty disables the auth gate.
    #[serde(default)]
    pub users: BTreeMap<String, String>,
}

fn default_headers() -> Vec<String> {
    vec!["A".to_string(), "B".to_string(), "Timestamp".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            headers: default_headers(),
            numeric_columns: Vec::new(),
            users: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rsheetlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rsheetlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        match env::var(CONFIG_ENV) {
            Ok(p) if !p.trim().is_empty() => expand_tilde(&p),
            _ => Self::config_dir().join("rsheetlog.conf"),
        }
    }

    /// Return the full path of the default container
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rsheetlog.sqlite")
    }

    /// Container path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Numeric columns must be part of the headers.
    pub fn check(&self) -> AppResult<()> {
        crate::models::table::validate_headers(&self.headers)?;
        if let Some(bad) = self
            .numeric_columns
            .iter()
            .find(|c| !self.headers.contains(c))
        {
            return Err(AppError::Config(format!(
                "numeric column '{bad}' is not one of the headers"
            )));
        }
        Ok(())
    }

    /// Write the configuration file (creating its directory).
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Resolve a `--db` value: absolute paths (after `~` expansion) are kept,
    /// bare names and relative paths live in the config directory.
    pub fn resolve_database(name: &str) -> String {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
        .to_string_lossy()
        .to_string()
    }

    /// Initialize the configuration file for `init`.
    ///
    /// `self` already carries the resolved `--db` override. In test mode
    /// nothing is written.
    pub fn init_all(&self, is_test: bool) -> AppResult<Config> {
        let cfg = self.clone();

        if !is_test {
            let path = Self::config_file();
            cfg.save_to(&path)?;
            println!("✅ Config file: {:?}", path);
        }

        Ok(cfg)
    }
}
