use crate::core::summary::Lang;
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use crate::source::SourceFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the attendance table lives inside an HTML page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlConfig {
    #[serde(default = "default_table_id")]
    pub table_id: String,
    #[serde(default = "default_date_class")]
    pub date_class: String,
    #[serde(default = "default_work_class")]
    pub work_class: String,
}

fn default_table_id() -> String {
    "editGraphTable".to_string()
}
fn default_date_class() -> String {
    "date".to_string()
}
fn default_work_class() -> String {
    "view_work".to_string()
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            table_id: default_table_id(),
            date_class: default_date_class(),
            work_class: default_work_class(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Lang,
    #[serde(default)]
    pub default_format: SourceFormat,
    #[serde(default)]
    pub html: HtmlConfig,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Lang::default(),
            default_format: SourceFormat::default(),
            html: HtmlConfig::default(),
            separator_char: default_separator_char(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworkhours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkhours.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        for (key, value) in [
            ("html.table_id", &self.html.table_id),
            ("html.date_class", &self.html.date_class),
            ("html.work_class", &self.html.work_class),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Write the default configuration to `path`, creating its directory.
    pub fn init(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
