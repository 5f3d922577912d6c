use crate::core::merge::DEFAULT_ID_OFFSET_SECS;
use crate::errors::{AppError, AppResult};
use crate::models::MergePolicy;
use crate::tcx::WriteOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_policy: MergePolicy,
    #[serde(default = "default_id_offset")]
    pub activity_id_offset_seconds: i64,
    #[serde(default = "default_merge_output")]
    pub merge_output: String,
    #[serde(default = "default_shift_prefix")]
    pub shift_prefix: String,
    #[serde(default = "default_true")]
    pub pretty_print: bool,
    #[serde(default = "default_true")]
    pub normalize_type_attribute: bool,
}

fn default_id_offset() -> i64 {
    DEFAULT_ID_OFFSET_SECS
}
fn default_merge_output() -> String {
    "output.xml".to_string()
}
fn default_shift_prefix() -> String {
    "modified".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_policy: MergePolicy::default(),
            activity_id_offset_seconds: default_id_offset(),
            merge_output: default_merge_output(),
            shift_prefix: default_shift_prefix(),
            pretty_print: default_true(),
            normalize_type_attribute: default_true(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tcxmerge")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tcxmerge.conf")
    }

    /// Load configuration from `path` (or the standard file), or return
    /// defaults if not found
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the default configuration file, returning where it went
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = Config::default().to_yaml()?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            pretty_print: self.pretty_print,
            normalize_type_attribute: self.normalize_type_attribute,
        }
    }
}
