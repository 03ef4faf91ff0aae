use std::{
    env, fs,
    path::{Path, PathBuf},
};

use log::LevelFilter;
use serde::{Deserialize, de::Error as _};

use crate::logger::LevelFilterDef;

pub const CONFIG_ENV: &str = "MISSION_CONFIG";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub gear: Vec<String>,
    pub format: String,
    pub dataset: Option<PathBuf>,
    #[serde(with = "LevelFilterDef")]
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gear: vec![],
            format: "plain".to_string(),
            dataset: None,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Settings {
    /// Reads the given settings file, or the one named by `MISSION_CONFIG`. Without either the
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::read(path),
            None => match env::var_os(CONFIG_ENV) {
                Some(path) => Self::read(Path::new(&path)),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn read(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The settings file must hold a JSON object. Missing keys take their default value.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let value = serde_json::from_str::<serde_json::Value>(text)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("settings must be a JSON object"));
        }
        Self::deserialize(value)
    }
}
