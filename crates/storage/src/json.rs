use std::{fs, path::Path};

use log::debug;
use mission_domain::{Exercise, Focus, FocusError, Gear, Name, NameError};
use serde::Deserialize;

use crate::memory::Catalog;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid exercise at index {index}: {reason}")]
    Invalid { index: usize, reason: Invalid },
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Invalid {
    #[error("name: {0}")]
    Name(#[from] NameError),
    #[error(transparent)]
    Focus(#[from] FocusError),
    #[error("gear: {0}")]
    Gear(NameError),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub name: String,
    pub focus: String,
    #[serde(default)]
    pub gear: Vec<String>,
}

impl TryFrom<ExerciseRecord> for Exercise {
    type Error = Invalid;

    fn try_from(value: ExerciseRecord) -> Result<Self, Self::Error> {
        Ok(Exercise {
            name: Name::new(&value.name)?,
            focus: Focus::parse(&value.focus)?,
            gear: value
                .gear
                .iter()
                .map(|g| Gear::new(g))
                .collect::<Result<_, _>>()
                .map_err(Invalid::Gear)?,
        })
    }
}

pub fn load(path: &Path) -> Result<Catalog, Error> {
    let text = fs::read_to_string(path)?;
    let catalog = from_str(&text)?;
    debug!(
        "loaded {} exercises from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

pub fn from_str(text: &str) -> Result<Catalog, Error> {
    let records: Vec<ExerciseRecord> = serde_json::from_str(text)?;
    let exercises = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Exercise::try_from(record).map_err(|reason| Error::Invalid { index, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Catalog::new(exercises))
}
