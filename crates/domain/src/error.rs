use crate::{Focus, Mode};

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Outcome of a single exercise draw. Only ever handled inside the mission builder.
#[derive(thiserror::Error, Debug)]
pub enum SelectError {
    #[error("no candidate for focus {}", .0.tag())]
    NoCandidateForFocus(Focus),
    #[error(transparent)]
    Read(#[from] ReadError),
}

#[derive(thiserror::Error, Debug)]
pub enum MissionError {
    #[error("unable to build a mission with the given gear ({} requested)", .requested.tag())]
    Unbuildable { requested: Mode },
    #[error(transparent)]
    Read(#[from] ReadError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid format \"{0}\" (expected \"plain\" or \"markup\")")]
    InvalidFormat(String),
}
