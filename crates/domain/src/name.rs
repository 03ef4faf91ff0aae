use derive_more::{AsRef, Display};

const MAX_LEN: usize = 64;

#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        validate(name).map(|n| Name(n.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Used for entries of the built-in catalog, which are checked by its tests.
    pub(crate) fn from_static(name: &'static str) -> Self {
        Name(name.to_string())
    }
}

/// Equipment is matched by name, so gear names are normalized to lower case.
#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gear(String);

impl Gear {
    pub const NONE: &'static str = "none";

    pub fn new(name: &str) -> Result<Self, NameError> {
        validate(name).map(|n| Gear(n.to_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn none() -> Self {
        Gear(Self::NONE.to_string())
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == Self::NONE
    }

    pub(crate) fn from_static(name: &'static str) -> Self {
        Gear(name.to_lowercase())
    }
}

fn validate(name: &str) -> Result<&str, NameError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }

    let len = trimmed.chars().count();

    if len > MAX_LEN {
        return Err(NameError::TooLong(len));
    }

    Ok(trimmed)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
