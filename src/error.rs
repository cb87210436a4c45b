use std::fmt;

use thiserror::Error;

/// Errors that make a recipe unloadable
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The record is not shaped like a recipe (missing field, wrong type)
    #[error("Invalid recipe record: {0}")]
    InvalidRecord(#[from] serde_yaml::Error),

    /// `category` was given as an empty list
    #[error("Recipe must have at least one category")]
    EmptyCategories,

    /// A `)` marker appeared before any ingredient of the current group
    #[error("Mise group closed before any ingredient in group '{group}'")]
    UnmatchedMiseClose { group: String },

    /// Two records in one batch map to the same id
    #[error("Duplicate recipe id '{0}'")]
    DuplicateId(String),

    /// The name has nothing a file id can be made from
    #[error("Cannot derive a recipe id from '{0}'")]
    InvalidName(String),

    /// Refusing to overwrite an existing recipe file
    #[error("Recipe '{0}' already exists")]
    AlreadyExists(String),

    /// Reading or writing recipe files failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file or environment could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A recipe template could not be written out as YAML
    #[error("Could not write recipe template: {0}")]
    Template(String),
}

/// A recipe that was excluded from a batch, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    /// File path or record id the error belongs to
    pub origin: String,
    pub message: String,
}

impl LoadError {
    pub fn new(origin: impl Into<String>, err: &RecipeError) -> Self {
        Self {
            origin: origin.into(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.origin, self.message)
    }
}
