use thiserror::Error;

use crate::key::error::KeyComboError;

/// Errors that make a whole keybind file unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindFileError {
    /// The file exists but could not be read
    #[error("Cannot read keybind file {path}: {message}")]
    Io { path: String, message: String },

    /// The file is not valid JSON
    #[error("Keybind file is not valid JSON: {message}")]
    Parse { message: String },

    /// The top-level JSON value is not an array of records
    #[error("Keybind file must contain a JSON array of keybind records")]
    NotAnArray,
}

/// Reasons a single keybind record is skipped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeybindRecordError {
    #[error("Keybind record {index} is malformed: {message}")]
    Malformed { index: usize, message: String },

    #[error("Keybind record {index} refers to undeclared function {function:?}")]
    UnknownFunction { index: usize, function: String },

    #[error("Keybind record {index} uses unknown key {key:?}")]
    UnknownKey { index: usize, key: String },

    #[error("Keybind record {index} has an invalid key combo: {source}")]
    InvalidCombo {
        index: usize,
        #[source]
        source: KeyComboError,
    },
}
