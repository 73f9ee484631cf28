use thiserror::Error;

use crate::key::key::Key;

/// Errors that can occur when building a [`KeyCombo`](crate::KeyCombo)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyComboError {
    /// Base key is the "no key" sentinel
    #[error("A key combo needs a base key other than Key::None")]
    MissingBaseKey,

    /// More modifier keys than a combo can hold
    #[error("A key combo holds at most {max} modifier keys, {count} were given")]
    TooManyModifiers { count: usize, max: usize },

    /// The same key appears twice in one combo
    #[error("Key {key:?} appears more than once in the same key combo")]
    DuplicateKey { key: Key },
}

/// Errors that can occur when parsing a key name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("Unknown key name {name:?}")]
    UnknownKey { name: String },
}
