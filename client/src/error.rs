use thiserror::Error;

use hotwire_shared::{BindingError, KeybindFileError};

/// Errors that can occur while setting up a Client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotwireClientError {
    #[error("Keybind file error: {0}")]
    KeybindFile(#[from] KeybindFileError),

    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),
}
