use thiserror::Error;

/// Errors that can occur when reading a command state off the wire
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandStateError {
    #[error("Invalid command state value {value}. Expected 0 (Up) or 1 (Down)")]
    InvalidValue { value: u8 },
}
