use thiserror::Error;

use crate::types::FunctionNetId;

/// Reasons an incoming command payload is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandDecodeError {
    /// Payload could not be read as a command frame
    #[error("Malformed input command payload of {length} bytes")]
    Malformed { length: usize },

    /// Function network id is not in the function registry
    #[error("Input command refers to unknown function network id {net_id}")]
    UnknownFunction { net_id: FunctionNetId },

    /// State byte is neither Up nor Down
    #[error("Input command carries invalid state value {value}")]
    InvalidState { value: u8 },
}

/// Reasons an outgoing command cannot be written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandEncodeError {
    #[error("Function {name:?} has no network id. It must be declared in the Protocol shared by Client and Server")]
    UnknownFunction { name: String },
}
