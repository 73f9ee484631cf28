use thiserror::Error;

use crate::types::FunctionNetId;

/// Errors that can occur when resolving functions through the network id map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionKindsError {
    /// Network ID not found in registry
    #[error("Network ID {net_id} not found in function registry. Client and Server must declare the same functions in the same order")]
    NetIdNotFound { net_id: FunctionNetId },

    /// Function not found in registry
    #[error("Function {name:?} not found in function registry. Functions must be declared with Protocol::add_function()")]
    FunctionNotFound { name: String },
}
