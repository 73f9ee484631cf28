use thiserror::Error;

/// Errors that can occur while building or switching input contexts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A context with that name is already registered
    #[error("Context {name:?} already exists. Context names must be unique")]
    AlreadyExists { name: String },

    /// The requested parent is not registered
    #[error("Parent context {parent:?} of {name:?} does not exist. Create the parent context first")]
    ParentNotFound { name: String, parent: String },

    /// The requested context is not registered
    #[error("Context {name:?} does not exist")]
    NotFound { name: String },

    /// The root context is permanent
    #[error("The root context {name:?} cannot be removed")]
    CannotRemoveRoot { name: String },

    /// Removing the context would orphan its children
    #[error("Context {name:?} still has child contexts. Remove them first")]
    HasChildren { name: String },

    /// The active context cannot be removed
    #[error("Context {name:?} is active. Switch to another context before removing it")]
    ContextActive { name: String },
}
