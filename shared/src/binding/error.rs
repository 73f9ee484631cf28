use thiserror::Error;

use crate::key::key_combo::KeyCombo;

/// Errors that can occur when adding bindings to a
/// [`KeyBindingTable`](crate::KeyBindingTable)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// The same function is already bound to the same combo
    #[error("Function {function:?} is already bound to {combo}")]
    Duplicate { function: String, combo: KeyCombo },
}
