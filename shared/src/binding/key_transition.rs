use crate::{
    command::command_state::CommandState, function::function::Function, types::PointerPosition,
};

/// An Up/Down transition of a bound key function produced by the
/// [`KeyBindingTable`](crate::KeyBindingTable)
#[derive(Clone, Debug, PartialEq)]
pub struct KeyTransition {
    pub function: Function,
    pub state: CommandState,
    pub pointer: PointerPosition,
    pub can_focus: bool,
    /// Produced by an OS key repeat rather than a fresh press
    pub repeat: bool,
}
