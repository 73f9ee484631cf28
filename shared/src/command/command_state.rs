use std::collections::HashMap;

use crate::{command::error::CommandStateError, function::function::Function, types::Sequence};

/// Up/down state of a bound key function
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CommandState {
    #[default]
    Up = 0,
    Down = 1,
}

impl CommandState {
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn is_down(self) -> bool {
        self == CommandState::Down
    }
}

impl TryFrom<u8> for CommandState {
    type Error = CommandStateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CommandState::Up),
            1 => Ok(CommandState::Down),
            _ => Err(CommandStateError::InvalidValue { value }),
        }
    }
}

/// Last known state of every function for one session, along with the
/// highest input sequence number processed for it
#[derive(Default)]
pub struct SessionCommandState {
    states: HashMap<Function, CommandState>,
    last_sequence: Sequence,
}

impl SessionCommandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to [`CommandState::Up`] for functions never seen
    pub fn state(&self, function: &Function) -> CommandState {
        self.states.get(function).copied().unwrap_or_default()
    }

    /// Stores the new state and returns the previous one
    pub fn set_state(&mut self, function: &Function, state: CommandState) -> CommandState {
        self.states
            .insert(function.clone(), state)
            .unwrap_or_default()
    }

    pub fn last_processed_sequence(&self) -> Sequence {
        self.last_sequence
    }

    /// Moves the sequence forward. Returns false, changing nothing, unless
    /// `sequence` is strictly greater than the last processed one.
    pub fn advance_sequence(&mut self, sequence: Sequence) -> bool {
        if sequence <= self.last_sequence {
            return false;
        }
        self.last_sequence = sequence;
        true
    }

    pub fn down_functions(&self) -> impl Iterator<Item = &Function> {
        self.states
            .iter()
            .filter(|(_, state)| state.is_down())
            .map(|(function, _)| function)
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}
