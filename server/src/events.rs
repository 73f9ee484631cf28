use hotwire_shared::{CommandState, InputCommand, SessionKey};

/// Outcome of an input command the Server accepted and applied
#[derive(Clone, Debug, PartialEq)]
pub struct CommandReceipt {
    pub session: SessionKey,
    pub command: InputCommand,
    /// The session's state for the function before this command
    pub previous: CommandState,
    /// Whether a server handler consumed the command
    pub consumed: bool,
    /// Encoded copy of the command, present when echoing is enabled
    pub echo: Option<Vec<u8>>,
}

impl CommandReceipt {
    /// Whether the command actually changed the session's state
    pub fn changed_state(&self) -> bool {
        self.previous != self.command.state
    }
}
