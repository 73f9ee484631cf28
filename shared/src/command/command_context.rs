use crate::{
    function::function::Function,
    types::{HostType, PointerPosition, SessionKey},
};

/// Everything a [`CommandHandler`](crate::CommandHandler) learns about the
/// command it is handling
#[derive(Clone, Debug)]
pub struct CommandContext<'a> {
    pub host: HostType,
    pub function: &'a Function,
    /// The originating session, on the Server
    pub session: Option<SessionKey>,
    pub pointer: PointerPosition,
    pub target: Option<u64>,
    /// Set while the Client replays a command for prediction; handlers must
    /// not forward anything to the Server while it is set
    pub predicting: bool,
}
