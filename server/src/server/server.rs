use log::{debug, warn};

use hotwire_shared::{
    CheckedMap, CommandBindRegistry, CommandContext, CommandState, Function, FunctionKinds,
    FunctionRegistry, HandlerRef, HostType, InputCommand, Protocol, Sequence,
    SessionCommandState, SessionKey, UnbindHandle,
};

use super::ServerConfig;
use crate::{
    events::CommandReceipt,
    session::{SessionChange, SessionRegistry},
};

/// Applies input commands received from Clients to per-session state and
/// dispatches them to server handlers.
///
/// A Server lives on the single simulation thread. Sessions are connected and
/// disconnected through its [`SessionRegistry`] handle, which may be cloned
/// onto other threads.
pub struct Server {
    config: ServerConfig,
    // Protocol
    functions: FunctionRegistry,
    function_kinds: FunctionKinds,
    // Sessions
    sessions: SessionRegistry,
    states: CheckedMap<SessionKey, SessionCommandState>,
    // Handlers
    registry: CommandBindRegistry,
}

impl Server {
    /// Create a new Server
    pub fn new<P: Into<Protocol>>(config: ServerConfig, protocol: P) -> Self {
        let protocol: Protocol = protocol.into();
        let function_kinds = protocol.function_kinds();
        let functions = protocol.functions;

        Self {
            config,
            functions,
            function_kinds,
            sessions: SessionRegistry::new(),
            states: CheckedMap::new(),
            registry: CommandBindRegistry::new(HostType::Server),
        }
    }

    // Protocol

    pub fn function(&self, name: &str) -> Option<Function> {
        self.functions.get(name)
    }

    pub fn function_kinds(&self) -> &FunctionKinds {
        &self.function_kinds
    }

    // Sessions

    /// Handle to the session registry, for connect/disconnect callbacks
    pub fn sessions(&self) -> SessionRegistry {
        self.sessions.clone()
    }

    /// Creates and destroys per-session state for every session connected or
    /// disconnected since the last sync
    pub fn sync_sessions(&mut self) {
        for change in self.sessions.drain_changes() {
            match change {
                SessionChange::Connected(key) => {
                    self.states.insert(key, SessionCommandState::new());
                }
                SessionChange::Disconnected(key) => {
                    self.states.remove(&key);
                }
            }
        }
    }

    // Incoming

    /// Decodes and applies a command payload sent by `session`. Malformed
    /// payloads, unknown sessions and stale sequence numbers are dropped.
    pub fn receive_command(&mut self, session: SessionKey, payload: &[u8]) -> Option<CommandReceipt> {
        let command = match InputCommand::decode(payload, &self.function_kinds) {
            Ok(command) => command,
            Err(err) => {
                if self.config.log_dropped_commands {
                    debug!("dropping command from session {}: {}", session.to_u64(), err);
                }
                return None;
            }
        };
        self.apply_command(session, command)
    }

    /// Applies an already decoded command for `session`
    pub fn apply_command(
        &mut self,
        session: SessionKey,
        command: InputCommand,
    ) -> Option<CommandReceipt> {
        self.sync_sessions();

        let Some(state) = self.states.get_mut(&session) else {
            if self.sessions.is_settled(&session) {
                panic!(
                    "session {} is connected but has no command state",
                    session.to_u64()
                );
            }
            if self.config.log_dropped_commands {
                debug!(
                    "dropping {} from unknown session {}",
                    command.function,
                    session.to_u64()
                );
            }
            return None;
        };

        if !state.advance_sequence(command.sequence) {
            if self.config.log_dropped_commands {
                debug!(
                    "dropping stale command #{} from session {} (last processed #{})",
                    command.sequence,
                    session.to_u64(),
                    state.last_processed_sequence()
                );
            }
            return None;
        }
        let previous = state.set_state(&command.function, command.state);

        let context = CommandContext {
            host: HostType::Server,
            function: &command.function,
            session: Some(session),
            pointer: command.pointer,
            target: command.target,
            predicting: false,
        };
        let consumed = self.registry.dispatch_message(&context, &command)
            || self.registry.dispatch_transition(&context, command.state);

        let mut receipt = CommandReceipt {
            session,
            command,
            previous,
            consumed,
            echo: None,
        };
        if self.config.echo_applied_commands {
            receipt.echo = self.echo(&receipt);
        }
        Some(receipt)
    }

    /// Re-encodes an applied command so it can be sent back to the Client
    /// that issued it
    pub fn echo(&self, receipt: &CommandReceipt) -> Option<Vec<u8>> {
        match receipt.command.encode(&self.function_kinds) {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!("cannot echo command: {}", err);
                None
            }
        }
    }

    // State

    /// State of `function` for `session`. Unknown sessions read as all Up.
    pub fn query_state(&self, session: &SessionKey, function: &Function) -> CommandState {
        self.states
            .get(session)
            .map(|state| state.state(function))
            .unwrap_or_default()
    }

    pub fn last_processed_sequence(&self, session: &SessionKey) -> Option<Sequence> {
        self.states
            .get(session)
            .map(|state| state.last_processed_sequence())
    }

    /// Functions currently Down for `session`
    pub fn down_functions(&self, session: &SessionKey) -> Vec<Function> {
        self.states
            .get(session)
            .map(|state| state.down_functions().cloned().collect())
            .unwrap_or_default()
    }

    // Handlers

    pub fn new_unbind_handle(&mut self) -> UnbindHandle {
        self.registry.new_unbind_handle()
    }

    pub fn bind_function(&mut self, function: &Function, handler: HandlerRef) -> bool {
        self.registry.bind(function, handler)
    }

    pub fn bind_function_with_handle(
        &mut self,
        handle: UnbindHandle,
        function: &Function,
        handler: HandlerRef,
    ) -> bool {
        self.registry.bind_with_handle(handle, function, handler)
    }

    pub fn unbind_function(&mut self, function: &Function) -> usize {
        self.registry.unbind(function)
    }

    pub fn unbind_handle(&mut self, handle: UnbindHandle) -> usize {
        self.registry.unbind_handle(handle)
    }
}
