use std::path::Path;

use log::{debug, info, warn};

use hotwire_shared::{
    CommandBindRegistry, CommandContext, CommandState, ContextError, ContextTree, Function,
    FunctionKinds, FunctionRegistry, HandlerRef, HostType, InputCommand, Key, KeyBinding,
    KeyBindingTable, KeyTransition, KeybindFile, PointerPosition, Protocol, Sequence,
    SessionCommandState, UnbindHandle,
};

use crate::{
    client_config::ClientConfig,
    error::HotwireClientError,
    prediction::PredictionFlag,
    transport::CommandSender,
    ui::UiBoundary,
};

/// Turns raw key events into bound key function transitions, predicts their
/// state locally, runs client handlers and forwards whatever those handlers
/// leave unconsumed to the Server.
///
/// Everything here runs synchronously on the thread polling input.
pub struct Client {
    config: ClientConfig,
    // Protocol
    functions: FunctionRegistry,
    function_kinds: FunctionKinds,
    // Input
    table: KeyBindingTable,
    registry: CommandBindRegistry,
    predicted: SessionCommandState,
    target: Option<u64>,
    // Outgoing
    sender: Option<Box<dyn CommandSender>>,
    ui: Option<Box<dyn UiBoundary>>,
    next_sequence: Sequence,
    prediction: PredictionFlag,
}

impl Client {
    /// Create a new Client, loading the configured keybind file if any
    pub fn new<P: Into<Protocol>>(
        config: ClientConfig,
        protocol: P,
    ) -> Result<Self, HotwireClientError> {
        let protocol: Protocol = protocol.into();
        let function_kinds = protocol.function_kinds();
        let functions = protocol.functions;

        let mut client = Self {
            next_sequence: config.first_sequence,
            config,
            functions,
            function_kinds,
            table: KeyBindingTable::new(),
            registry: CommandBindRegistry::new(HostType::Client),
            predicted: SessionCommandState::new(),
            target: None,
            sender: None,
            ui: None,
            prediction: PredictionFlag::new(),
        };

        if let Some(path) = client.config.keybind_path.clone() {
            client.load_keybinds(&path)?;
        }

        Ok(client)
    }

    /// Sets the channel used to forward commands to the Server
    pub fn connect<S: CommandSender + 'static>(&mut self, sender: S) {
        self.sender = Some(Box::new(sender));
    }

    pub fn disconnect(&mut self) {
        self.sender = None;
    }

    pub fn is_connected(&self) -> bool {
        self.sender.is_some()
    }

    pub fn set_ui<U: UiBoundary + 'static>(&mut self, ui: U) {
        self.ui = Some(Box::new(ui));
    }

    /// Entity the pointer is targeting, attached to forwarded commands
    pub fn set_target(&mut self, target: Option<u64>) {
        self.target = target;
    }

    // Protocol

    pub fn function(&self, name: &str) -> Option<Function> {
        self.functions.get(name)
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    pub fn function_kinds(&self) -> &FunctionKinds {
        &self.function_kinds
    }

    // Bindings

    pub fn add_binding(&mut self, binding: KeyBinding) -> Result<(), HotwireClientError> {
        self.table.add_binding(binding)?;
        Ok(())
    }

    /// Loads a keybind file, adding every usable record. Returns how many
    /// bindings were added.
    pub fn load_keybinds(&mut self, path: &Path) -> Result<usize, HotwireClientError> {
        let file = KeybindFile::load(path, &self.functions)?;
        let mut added = 0;
        for binding in file.bindings {
            match self.table.add_binding(binding) {
                Ok(()) => added += 1,
                Err(err) => warn!("skipping keybind from {}: {}", path.display(), err),
            }
        }
        info!("{} keybinds active from {}", added, path.display());
        Ok(added)
    }

    pub fn remove_bindings(&mut self, function: &Function) {
        let transitions = self.table.remove_bindings(function);
        self.process_transitions(transitions);
    }

    pub fn bindings(&self) -> &KeyBindingTable {
        &self.table
    }

    // Contexts

    pub fn contexts(&self) -> &ContextTree {
        self.table.contexts()
    }

    pub fn contexts_mut(&mut self) -> &mut ContextTree {
        self.table.contexts_mut()
    }

    pub fn active_context(&self) -> &str {
        self.table.active_context()
    }

    /// Switches the active context. Functions the new context no longer allows
    /// are released (and their Up transitions dispatched) before this returns.
    pub fn set_active_context(&mut self, name: &str) -> Result<(), ContextError> {
        let transitions = self.table.set_active_context(name)?;
        self.process_transitions(transitions);
        Ok(())
    }

    // Input

    pub fn key_down(&mut self, key: Key, pointer: PointerPosition) {
        let transitions = self.table.key_down(key, pointer);
        self.process_transitions(transitions);
    }

    pub fn key_up(&mut self, key: Key, pointer: PointerPosition) {
        let transitions = self.table.key_up(key, pointer);
        self.process_transitions(transitions);
    }

    /// Releases everything, for when the window loses focus
    pub fn release_all(&mut self) {
        let transitions = self.table.release_all();
        self.process_transitions(transitions);
    }

    fn process_transitions(&mut self, transitions: Vec<KeyTransition>) {
        for transition in transitions {
            self.process_transition(transition);
        }
    }

    fn process_transition(&mut self, transition: KeyTransition) {
        self.predicted
            .set_state(&transition.function, transition.state);

        if let Some(ui) = self.ui.as_mut() {
            ui.state_changed(&transition);
            if transition.can_focus && ui.offer(&transition) {
                debug!(
                    "{} {:?} consumed by the UI",
                    transition.function, transition.state
                );
                return;
            }
        }

        let context = CommandContext {
            host: HostType::Client,
            function: &transition.function,
            session: None,
            pointer: transition.pointer,
            target: self.target,
            predicting: self.prediction.is_predicting(),
        };
        if self.registry.dispatch_transition(&context, transition.state) {
            return;
        }

        self.forward(&transition);
    }

    fn forward(&mut self, transition: &KeyTransition) {
        if !self.config.forward_unhandled || self.prediction.is_predicting() {
            return;
        }
        let Some(sender) = self.sender.as_mut() else {
            return;
        };

        let sequence = self.next_sequence;
        let command = InputCommand::new(transition.function.clone(), transition.state, sequence)
            .with_pointer(transition.pointer)
            .with_target(self.target);

        let payload = match command.encode(&self.function_kinds) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("cannot forward command: {}", err);
                return;
            }
        };

        self.next_sequence = self.next_sequence.saturating_add(1);
        if sender.send(&payload).is_err() {
            warn!(
                "Client Error: cannot send command {} #{} to the Server",
                command.function, sequence
            );
        }
    }

    /// Sequence number the next forwarded command will carry
    pub fn next_sequence(&self) -> Sequence {
        self.next_sequence
    }

    // Prediction

    pub fn prediction_flag(&self) -> PredictionFlag {
        self.prediction.clone()
    }

    pub fn is_predicting(&self) -> bool {
        self.prediction.is_predicting()
    }

    /// Replays `command` against the client handlers only. Nothing is sent
    /// to the Server, and the predicting flag is set for the duration of the
    /// call. Returns whether a handler consumed it.
    pub fn predict(&mut self, command: &InputCommand) -> bool {
        let _guard = self.prediction.enter();

        let context = CommandContext {
            host: HostType::Client,
            function: &command.function,
            session: None,
            pointer: command.pointer,
            target: command.target,
            predicting: true,
        };
        self.registry.dispatch_message(&context, command)
            || self.registry.dispatch_transition(&context, command.state)
    }

    /// Decodes a command echoed by the Server and predicts it. Malformed or
    /// stale echoes are dropped.
    pub fn receive_echo(&mut self, payload: &[u8]) -> bool {
        let command = match InputCommand::decode(payload, &self.function_kinds) {
            Ok(command) => command,
            Err(err) => {
                debug!("dropping echoed command: {}", err);
                return false;
            }
        };
        if !self.predicted.advance_sequence(command.sequence) {
            debug!("dropping stale echoed command #{}", command.sequence);
            return false;
        }
        self.predict(&command)
    }

    /// Highest sequence number echoed back by the Server
    pub fn last_echoed_sequence(&self) -> Sequence {
        self.predicted.last_processed_sequence()
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

    /// Locally predicted state of `function`
    pub fn query_state(&self, function: &Function) -> CommandState {
        self.predicted.state(function)
    }
}
