use std::{collections::HashMap, rc::Rc};

use log::{debug, warn};

use crate::{
    command::{
        command_context::CommandContext, command_handler::HandlerRef, command_state::CommandState,
    },
    function::function::Function,
    messages::input_command::InputCommand,
    types::HostType,
};

/// Groups handlers bound together so they can be torn down at once
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnbindHandle(u64);

struct BoundHandler {
    handler: HandlerRef,
    handle: Option<UnbindHandle>,
}

/// Function -> ordered handler list, for one simulation side
pub struct CommandBindRegistry {
    host: HostType,
    handlers: HashMap<Function, Vec<BoundHandler>>,
    next_handle: u64,
}

impl CommandBindRegistry {
    pub fn new(host: HostType) -> Self {
        Self {
            host,
            handlers: HashMap::new(),
            next_handle: 0,
        }
    }

    pub fn host(&self) -> HostType {
        self.host
    }

    pub fn new_unbind_handle(&mut self) -> UnbindHandle {
        let handle = UnbindHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Appends `handler` to the function's list. Binding the same handler
    /// twice to one function logs a warning and changes nothing.
    pub fn bind(&mut self, function: &Function, handler: HandlerRef) -> bool {
        self.insert(function, handler, None)
    }

    pub fn bind_with_handle(
        &mut self,
        handle: UnbindHandle,
        function: &Function,
        handler: HandlerRef,
    ) -> bool {
        self.insert(function, handler, Some(handle))
    }

    fn insert(
        &mut self,
        function: &Function,
        handler: HandlerRef,
        handle: Option<UnbindHandle>,
    ) -> bool {
        let list = self.handlers.entry(function.clone()).or_default();
        if list
            .iter()
            .any(|bound| std::ptr::addr_eq(Rc::as_ptr(&bound.handler), Rc::as_ptr(&handler)))
        {
            warn!(
                "{:?} handler already bound to function {}, ignoring duplicate bind",
                self.host, function
            );
            return false;
        }

        list.push(BoundHandler { handler, handle });
        true
    }

    /// Drops every handler bound to `function`
    pub fn unbind(&mut self, function: &Function) -> usize {
        self.handlers
            .remove(function)
            .map(|list| list.len())
            .unwrap_or(0)
    }

    /// Drops only the handlers bound under `handle`, across all functions
    pub fn unbind_handle(&mut self, handle: UnbindHandle) -> usize {
        let mut removed = 0;
        self.handlers.retain(|_, list| {
            let before = list.len();
            list.retain(|bound| bound.handle != Some(handle));
            removed += before - list.len();
            !list.is_empty()
        });
        removed
    }

    /// Handlers for `function`, in registration order
    pub fn handlers(&self, function: &Function) -> Vec<HandlerRef> {
        self.handlers
            .get(function)
            .map(|list| list.iter().map(|bound| bound.handler.clone()).collect())
            .unwrap_or_default()
    }

    pub fn is_bound(&self, function: &Function) -> bool {
        self.handlers.contains_key(function)
    }

    /// Calls `on_enabled` (Down) or `on_disabled` (Up) on each handler in order
    /// until one consumes the transition
    pub fn dispatch_transition(&self, context: &CommandContext, state: CommandState) -> bool {
        let consumed = self.handlers(context.function).iter().any(|handler| match state {
            CommandState::Down => handler.on_enabled(context),
            CommandState::Up => handler.on_disabled(context),
        });
        if consumed {
            debug!("{:?} {} {:?} consumed", self.host, context.function, state);
        }
        consumed
    }

    /// Calls `on_message` on each handler in order until one consumes it
    pub fn dispatch_message(&self, context: &CommandContext, command: &InputCommand) -> bool {
        self.handlers(context.function)
            .iter()
            .any(|handler| handler.on_message(context, command))
    }
}
