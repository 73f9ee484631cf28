use std::rc::Rc;

use crate::{command::command_context::CommandContext, messages::input_command::InputCommand};

pub type HandlerRef = Rc<dyn CommandHandler>;

/// Receives bound key function events. Every callback returns whether it
/// consumed the event, which stops propagation to later handlers (and, on
/// the Client, keeps the command from being forwarded to the Server).
pub trait CommandHandler {
    /// The function transitioned to Down
    fn on_enabled(&self, _context: &CommandContext) -> bool {
        false
    }

    /// The function transitioned to Up
    fn on_disabled(&self, _context: &CommandContext) -> bool {
        false
    }

    /// A raw command arrived over the network (or is being predicted)
    fn on_message(&self, _context: &CommandContext, _command: &InputCommand) -> bool {
        false
    }
}

type TransitionFn = Box<dyn Fn(&CommandContext) -> bool>;
type MessageFn = Box<dyn Fn(&CommandContext, &InputCommand) -> bool>;

/// A [`CommandHandler`] assembled from closures. Slots left empty do not
/// consume anything.
///
/// ```
/// # use hotwire_shared::FnHandler;
/// let handler = FnHandler::new()
///     .when_enabled(|ctx| {
///         println!("{} pressed", ctx.function);
///         true
///     })
///     .into_ref();
/// ```
#[derive(Default)]
pub struct FnHandler {
    enabled: Option<TransitionFn>,
    disabled: Option<TransitionFn>,
    message: Option<MessageFn>,
}

impl FnHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when_enabled<F: Fn(&CommandContext) -> bool + 'static>(mut self, f: F) -> Self {
        self.enabled = Some(Box::new(f));
        self
    }

    pub fn when_disabled<F: Fn(&CommandContext) -> bool + 'static>(mut self, f: F) -> Self {
        self.disabled = Some(Box::new(f));
        self
    }

    pub fn when_message<F: Fn(&CommandContext, &InputCommand) -> bool + 'static>(
        mut self,
        f: F,
    ) -> Self {
        self.message = Some(Box::new(f));
        self
    }

    pub fn into_ref(self) -> HandlerRef {
        Rc::new(self)
    }
}

impl CommandHandler for FnHandler {
    fn on_enabled(&self, context: &CommandContext) -> bool {
        self.enabled.as_ref().is_some_and(|f| f(context))
    }

    fn on_disabled(&self, context: &CommandContext) -> bool {
        self.disabled.as_ref().is_some_and(|f| f(context))
    }

    fn on_message(&self, context: &CommandContext, command: &InputCommand) -> bool {
        self.message.as_ref().is_some_and(|f| f(context, command))
    }
}
