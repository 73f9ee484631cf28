//! # Hotwire Shared
//! Input binding functionality shared between hotwire-server & hotwire-client
//! crates: function identities and their network ids, key combos, the context
//! tree, the key binding table, the command bind registry and the wire format.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use naia_serde::{BitReader, BitWrite, BitWriter, Serde, SerdeErr};

mod binding;
mod checked_map;
mod command;
mod config;
mod context;
mod function;
mod key;
mod messages;
mod protocol;
mod types;

pub use binding::{
    binding_table::KeyBindingTable,
    error::BindingError,
    key_binding::{BindingKind, KeyBinding},
    key_transition::KeyTransition,
};
pub use checked_map::CheckedMap;
pub use command::{
    bind_registry::{CommandBindRegistry, UnbindHandle},
    command_context::CommandContext,
    command_handler::{CommandHandler, FnHandler, HandlerRef},
    command_state::{CommandState, SessionCommandState},
    error::CommandStateError,
};
pub use config::{
    error::{KeybindFileError, KeybindRecordError},
    keybind_file::KeybindFile,
};
pub use context::{
    context::Context,
    context_tree::{ContextTransition, ContextTree, ROOT_CONTEXT},
    error::ContextError,
};
pub use function::{
    error::FunctionKindsError, function::Function, function_kinds::FunctionKinds,
    function_registry::FunctionRegistry,
};
pub use key::{
    error::{KeyComboError, KeyParseError},
    key::{Key, KEY_COUNT},
    key_combo::{KeyCombo, MAX_MODIFIERS},
};
pub use messages::{
    error::{CommandDecodeError, CommandEncodeError},
    input_command::{InputCommand, InputCommandFrame},
};
pub use protocol::{Protocol, ProtocolError, ProtocolPlugin};
pub use types::{FunctionNetId, HostType, PointerPosition, Sequence, SessionKey};
