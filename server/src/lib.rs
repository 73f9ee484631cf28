//! # Hotwire Server
//! Tracks connected sessions, sanitizes the input commands they send, keeps
//! per-session function state and dispatches applied commands to server
//! handlers.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use hotwire_shared::{
        CommandHandler, CommandState, FnHandler, Function, InputCommand, Protocol, Sequence,
        SessionKey,
    };
}

mod events;
mod server;
mod session;

pub use events::CommandReceipt;
pub use server::{Server, ServerConfig};
pub use session::{SessionInfo, SessionRegistry};
