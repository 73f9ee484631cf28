//! # Hotwire Client
//! Resolves raw key events into bound key functions, predicts their state
//! locally, offers them to the UI and client handlers, and forwards the
//! commands nothing consumed to the Server.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod transport;
pub mod shared {
    pub use hotwire_shared::{
        BindingKind, CommandHandler, CommandState, ContextTree, FnHandler, Function, Key,
        KeyBinding, KeyCombo, KeyTransition, PointerPosition, Protocol, Sequence,
    };
}

mod client;
mod client_config;
mod error;
mod prediction;
mod ui;

pub use client::Client;
pub use client_config::ClientConfig;
pub use error::HotwireClientError;
pub use prediction::{PredictionFlag, PredictionGuard};
pub use ui::UiBoundary;
