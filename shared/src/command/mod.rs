pub mod bind_registry;
pub mod command_context;
pub mod command_handler;
pub mod command_state;
pub mod error;
