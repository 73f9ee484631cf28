pub mod error;
pub mod input_command;
