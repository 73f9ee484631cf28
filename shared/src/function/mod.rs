pub mod error;
pub mod function;
pub mod function_kinds;
pub mod function_registry;
