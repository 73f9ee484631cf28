pub mod binding_table;
pub mod error;
pub mod key_binding;
pub mod key_transition;
