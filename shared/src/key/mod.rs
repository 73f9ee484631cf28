pub mod error;
pub mod key;
pub mod key_combo;
