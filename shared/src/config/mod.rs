pub mod error;
pub mod keybind_file;
