pub mod context;
pub mod context_tree;
pub mod error;
