pub mod cli;
pub mod commands;
pub mod compare;
pub mod config;
pub mod constants;
pub mod help;
pub mod input;
pub mod version;

pub use compare::{BACKSPACE, TailCursor, apply_edits, typed_eq};
