//! TUI Pages

mod visitors;

pub use visitors::{PageAction, VisitorPage};
