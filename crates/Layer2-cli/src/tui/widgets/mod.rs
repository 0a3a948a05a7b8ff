//! TUI Widgets

pub mod status_bar;

// Re-exports
pub use status_bar::{NotificationType, StatusBar, StatusBarState, StatusItem};
