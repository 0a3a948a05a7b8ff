//! TUI (Terminal User Interface) module

mod app;
mod components;
mod event;
mod pages;
mod theme;
mod widgets;

pub use app::run;
