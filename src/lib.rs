//! Stayzy - student accommodation marketplace prototype for the terminal
//!
//! The `flow` module holds the navigator and both step machines with their
//! forms and mock data. Everything else renders those types with ratatui.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod flow;
pub mod icons;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

pub use app::App;
pub use config::Config;
pub use flow::{HostFlow, Navigator, StudentFlow, View};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
