//! # swapbar
//!
//! Surfaces the `swapenv` environment switcher in a terminal: a status line for
//! prompts and multiplexer status bars, quick-pick menus to switch, load or
//! export ("spit") environments, a version browser, and a watcher that
//! refreshes the status when files are saved or the terminal regains focus.
//!
//! All environment logic lives in the external tool. This crate only runs it,
//! parses what it prints, and keeps a small cached snapshot in sync.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod state;
pub mod system;
