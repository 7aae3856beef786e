//! # System Interaction Layer
//!
//! Boundary between the refresh/dispatch logic and the outside world.
//!
//! ## Modules
//!
//! - **`executor`**: runs the external `swapenv` binary and collapses every
//!   failure into "no usable result".
//! - **`host`**: the UI seam (status line, quick picks, messages) and its
//!   terminal implementation built on `dialoguer` and `colored`.
//! - **`triggers`**: the passive event sources (file saves, focus, Ctrl+C)
//!   that feed the watch loop.

pub mod executor;
pub mod host;
pub mod triggers;
