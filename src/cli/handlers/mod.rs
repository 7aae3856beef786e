// src/cli/handlers/mod.rs

// Commands that need more than a single session call.

pub mod watch;
