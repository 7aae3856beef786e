// src/core/mod.rs

pub mod config_loader;
pub mod dispatcher;
pub mod menu;
pub mod paths;
pub mod session;
pub mod status_parser;
pub mod versions;

#[cfg(test)]
pub(crate) mod testing;
