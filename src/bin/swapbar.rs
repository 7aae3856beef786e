// src/bin/swapbar.rs

use colored::*;
use swapbar::{cli::Cli, t};
use clap::Parser;

/// The main entry point of `swapbar`.
/// It sets up logging, parses arguments, runs the command on a
/// single-threaded runtime, and performs centralized error handling.
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // One thread: every flow runs to completion before the next event is handled.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("\n{}: {}", t!("common.error").red().bold(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(swapbar::cli::run(cli)) {
        eprintln!("\n{}: {}", t!("common.error").red().bold(), e);
        std::process::exit(1);
    }
}
