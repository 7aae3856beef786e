// src/cli/handlers/watch.rs

use crate::{
    cli::Overrides,
    core::{config_loader, session::Session},
    models::Settings,
    system::{
        executor::ToolRunner,
        host::Host,
        triggers::TriggerSources,
    },
};
use colored::Colorize;

/// The handler for `watch`: keeps the status line current until Ctrl+C.
///
/// The activation refresh has already run. From here on, saves and focus
/// changes each trigger a refresh, one event at a time and without
/// debouncing.
pub async fn handle<R: ToolRunner, H: Host>(session: &mut Session<R, H>, overrides: &Overrides) {
    let mut sources = TriggerSources::start(session.workspace());

    match session.workspace() {
        Some(path) => eprintln!(
            "{}",
            format!(t!("watch.info.started"), path = path.display()).dimmed()
        ),
        None => eprintln!("{}", t!("watch.warning.no_workspace").yellow()),
    }

    watch_loop(session, &mut sources, || reload_settings(overrides)).await;

    eprintln!("{}", t!("watch.info.stopped").dimmed());
}

/// Consumes events until the sources close or a shutdown arrives. Settings
/// are reloaded before each event so config edits apply immediately.
pub(crate) async fn watch_loop<R, H, F>(
    session: &mut Session<R, H>,
    sources: &mut TriggerSources,
    mut reload: F,
) where
    R: ToolRunner,
    H: Host,
    F: FnMut() -> Option<Settings>,
{
    while let Some(event) = sources.next().await {
        if let Some(settings) = reload() {
            session.set_settings(settings);
        }
        if !session.handle_trigger(&event).await {
            break;
        }
    }
}

/// Reads the config again. A broken file keeps the previous settings.
fn reload_settings(overrides: &Overrides) -> Option<Settings> {
    match config_loader::load_settings() {
        Ok(settings) => Some(overrides.apply(settings)),
        Err(e) => {
            log::warn!("{}; keeping previous settings", e);
            None
        }
    }
}
