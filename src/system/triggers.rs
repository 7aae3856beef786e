// src/system/triggers.rs

use crate::{constants::IGNORED_WATCH_GLOBS, models::Settings};
use globset::{Glob, GlobSet, GlobSetBuilder};
use notify::{
    Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{CreateKind, ModifyKind},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Error, Debug)]
pub enum WatchError {
    #[error(transparent)]
    Notify(#[from] notify::Error),
    #[error("Invalid ignore pattern: {0}")]
    Pattern(#[from] globset::Error),
}

/// Something outside the user's direct command that may warrant a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A file in the workspace was written.
    DocumentSaved(PathBuf),
    /// The terminal (or the editor hosting it) gained or lost focus.
    FocusChanged(bool),
    /// Ctrl+C: stop watching.
    Shutdown,
}

/// Decides whether `event` refreshes the status under `settings`.
/// Saves are gated by `auto_refresh`; gaining focus always refreshes.
pub fn should_refresh(event: &TriggerEvent, settings: &Settings) -> bool {
    match event {
        TriggerEvent::DocumentSaved(_) => settings.auto_refresh,
        TriggerEvent::FocusChanged(focused) => *focused,
        TriggerEvent::Shutdown => false,
    }
}

/// Every live event source, funnelled into one channel.
///
/// Dropping this stops the file watcher; signal listeners end with the runtime.
#[derive(Debug)]
pub struct TriggerSources {
    _watcher: Option<RecommendedWatcher>,
    tx: UnboundedSender<TriggerEvent>,
    rx: UnboundedReceiver<TriggerEvent>,
}

impl TriggerSources {
    /// Registers the file watcher (when a workspace exists) and the signal
    /// listeners. Must be called from inside a tokio runtime.
    pub fn start(workspace: Option<&Path>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let watcher = workspace.and_then(|root| match watch_workspace(root, tx.clone()) {
            Ok(w) => Some(w),
            Err(e) => {
                log::warn!(
                    "{}",
                    format!(
                        t!("watch.warning.watcher_failed"),
                        path = root.display(),
                        error = e
                    )
                );
                None
            }
        });

        spawn_shutdown_listener(tx.clone());
        #[cfg(unix)]
        spawn_focus_listeners(tx.clone());

        Self {
            _watcher: watcher,
            tx,
            rx,
        }
    }

    /// Waits for the next event. Events are delivered one at a time, in order.
    pub async fn next(&mut self) -> Option<TriggerEvent> {
        self.rx.recv().await
    }

    /// A sender for injecting events from elsewhere.
    pub fn sender(&self) -> UnboundedSender<TriggerEvent> {
        self.tx.clone()
    }
}

fn watch_workspace(
    root: &Path,
    tx: UnboundedSender<TriggerEvent>,
) -> Result<RecommendedWatcher, WatchError> {
    let filter = SaveFilter::new(root)?;
    let mut watcher = RecommendedWatcher::new(
        move |result: notify::Result<Event>| match result {
            Ok(event) => {
                if let Some(path) = filter.saved_path(&event) {
                    log::trace!("Document saved: {}", path.display());
                    let _ = tx.send(TriggerEvent::DocumentSaved(path));
                }
            }
            Err(e) => log::warn!("File watcher error: {}", e),
        },
        notify::Config::default(),
    )?;
    watcher.watch(root, RecursiveMode::Recursive)?;
    log::debug!("Watching {} for saves", root.display());
    Ok(watcher)
}

/// Decides which filesystem writes under a workspace count as saved
/// documents. VCS metadata, build output and editor swap files never do.
#[derive(Debug, Clone)]
pub struct SaveFilter {
    root: PathBuf,
    ignored: GlobSet,
}

impl SaveFilter {
    pub fn new(root: &Path) -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in IGNORED_WATCH_GLOBS {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self {
            root: root.to_path_buf(),
            ignored: builder.build()?,
        })
    }

    /// The first path of `event` that counts as a saved document, if any.
    pub fn saved_path(&self, event: &Event) -> Option<PathBuf> {
        let is_write = match event.kind {
            EventKind::Create(CreateKind::Folder) => false,
            EventKind::Create(_) => true,
            EventKind::Modify(ModifyKind::Metadata(_)) => false,
            EventKind::Modify(_) => true,
            _ => false,
        };
        if !is_write {
            return None;
        }
        event
            .paths
            .iter()
            .find(|path| !self.is_ignored(path))
            .cloned()
    }

    /// Matches relative to the workspace root.
    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.ignored.is_match(relative)
    }
}

fn spawn_shutdown_listener(tx: UnboundedSender<TriggerEvent>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = tx.send(TriggerEvent::Shutdown);
            }
            Err(e) => log::warn!("Could not listen for Ctrl+C: {}", e),
        }
    });
}

/// SIGUSR1 means focus gained, SIGUSR2 focus lost. Multiplexer and editor
/// focus hooks send these to the watching process.
#[cfg(unix)]
fn spawn_focus_listeners(tx: UnboundedSender<TriggerEvent>) {
    use tokio::signal::unix::{SignalKind, signal};

    for (kind, focused) in [
        (SignalKind::user_defined1(), true),
        (SignalKind::user_defined2(), false),
    ] {
        let tx = tx.clone();
        match signal(kind) {
            Ok(mut stream) => {
                tokio::spawn(async move {
                    while stream.recv().await.is_some() {
                        if tx.send(TriggerEvent::FocusChanged(focused)).is_err() {
                            break;
                        }
                    }
                });
            }
            Err(e) => log::warn!("Could not listen for focus signals: {}", e),
        }
    }
}
