// src/core/testing.rs

//! Scripted stand-ins for the external tool and the host UI.

use crate::{
    core::session::Session,
    models::{PickItem, Settings, StatusIndicator},
    system::{executor::ToolRunner, host::Host},
};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Answers invocations from a table keyed by the space-joined arguments.
/// Unknown invocations fail (`None`). Every call is recorded, along with the
/// command line it was made with.
#[derive(Debug, Default)]
pub(crate) struct FakeRunner {
    responses: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<String>>,
    commands: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, args: &str, output: &str) -> Self {
        self.set(args, output);
        self
    }

    pub(crate) fn set(&self, args: &str, output: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(args.to_string(), output.to_string());
    }

    pub(crate) fn fail(&self, args: &str) {
        self.responses.lock().unwrap().remove(args);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
        self.commands.lock().unwrap().clear();
    }
}

#[async_trait]
impl ToolRunner for FakeRunner {
    async fn run(&self, command: &str, args: &[String], _cwd: &Path) -> Option<String> {
        let key = args.join(" ");
        self.commands.lock().unwrap().push(command.to_string());
        self.calls.lock().unwrap().push(key.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .filter(|output| !output.is_empty())
            .cloned()
    }
}

/// Picks rows by label from a queue of scripted answers (`None` = dismiss)
/// and records everything shown.
#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    picks: VecDeque<Option<String>>,
    pub(crate) statuses: Vec<StatusIndicator>,
    pub(crate) offered: Vec<(String, Vec<PickItem>)>,
    pub(crate) infos: Vec<String>,
    pub(crate) warnings: Vec<String>,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues the label of the row to choose at the next pick.
    pub(crate) fn pick(mut self, label: &str) -> Self {
        self.picks.push_back(Some(label.to_string()));
        self
    }

    /// Queues a dismissed pick.
    pub(crate) fn dismiss(mut self) -> Self {
        self.picks.push_back(None);
        self
    }

    pub(crate) fn last_status(&self) -> Option<&StatusIndicator> {
        self.statuses.last()
    }
}

#[async_trait]
impl Host for FakeHost {
    fn show_status(&mut self, indicator: &StatusIndicator) {
        self.statuses.push(indicator.clone());
    }

    async fn quick_pick(&mut self, placeholder: &str, items: &[PickItem]) -> Option<usize> {
        self.offered.push((placeholder.to_string(), items.to_vec()));
        let label = self.picks.pop_front().flatten()?;
        items.iter().position(|item| {
            !item.is_separator() && (item.label == label || item.label.trim() == label)
        })
    }

    fn show_info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn show_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

/// A session over `runner` with default settings, a fake workspace and no
/// scripted picks.
pub(crate) fn demo_session(runner: FakeRunner) -> Session<FakeRunner, FakeHost> {
    session_with(runner, FakeHost::new(), Settings::default())
}

pub(crate) fn session_with(
    runner: FakeRunner,
    host: FakeHost,
    settings: Settings,
) -> Session<FakeRunner, FakeHost> {
    Session::new(runner, host, settings, Some(PathBuf::from("/workspace/demo")))
}
