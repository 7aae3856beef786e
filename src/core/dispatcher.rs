// src/core/dispatcher.rs

//! The interactive flows: build a list from the snapshot, let the user pick,
//! run exactly one tool invocation, then refresh and notify.

use crate::{
    constants::{
        ARG_ENV_FLAG, ARG_LOAD, ARG_REPLACE_FLAG, ARG_SPIT, ARG_SWITCH, ARG_VERSION,
        ARG_VERSION_LIST,
    },
    core::{menu, session::Session, versions},
    models::{ActionRequest, LoadMode, MenuEntry, PickItem, SpitScope, StateSnapshot},
    system::{executor::ToolRunner, host::Host},
};
use std::path::Path;

/// The arguments `action` passes to the tool, or `None` when it runs nothing
/// (refresh, the version list sub-flow, or spitting the current environment
/// while none is active).
pub fn invocation_args(action: &ActionRequest, snapshot: &StateSnapshot) -> Option<Vec<String>> {
    let args = match action {
        ActionRequest::SwitchTo(env) => vec![ARG_SWITCH.to_string(), env.clone()],
        ActionRequest::Load(LoadMode::Merge) => vec![ARG_LOAD.to_string()],
        ActionRequest::Load(LoadMode::Replace) => {
            vec![ARG_LOAD.to_string(), ARG_REPLACE_FLAG.to_string()]
        }
        ActionRequest::Spit(SpitScope::All) => vec![ARG_SPIT.to_string()],
        ActionRequest::Spit(SpitScope::Current) => {
            let env = snapshot.active()?;
            vec![ARG_SPIT.to_string(), ARG_ENV_FLAG.to_string(), env.to_string()]
        }
        ActionRequest::SelectVersion(version) => vec![ARG_VERSION.to_string(), version.clone()],
        ActionRequest::Refresh | ActionRequest::ListVersions => return None,
    };
    Some(args)
}

/// The message shown after `action` ran, if it ran anything.
pub fn notification_for(action: &ActionRequest, snapshot: &StateSnapshot) -> Option<String> {
    let message = match action {
        ActionRequest::SwitchTo(env) => format!(t!("notify.switched"), env = env),
        ActionRequest::Load(LoadMode::Merge) => t!("notify.loaded_merge").to_string(),
        ActionRequest::Load(LoadMode::Replace) => t!("notify.loaded_replace").to_string(),
        ActionRequest::Spit(SpitScope::All) => t!("notify.spit_all").to_string(),
        ActionRequest::Spit(SpitScope::Current) => {
            format!(t!("notify.spit_env"), env = snapshot.active()?)
        }
        ActionRequest::SelectVersion(version) => {
            format!(t!("notify.switched_version"), version = version)
        }
        ActionRequest::Refresh | ActionRequest::ListVersions => return None,
    };
    Some(message)
}

impl<R: ToolRunner, H: Host> Session<R, H> {
    /// The main menu: environments, load, spit, refresh and versions.
    pub async fn present_menu(&mut self) {
        let entries = menu::build_main_menu(self.snapshot());
        if let Some(action) = self.pick_action(t!("menu.placeholder"), &entries).await {
            self.execute(action).await;
        }
    }

    /// Quick switch between the known environments only.
    pub async fn switch_environment(&mut self) {
        if self.workspace.is_none() {
            return;
        }
        if self.snapshot().environments().is_empty() {
            self.refresh().await;
        }

        let entries = menu::build_environment_menu(self.snapshot());
        if let Some(action) = self.pick_action(t!("switch.placeholder"), &entries).await {
            self.execute(action).await;
        }
    }

    /// Load with merge or replace.
    pub async fn load(&mut self) {
        let entries = menu::build_load_menu();
        if let Some(action) = self.pick_action(t!("load.placeholder"), &entries).await {
            self.execute(action).await;
        }
    }

    /// Spit all environments or only the active one.
    pub async fn spit(&mut self) {
        let entries = menu::build_spit_menu(self.snapshot());
        if let Some(action) = self.pick_action(t!("spit.placeholder"), &entries).await {
            self.execute(action).await;
        }
    }

    /// Lists the tool's releases and switches to the chosen one.
    ///
    /// An empty or failed listing is the one failure the user is told about.
    pub async fn browse_versions(&mut self) {
        let Some(cwd) = self.workspace.clone() else {
            return;
        };

        let args = vec![ARG_VERSION.to_string(), ARG_VERSION_LIST.to_string()];
        let output = self.runner.run(&self.settings.command, &args, &cwd).await;
        let entries = output
            .as_deref()
            .map(versions::parse_version_list)
            .unwrap_or_default();

        if entries.is_empty() {
            self.host.show_warning(t!("versions.warning.none_found"));
            return;
        }

        let items: Vec<PickItem> = entries
            .iter()
            .map(|entry| PickItem::item(entry.label.clone()))
            .collect();
        let Some(index) = self.host.quick_pick(t!("versions.placeholder"), &items).await else {
            return;
        };
        let Some(entry) = entries.get(index) else {
            return;
        };

        let action = ActionRequest::SelectVersion(entry.version.clone());
        self.run_and_refresh(&action, &cwd).await;
    }

    /// Runs one chosen action. Without a workspace nothing happens.
    ///
    /// The version list delegates to [`Self::browse_versions`], which refreshes
    /// on its own. Every other action runs its invocation (if any), refreshes,
    /// then notifies.
    pub async fn execute(&mut self, action: ActionRequest) {
        let Some(cwd) = self.workspace.clone() else {
            return;
        };

        if action == ActionRequest::ListVersions {
            self.browse_versions().await;
            return;
        }
        self.run_and_refresh(&action, &cwd).await;
    }

    async fn run_and_refresh(&mut self, action: &ActionRequest, cwd: &Path) {
        // Built from the snapshot the user picked from, before the refresh replaces it.
        let message = notification_for(action, self.snapshot());

        match invocation_args(action, self.snapshot()) {
            Some(args) => {
                log::debug!("Executing {:?}", action);
                // The result is ignored: the refresh shows whatever the tool did.
                let _ = self.runner.run(&self.settings.command, &args, cwd).await;
            }
            None => log::debug!("{:?} runs no command", action),
        }

        self.refresh().await;

        if let Some(message) = message {
            self.notify(&message);
        }
    }

    async fn pick_action(
        &mut self,
        placeholder: &str,
        entries: &[MenuEntry],
    ) -> Option<ActionRequest> {
        let items = menu::pick_items(entries);
        let index = self.host.quick_pick(placeholder, &items).await?;
        menu::action_at(entries, index).cloned()
    }
}
