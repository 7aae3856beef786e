// src/models.rs

use serde::{Deserialize, Serialize};

// --- STATE SNAPSHOT ---

/// Identity of the project reported by `swapenv info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectIdentity {
    /// The payload carried a usable project name.
    Named(String),
    /// A project exists but the payload did not name it.
    Present,
}

/// Cached view of the external tool's state for the current workspace.
///
/// Replaced wholesale by a refresh, never patched field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSnapshot {
    pub project: Option<ProjectIdentity>,
    pub active_environment: Option<String>,
    pub known_environments: Vec<String>,
}

impl StateSnapshot {
    /// The empty, "inactive" snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_project(&self) -> bool {
        self.project.is_some()
    }

    /// Active environment, but only while a project is present.
    pub fn active(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and(self.active_environment.as_deref())
    }

    /// Known environments, but only while a project is present.
    pub fn environments(&self) -> &[String] {
        if self.project.is_some() {
            &self.known_environments
        } else {
            &[]
        }
    }

    pub fn is_active(&self, env: &str) -> bool {
        self.active() == Some(env)
    }
}

/// What the status line should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicator {
    Hidden,
    Visible { text: String },
}

impl StatusIndicator {
    /// Derives the indicator from a snapshot: hidden without a project,
    /// otherwise the active environment or the "no env" placeholder.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Self {
        if !snapshot.has_project() {
            return Self::Hidden;
        }
        let text = snapshot
            .active()
            .map(str::to_string)
            .unwrap_or_else(|| t!("status.no_env").to_string());
        Self::Visible { text }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Visible { text } => Some(text),
        }
    }
}

// --- ACTIONS ---

/// How `swapenv load` treats variables already in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Merge,
    Replace,
}

/// Which environments `swapenv spit` writes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpitScope {
    All,
    Current,
}

/// A single operation chosen from a menu, consumed immediately by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    SwitchTo(String),
    Load(LoadMode),
    Spit(SpitScope),
    Refresh,
    ListVersions,
    SelectVersion(String),
}

// --- PICKER ITEMS ---

/// Whether a row in a quick pick can be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickKind {
    Item,
    Separator,
}

/// One row of a quick-pick list, as handed to the host for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub description: Option<String>,
    pub kind: PickKind,
}

impl PickItem {
    pub fn item(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            kind: PickKind::Item,
        }
    }

    pub fn separator(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            kind: PickKind::Separator,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    pub fn is_separator(&self) -> bool {
        self.kind == PickKind::Separator
    }
}

/// A menu row paired with the action it triggers. Separators carry no action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub item: PickItem,
    pub action: Option<ActionRequest>,
}

impl MenuEntry {
    pub fn separator(label: impl Into<String>) -> Self {
        Self {
            item: PickItem::separator(label),
            action: None,
        }
    }

    pub fn action(item: PickItem, action: ActionRequest) -> Self {
        Self {
            item,
            action: Some(action),
        }
    }
}

/// One line of `swapenv version ls`, with its display label and bare identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub label: String,
    pub version: String,
    pub latest: bool,
}

// --- CONFIGURATION ---

/// User settings read from `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Show an informational message after each action.
    pub show_notifications: bool,
    /// Refresh the status when a file in the workspace is saved.
    pub auto_refresh: bool,
    /// Command line used to invoke the external tool.
    pub command: String,
    /// Text printed before the status line.
    pub status_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_notifications: true,
            auto_refresh: true,
            command: crate::constants::DEFAULT_TOOL_COMMAND.to_string(),
            status_prefix: String::new(),
        }
    }
}
