use crate::{
    cli::{Overrides, handlers},
    core::session::Session,
    system::{executor::ToolRunner, host::Host},
};

/// Command used when none is given.
pub const DEFAULT_COMMAND: &str = "status";

/// Every entry point the integration offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    ShowMenu,
    SwitchEnv,
    Load,
    Spit,
    Refresh,
    ShowVersions,
    Status,
    Watch,
}

impl CommandId {
    /// Commands whose purpose is to keep the status line up to date.
    pub fn prints_status(self) -> bool {
        matches!(self, Self::Status | Self::Refresh | Self::Watch)
    }
}

/// Defines a command, its editor-style identifier, its name and its aliases.
struct CommandDefinition {
    id: CommandId,
    identifier: Option<&'static str>,
    name: &'static str,
    aliases: &'static [&'static str],
}

/// The single source of truth for all commands.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        id: CommandId::ShowMenu,
        identifier: Some("swapenv.showMenu"),
        name: "menu",
        aliases: &["m"],
    },
    CommandDefinition {
        id: CommandId::SwitchEnv,
        identifier: Some("swapenv.switchEnv"),
        name: "switch",
        aliases: &["to", "sw"],
    },
    CommandDefinition {
        id: CommandId::Load,
        identifier: Some("swapenv.load"),
        name: "load",
        aliases: &[],
    },
    CommandDefinition {
        id: CommandId::Spit,
        identifier: Some("swapenv.spit"),
        name: "spit",
        aliases: &["export"],
    },
    CommandDefinition {
        id: CommandId::Refresh,
        identifier: Some("swapenv.refresh"),
        name: "refresh",
        aliases: &["r"],
    },
    CommandDefinition {
        id: CommandId::ShowVersions,
        identifier: Some("swapenv.showVersions"),
        name: "versions",
        aliases: &["version", "v"],
    },
    CommandDefinition {
        id: CommandId::Status,
        identifier: None,
        name: "status",
        aliases: &[],
    },
    CommandDefinition {
        id: CommandId::Watch,
        identifier: None,
        name: "watch",
        aliases: &["w"],
    },
];

/// Finds a command by name, alias or identifier.
pub fn find_command(name: &str) -> Option<CommandId> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| {
            cmd.name == name || cmd.aliases.contains(&name) || cmd.identifier == Some(name)
        })
        .map(|cmd| cmd.id)
}

/// The primary names, in registry order.
pub fn command_names() -> Vec<&'static str> {
    COMMAND_REGISTRY.iter().map(|cmd| cmd.name).collect()
}

/// Runs `command` on `session`.
///
/// Every command starts with the activation refresh, so menus are built from
/// fresh state and the status-only commands need nothing more.
pub async fn dispatch<R: ToolRunner, H: Host>(
    command: CommandId,
    session: &mut Session<R, H>,
    overrides: &Overrides,
) {
    log::debug!("Dispatching {:?}", command);
    session.refresh().await;

    match command {
        CommandId::Status | CommandId::Refresh => {}
        CommandId::ShowMenu => session.present_menu().await,
        CommandId::SwitchEnv => session.switch_environment().await,
        CommandId::Load => session.load().await,
        CommandId::Spit => session.spit().await,
        CommandId::ShowVersions => session.browse_versions().await,
        CommandId::Watch => handlers::watch::handle(session, overrides).await,
    }
}
