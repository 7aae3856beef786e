use crate::{
    core::{config_loader, paths, session::Session},
    models::Settings,
    system::{
        executor::SwapenvCli,
        host::{StatusOutput, TerminalHost},
    },
};
use anyhow::{Result, anyhow};
use clap::Parser;

pub mod dispatcher;
pub mod handlers;

/// Builds the dynamic, color-aware full help string at runtime.
fn build_help_string() -> &'static str {
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let template = t!("cli.help.template");

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let cmd = if use_colors { "\x1b[36m" } else { "" }; // Cyan
    let dim = if use_colors { "\x1b[2m" } else { "" };
    let reset = if use_colors { "\x1b[0m" } else { "" };

    let formatted_string = template
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<cmd>", cmd)
        .replace("</cmd>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset);

    Box::leak(formatted_string.into_boxed_str())
}

/// swapbar: status line and quick-pick menus for swapenv.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about,
    help_template = { build_help_string() },
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Command name, alias or identifier. Defaults to `status`.
    pub command: Option<String>,

    /// Workspace root the tool runs in. Defaults to $SWAPBAR_WORKSPACE, then
    /// the current directory.
    #[arg(long, short = 'w')]
    pub workspace: Option<String>,

    /// Do not print notifications after actions.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Command line used to run the external tool (overrides the config).
    #[arg(long, value_name = "COMMAND")]
    pub tool: Option<String>,
}

/// Command-line settings that win over the config file, re-applied whenever
/// the file is reloaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub quiet: bool,
    pub tool: Option<String>,
}

impl Overrides {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            quiet: cli.quiet,
            tool: cli.tool.clone(),
        }
    }

    pub fn apply(&self, mut settings: Settings) -> Settings {
        if self.quiet {
            settings.show_notifications = false;
        }
        if let Some(tool) = &self.tool {
            settings.command = tool.clone();
        }
        settings
    }
}

/// Resolves the command, builds a terminal session and runs it.
pub async fn run(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let name = cli.command.as_deref().unwrap_or(dispatcher::DEFAULT_COMMAND);
    let command = dispatcher::find_command(name).ok_or_else(|| {
        anyhow!(format!(
            t!("cli.error.unknown_command"),
            name = name,
            available = dispatcher::command_names().join(", ")
        ))
    })?;

    let overrides = Overrides::from_cli(&cli);
    let settings = overrides.apply(config_loader::load_settings()?);
    let workspace = paths::resolve_workspace(cli.workspace.as_deref());
    log::debug!("Workspace: {:?}", workspace);

    let output = if command.prints_status() {
        StatusOutput::OnChange
    } else {
        StatusOutput::Silent
    };
    let host = TerminalHost::new(settings.status_prefix.clone(), output);
    let mut session = Session::new(SwapenvCli, host, settings, workspace);

    dispatcher::dispatch(command, &mut session, &overrides).await;
    Ok(())
}
