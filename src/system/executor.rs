// src/system/executor.rs

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command could not be parsed: {0}")]
    CommandParse(String),
    #[error("No command configured for the external tool.")]
    EmptyCommand,
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    #[error("Command '{command}' exited with status {status}.")]
    NonZeroExitStatus { command: String, status: String },
    #[error("Command '{command}' produced output that was not valid UTF-8")]
    InvalidUtf8Output {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Runs the external tool.
///
/// Every failure (spawn error, non-zero exit, undecodable or empty output)
/// comes back as `None`. Callers never see why an invocation failed; they
/// only decide what "nothing" means for them.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Runs `command` (the configured tool command line) with `args` inside
    /// `cwd` and returns its trimmed stdout.
    async fn run(&self, command: &str, args: &[String], cwd: &Path) -> Option<String>;
}

/// Invokes the real `swapenv` binary (or a configured wrapper command).
///
/// The command line is passed per call, so a reloaded config takes effect on
/// the next invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapenvCli;

impl SwapenvCli {
    /// Runs the tool and captures stdout. `command_line` is split shell-style,
    /// so `npx swapenv` works. Stderr is discarded so tool chatter never lands
    /// on the status line.
    pub async fn execute_and_capture_output(
        &self,
        command_line: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<String, ExecutionError> {
        let trimmed_command = command_line.trim();
        let mut parts = shlex::split(trimmed_command)
            .ok_or_else(|| ExecutionError::CommandParse(trimmed_command.to_string()))?
            .into_iter();
        let program = parts.next().ok_or(ExecutionError::EmptyCommand)?;

        let full_args: Vec<String> = parts.chain(args.iter().cloned()).collect();
        let display = render_command_line(&program, &full_args);
        let clean_cwd = dunce::simplified(cwd);

        log::debug!("Running '{}' in {}", display, clean_cwd.display());

        let output = Command::new(&program)
            .args(&full_args)
            .current_dir(clean_cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| ExecutionError::CommandFailed(display.clone(), e))?;

        if !output.status.success() {
            return Err(ExecutionError::NonZeroExitStatus {
                command: display,
                status: output.status.to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            ExecutionError::InvalidUtf8Output {
                command: display.clone(),
                source: e,
            }
        })?;
        log::trace!("'{}' printed: {:?}", display, stdout);
        Ok(stdout.trim().to_string())
    }
}

#[async_trait]
impl ToolRunner for SwapenvCli {
    async fn run(&self, command: &str, args: &[String], cwd: &Path) -> Option<String> {
        match self.execute_and_capture_output(command, args, cwd).await {
            Ok(output) if output.is_empty() => {
                log::debug!("'{}' printed nothing", command);
                None
            }
            Ok(output) => Some(output),
            Err(e) => {
                log::debug!("{}", e);
                None
            }
        }
    }
}

/// Quotes a command for log and error messages.
fn render_command_line(program: &str, args: &[String]) -> String {
    let words = std::iter::once(program).chain(args.iter().map(String::as_str));
    shlex::try_join(words).unwrap_or_else(|_| format!("{} {}", program, args.join(" ")))
}
