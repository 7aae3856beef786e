// src/system/host.rs

use crate::models::{PickItem, StatusIndicator};
use async_trait::async_trait;
use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};

/// The UI surface the refresh and dispatch flows talk to.
#[async_trait]
pub trait Host: Send {
    /// Shows or hides the status indicator.
    fn show_status(&mut self, indicator: &StatusIndicator);

    /// Lets the user choose one of `items`. Returns the index into `items`
    /// of the chosen row, or `None` if the pick was dismissed.
    /// Separators are never returned.
    async fn quick_pick(&mut self, placeholder: &str, items: &[PickItem]) -> Option<usize>;

    /// An informational message (notifications after actions).
    fn show_info(&mut self, message: &str);

    /// A warning the user should act on.
    fn show_warning(&mut self, message: &str);
}

/// When the terminal host prints the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutput {
    /// Never print; used by the interactive commands.
    Silent,
    /// Print whenever the indicator differs from the last one printed.
    OnChange,
}

/// Host backed by the terminal: status on stdout, menus through `dialoguer`.
#[derive(Debug)]
pub struct TerminalHost {
    status_prefix: String,
    output: StatusOutput,
    last_status: Option<StatusIndicator>,
}

impl TerminalHost {
    pub fn new(status_prefix: impl Into<String>, output: StatusOutput) -> Self {
        Self {
            status_prefix: status_prefix.into(),
            output,
            last_status: None,
        }
    }

    /// Records `indicator` and returns the line to print for it, if any.
    /// Unchanged indicators print nothing. Going from visible to hidden
    /// prints an empty line so whoever reads stdout clears the status.
    fn status_update(&mut self, indicator: &StatusIndicator) -> Option<String> {
        if self.output == StatusOutput::Silent {
            return None;
        }
        if self.last_status.as_ref() == Some(indicator) {
            return None;
        }

        let was_visible = self
            .last_status
            .as_ref()
            .is_some_and(StatusIndicator::is_visible);
        self.last_status = Some(indicator.clone());

        match self.render_status(indicator) {
            Some(line) => Some(line),
            None if was_visible => Some(String::new()),
            None => None,
        }
    }

    fn render_status(&self, indicator: &StatusIndicator) -> Option<String> {
        let text = indicator.text()?;
        if self.status_prefix.is_empty() {
            Some(text.to_string())
        } else {
            Some(format!("{} {}", self.status_prefix, text))
        }
    }
}

#[async_trait]
impl Host for TerminalHost {
    fn show_status(&mut self, indicator: &StatusIndicator) {
        if let Some(line) = self.status_update(indicator) {
            println!("{}", line);
        }
    }

    async fn quick_pick(&mut self, placeholder: &str, items: &[PickItem]) -> Option<usize> {
        let rows = render_pick_rows(items);
        if rows.is_empty() {
            return None;
        }

        let (indices, labels): (Vec<usize>, Vec<String>) = rows.into_iter().unzip();
        let prompt = placeholder.to_string();

        let selection = tokio::task::spawn_blocking(move || {
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .items(&labels)
                .default(0)
                .interact_opt()
        })
        .await;

        match selection {
            Ok(Ok(Some(row))) => indices.get(row).copied(),
            Ok(Ok(None)) => None,
            Ok(Err(e)) => {
                log::warn!("Quick pick failed: {}", e);
                None
            }
            Err(e) => {
                log::warn!("Quick pick task failed: {}", e);
                None
            }
        }
    }

    fn show_info(&mut self, message: &str) {
        println!("{} {}", "✔".green(), message);
    }

    fn show_warning(&mut self, message: &str) {
        eprintln!("{}: {}", t!("common.warning").yellow().bold(), message);
    }
}

/// Turns pick items into selectable rows, folding each separator into the
/// rows below it as a dimmed group label. Returns (item index, row text).
fn render_pick_rows(items: &[PickItem]) -> Vec<(usize, String)> {
    let mut rows = Vec::new();
    let mut group: Option<&str> = None;

    for (index, item) in items.iter().enumerate() {
        if item.is_separator() {
            group = Some(&item.label);
            continue;
        }

        let mut row = match group {
            Some(g) => format!("{:<10} {}", g.dimmed(), item.label),
            None => item.label.clone(),
        };
        if let Some(description) = &item.description {
            row.push_str(&format!(" {}", description.dimmed()));
        }
        rows.push((index, row));
    }
    rows
}
