//! Progress reporting while commands are applied.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use labelkit::{CommandStatus, ConfigCommand, ProgressCallback};

/// Progress bar that prints one line per failed command.
pub struct ApplyBar {
    bar: Option<ProgressBar>,
    quiet: bool,
}

impl ApplyBar {
    pub fn new(quiet: bool) -> Self {
        Self { bar: None, quiet }
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("  {spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}

impl ProgressCallback for ApplyBar {
    fn on_start(&mut self, total: usize) {
        let bar = if self.quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };
        bar.set_style(bar_style());
        self.bar = Some(bar);
    }

    fn on_command_complete(&mut self, command: &ConfigCommand, status: &CommandStatus) {
        let Some(bar) = &self.bar else {
            return;
        };
        let symbol = match status {
            CommandStatus::Applied => "✓".green(),
            CommandStatus::Failed { .. } => "✗".red(),
        };
        if let CommandStatus::Failed { error } = status {
            bar.println(format!("  {} {}: {}", "✗".red(), command.short_name, error));
        }
        bar.set_message(format!("{symbol} {}", command.short_name));
        bar.inc(1);
    }

    fn on_finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
