//! Apply gate - confirm, then push commands to the device.
//!
//! The gate owns no I/O of its own. Confirmation, progress reporting and
//! command execution are injected through traits, so the same flow drives
//! an interactive terminal, a scripted `--yes` run, and tests.
//!
//! Application is best-effort: a failing command is recorded and the
//! remaining commands still run, in synthesized order.

use crate::error::Result;
use crate::types::ConfigCommand;
use serde::Serialize;

/// Reminder shown after commands were applied.
pub const SAVE_REMINDER: &str =
    "Descriptions are in the running config only. Run 'copy running-config startup-config' to keep them.";

/// Executes rendered configuration commands on a device.
pub trait ApplyChannel {
    /// Execute one command.
    fn execute(&mut self, command: &ConfigCommand) -> Result<()>;
}

impl<T: ApplyChannel + ?Sized> ApplyChannel for &mut T {
    fn execute(&mut self, command: &ConfigCommand) -> Result<()> {
        (**self).execute(command)
    }
}

/// Confirmation callback for operator interaction.
pub trait ConfirmCallback {
    /// Ask the operator to confirm.
    ///
    /// Anything other than an explicit yes must return `false`.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Progress callback for apply operations.
pub trait ProgressCallback {
    /// Called once before the first command runs
    fn on_start(&mut self, total: usize);

    /// Called after each command
    fn on_command_complete(&mut self, command: &ConfigCommand, status: &CommandStatus);

    /// Called after the last command
    fn on_finish(&mut self);
}

/// Auto-confirm callback (always returns true)
pub struct AutoConfirm;

impl ConfirmCallback for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Auto-decline callback (always returns false)
pub struct AutoDecline;

impl ConfirmCallback for AutoDecline {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(false)
    }
}

/// No-op progress callback
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_start(&mut self, _total: usize) {}
    fn on_command_complete(&mut self, _command: &ConfigCommand, _status: &CommandStatus) {}
    fn on_finish(&mut self) {}
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CommandStatus {
    Applied,
    Failed { error: String },
}

impl CommandStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Per-command results of an apply, in execution order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyReport {
    pub results: Vec<(ConfigCommand, CommandStatus)>,
}

impl ApplyReport {
    pub fn applied(&self) -> usize {
        self.results.iter().filter(|(_, s)| s.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.applied()
    }

    /// Check if every command succeeded
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Failed commands with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&ConfigCommand, &str)> {
        self.results.iter().filter_map(|(command, status)| match status {
            CommandStatus::Failed { error } => Some((command, error.as_str())),
            CommandStatus::Applied => None,
        })
    }
}

/// What the gate did.
#[derive(Debug, Clone, Serialize)]
pub enum ApplyOutcome {
    /// There were no commands to apply
    NothingToApply,
    /// The operator did not confirm; nothing was executed
    Declined,
    /// Commands were executed
    Applied(ApplyReport),
}

/// Confirm with the operator, then execute `commands` in order.
///
/// Nothing is executed unless `confirm` returns `true`. An error from the
/// confirmation callback is returned as-is, also without executing anything.
pub fn apply<A, C, P>(
    commands: &[ConfigCommand],
    channel: &mut A,
    confirm: &mut C,
    progress: &mut P,
) -> Result<ApplyOutcome>
where
    A: ApplyChannel + ?Sized,
    C: ConfirmCallback + ?Sized,
    P: ProgressCallback + ?Sized,
{
    if commands.is_empty() {
        return Ok(ApplyOutcome::NothingToApply);
    }

    let prompt = format!("Apply {} interface descriptions?", commands.len());
    if !confirm.confirm(&prompt)? {
        log::info!("operator declined, {} commands not applied", commands.len());
        return Ok(ApplyOutcome::Declined);
    }

    progress.on_start(commands.len());
    let mut report = ApplyReport::default();
    for command in commands {
        let status = match channel.execute(command) {
            Ok(()) => CommandStatus::Applied,
            Err(e) => {
                log::warn!("{command}: {e}");
                CommandStatus::Failed {
                    error: e.to_string(),
                }
            }
        };
        progress.on_command_complete(command, &status);
        report.results.push((command.clone(), status));
    }
    progress.on_finish();

    Ok(ApplyOutcome::Applied(report))
}

/// Apply without confirmation or progress.
///
/// For scripted runs where the caller has already obtained consent.
pub fn apply_confirmed<A: ApplyChannel + ?Sized>(
    commands: &[ConfigCommand],
    channel: &mut A,
) -> Result<ApplyOutcome> {
    apply(commands, channel, &mut AutoConfirm, &mut NoProgress)
}
