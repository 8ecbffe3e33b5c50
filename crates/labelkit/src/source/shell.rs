//! Live device source that runs CLI commands through a local program.
//!
//! On NX-OS the tool runs in the bash or guest shell, where `vsh -c "<cli>"`
//! executes a CLI line on the switch. The program and its leading arguments
//! are configurable so the same code works with `dohost` or an SSH wrapper.

use super::{CommandSource, Record, nxos};
use crate::apply::ApplyChannel;
use crate::error::{Error, Result};
use crate::types::ConfigCommand;
use regex::Regex;
use std::process::Command;
use std::sync::LazyLock;

/// Default program and arguments used to run a CLI line.
pub const DEFAULT_EXEC: &[&str] = &["vsh", "-c"];

/// Characters that would split or redirect a CLI line.
static CLI_META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;|\r\n]").expect("Invalid regex pattern"));

/// Source and apply channel backed by a local command runner.
#[derive(Debug, Clone)]
pub struct ShellSource {
    program: String,
    args: Vec<String>,
}

impl ShellSource {
    /// Create a source from an argv prefix such as `["vsh", "-c"]`.
    pub fn new<S: AsRef<str>>(exec: &[S]) -> Result<Self> {
        let (program, args) = exec
            .split_first()
            .ok_or_else(|| Error::Other("empty device exec command".to_string()))?;
        Ok(Self {
            program: program.as_ref().to_string(),
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        })
    }

    /// Run one CLI line and return its stdout.
    fn run_cli(&self, line: &str) -> std::result::Result<String, String> {
        log::debug!("exec: {} {} {:?}", self.program, self.args.join(" "), line);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(line)
            .output()
            .map_err(|e| format!("failed to execute {}: {e}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(stderr.trim().to_string());
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for ShellSource {
    fn default() -> Self {
        Self {
            program: DEFAULT_EXEC[0].to_string(),
            args: DEFAULT_EXEC[1..].iter().map(ToString::to_string).collect(),
        }
    }
}

impl CommandSource for ShellSource {
    fn run(&self, command: &str) -> Result<Vec<Record>> {
        let body = self
            .run_cli(&format!("{command} | json"))
            .map_err(|message| Error::source_unavailable(command, message))?;
        nxos::decode(command, &body)
    }
}

impl ApplyChannel for ShellSource {
    fn execute(&mut self, command: &ConfigCommand) -> Result<()> {
        let line = config_line(command)?;
        let output = self.run_cli(&line).map_err(|message| Error::ApplyFailure {
            command: command.to_string(),
            message,
        })?;

        // NX-OS reports CLI errors on stdout with a leading '%'.
        if let Some(error) = output.lines().find(|l| l.trim_start().starts_with('%')) {
            return Err(Error::ApplyFailure {
                command: command.to_string(),
                message: error.trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Build the single CLI line that applies `command` in config mode.
///
/// Rejects descriptions carrying separators, since the text comes from
/// neighbor advertisements and would otherwise inject extra commands.
pub fn config_line(command: &ConfigCommand) -> Result<String> {
    if CLI_META_RE.is_match(&command.description) || CLI_META_RE.is_match(&command.short_name) {
        return Err(Error::ApplyFailure {
            command: command.to_string(),
            message: "refusing to send text containing ';', '|' or a line break".to_string(),
        });
    }
    let [select, describe] = command.lines();
    Ok(format!("configure terminal ; {select} ; {describe}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(description: &str) -> ConfigCommand {
        ConfigCommand {
            interface: "Ethernet1/1".into(),
            short_name: "Eth1/1".into(),
            description: description.into(),
        }
    }

    #[test]
    fn test_config_line() {
        let line = config_line(&command("core1:Eth2/1")).unwrap();
        assert_eq!(
            line,
            "configure terminal ; interface Eth1/1 ; description core1:Eth2/1"
        );
    }

    #[test]
    fn test_config_line_rejects_injection() {
        for text in ["evil ; reload", "a | b", "two\nlines"] {
            let err = config_line(&command(text)).unwrap_err();
            assert!(matches!(err, Error::ApplyFailure { .. }), "accepted {text:?}");
        }
    }

    #[test]
    fn test_new_requires_program() {
        let empty: [&str; 0] = [];
        assert!(ShellSource::new(&empty).is_err());

        let source = ShellSource::new(&["ssh", "admin@leaf1"]).unwrap();
        assert_eq!(source.program, "ssh");
        assert_eq!(source.args, vec!["admin@leaf1".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_decodes_program_output() {
        // `echo` stands in for the device shell and prints the CLI line back.
        let source = ShellSource::new(&["sh", "-c", r#"echo '{"chassis_id": "'"$0"'"}'"#]).unwrap();
        let rows = source.run("show version").unwrap();
        assert_eq!(rows[0].field("chassis_id"), Some("show version | json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failure_is_source_unavailable() {
        let source = ShellSource::new(&["sh", "-c", "echo boom >&2; exit 1"]).unwrap();
        let err = source.run("show cdp neighbors").unwrap_err();
        assert!(matches!(
            err,
            Error::SourceUnavailable { ref message, .. } if message == "boom"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_reports_cli_error() {
        let mut channel =
            ShellSource::new(&["sh", "-c", "echo '% Invalid interface format'"]).unwrap();
        let err = channel.execute(&command("core1:Eth2/1")).unwrap_err();
        assert!(matches!(
            err,
            Error::ApplyFailure { ref message, .. } if message == "% Invalid interface format"
        ));
    }
}
