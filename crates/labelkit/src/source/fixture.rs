//! Offline source that replays captured command output.
//!
//! Each command maps to a file in the fixture directory named after the
//! command with spaces turned into underscores, e.g.
//! `show_cdp_neighbors.json`. The file holds the NX-OS `| json` output.

use super::{CommandSource, Record, nxos};
use crate::apply::ApplyChannel;
use crate::error::{Error, Result};
use crate::types::ConfigCommand;
use std::fs;
use std::path::{Path, PathBuf};

/// Source reading captured output from a directory.
///
/// Applied commands are recorded instead of being sent anywhere.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    dir: PathBuf,
    applied: Vec<ConfigCommand>,
}

impl FixtureSource {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(Error::Other(format!(
                "fixture directory not found: {}",
                dir.display()
            )));
        }
        Ok(Self {
            dir,
            applied: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the capture file for `command`.
    pub fn capture_path(&self, command: &str) -> PathBuf {
        self.dir.join(capture_file_name(command))
    }

    /// Commands received through [`ApplyChannel::execute`], in order.
    pub fn applied(&self) -> &[ConfigCommand] {
        &self.applied
    }
}

/// File name a command's output is captured under.
pub fn capture_file_name(command: &str) -> String {
    format!("{}.json", command.trim().replace(' ', "_"))
}

impl CommandSource for FixtureSource {
    fn run(&self, command: &str) -> Result<Vec<Record>> {
        let path = self.capture_path(command);
        let body = fs::read_to_string(&path).map_err(|e| {
            Error::source_unavailable(command, format!("cannot read {}: {e}", path.display()))
        })?;
        nxos::decode(command, &body)
    }
}

impl ApplyChannel for FixtureSource {
    fn execute(&mut self, command: &ConfigCommand) -> Result<()> {
        log::debug!("fixture apply: {command}");
        self.applied.push(command.clone());
        Ok(())
    }
}
