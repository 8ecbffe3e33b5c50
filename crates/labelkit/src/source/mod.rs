//! Fact sources.
//!
//! The [`CommandSource`] trait is the boundary between the device and the
//! topology engine: it runs an operational command and hands back
//! already-structured [`Record`]s. Whatever shape quirks the device output
//! has are flattened here, so collectors only read named fields.
//!
//! Implementations:
//! - [`shell::ShellSource`] runs commands on the live device
//! - [`fixture::FixtureSource`] replays captured output from a directory

pub mod fixture;
pub mod nxos;
pub mod platform;
pub mod shell;

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Operational commands the engine knows how to consume.
pub mod commands {
    /// CDP neighbor table
    pub const CDP_NEIGHBORS: &str = "show cdp neighbors";
    /// Port-channel membership
    pub const PORT_CHANNEL_SUMMARY: &str = "show port-channel summary";
    /// Fabric extender detail, including fabric ports
    pub const FEX_DETAIL: &str = "show fex detail";
    /// Platform identity
    pub const VERSION: &str = "show version";
    /// Feature state (Nexus 5000)
    pub const FEATURE: &str = "show feature";
    /// Feature-set state (Nexus 7000)
    pub const FEATURE_SET: &str = "show feature-set";

    /// Whether `command` reports a table rather than one flat object.
    pub fn is_table(command: &str) -> bool {
        command.trim() != VERSION
    }
}

/// One row of structured command output.
///
/// Scalar columns live in `fields`; nested tables (for example the members
/// of a port-channel row) live in `children`, keyed by table name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    fields: BTreeMap<String, String>,
    children: BTreeMap<String, Vec<Record>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Builder-style nested table setter.
    pub fn with_children(mut self, table: impl Into<String>, rows: Vec<Record>) -> Self {
        self.set_children(table, rows);
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn set_children(&mut self, table: impl Into<String>, rows: Vec<Record>) {
        self.children.insert(table.into(), rows);
    }

    /// Get a scalar field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Get a scalar field, failing with [`Error::MalformedRecord`] if absent.
    pub fn require(&self, command: &str, name: &str) -> Result<&str> {
        self.field(name).ok_or_else(|| Error::malformed(command, name))
    }

    /// Rows of a nested table; empty if the table is absent.
    pub fn children(&self, table: &str) -> &[Record] {
        self.children.get(table).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Source of structured operational data.
pub trait CommandSource {
    /// Run an operational command and return its rows.
    ///
    /// A command whose output is an empty table returns an empty vector,
    /// not an error.
    fn run(&self, command: &str) -> Result<Vec<Record>>;
}

impl<T: CommandSource + ?Sized> CommandSource for &T {
    fn run(&self, command: &str) -> Result<Vec<Record>> {
        (**self).run(command)
    }
}

impl<T: CommandSource + ?Sized> CommandSource for Box<T> {
    fn run(&self, command: &str) -> Result<Vec<Record>> {
        (**self).run(command)
    }
}

/// Platform feature probe.
pub trait PlatformCapability {
    /// Whether the device has fabric extenders enabled.
    fn supports_fex(&self) -> bool;
}

impl<T: PlatformCapability + ?Sized> PlatformCapability for &T {
    fn supports_fex(&self) -> bool {
        (**self).supports_fex()
    }
}

impl<T: PlatformCapability + ?Sized> PlatformCapability for Box<T> {
    fn supports_fex(&self) -> bool {
        (**self).supports_fex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let row = Record::new()
            .with_field("port-channel", "port-channel1")
            .with_children(
                "member",
                vec![Record::new().with_field("port", "Ethernet1/1")],
            );

        assert_eq!(row.field("port-channel"), Some("port-channel1"));
        assert_eq!(row.field("group"), None);
        assert_eq!(row.children("member").len(), 1);
        assert!(row.children("missing").is_empty());
    }

    #[test]
    fn test_require_reports_missing_field() {
        let row = Record::new();
        let err = row.require(commands::CDP_NEIGHBORS, "intf_id").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { ref field, .. } if field == "intf_id"));
    }
}
