//! Core types for topology facts and interface descriptions.

use crate::names::shorten;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Identifier of a physical port or logical aggregate.
///
/// Holds the canonical name as reported by the device. The short display
/// form is derived with [`InterfaceId::short`] and never used as identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceId(String);

impl InterfaceId {
    /// Create an identifier from a canonical interface name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The canonical name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The short display form.
    pub fn short(&self) -> String {
        shorten(&self.0)
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InterfaceId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for InterfaceId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A directly connected peer seen on a local interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborFact {
    pub local: InterfaceId,
    /// Peer hostname with serial number and domain suffix removed
    pub remote_name: String,
    pub remote_port: InterfaceId,
}

impl NeighborFact {
    /// Build a fact from a raw device id such as `core1.example.net(FOX1234)`.
    pub fn new(
        local: impl Into<InterfaceId>,
        device_id: &str,
        remote_port: impl Into<InterfaceId>,
    ) -> Self {
        Self {
            local: local.into(),
            remote_name: strip_device_id(device_id).to_string(),
            remote_port: remote_port.into(),
        }
    }
}

/// Drop the serial number (after `(`) and the domain suffix (after `.`).
pub fn strip_device_id(device_id: &str) -> &str {
    let name = device_id.split('(').next().unwrap_or(device_id);
    name.split('.').next().unwrap_or(name)
}

/// A port-channel and its members in discovery order.
///
/// The first member represents the channel when deriving its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortChannelFact {
    pub channel: InterfaceId,
    pub members: Vec<InterfaceId>,
}

impl PortChannelFact {
    pub fn new(channel: impl Into<InterfaceId>) -> Self {
        Self {
            channel: channel.into(),
            members: Vec::new(),
        }
    }

    /// The member whose description the channel inherits.
    pub fn representative(&self) -> Option<&InterfaceId> {
        self.members.first()
    }
}

/// A fabric extender and the parent-switch ports that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FexFact {
    pub fex_id: String,
    pub member_ports: BTreeSet<InterfaceId>,
}

impl FexFact {
    pub fn new(fex_id: impl Into<String>) -> Self {
        Self {
            fex_id: fex_id.into(),
            member_ports: BTreeSet::new(),
        }
    }

    /// Description text written on every member port.
    pub fn label(&self) -> String {
        format!("FEX{}", self.fex_id)
    }
}

/// Neighbor facts keyed by local interface.
pub type NeighborTable = BTreeMap<InterfaceId, NeighborFact>;

/// Port-channel facts keyed by channel interface.
pub type PortChannelTable = BTreeMap<InterfaceId, PortChannelFact>;

/// FEX facts keyed by FEX id.
pub type FexTable = BTreeMap<String, FexFact>;

/// Description text for one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub primary: String,
    pub secondary: Option<InterfaceId>,
}

impl Description {
    pub fn new(primary: impl Into<String>, secondary: Option<InterfaceId>) -> Self {
        Self {
            primary: primary.into(),
            secondary,
        }
    }

    /// Render as `primary` or `primary:<short secondary>`.
    pub fn render(&self) -> String {
        match &self.secondary {
            Some(port) => format!("{}:{}", self.primary, port.short()),
            None => self.primary.clone(),
        }
    }
}

/// A single configuration directive: select an interface, set its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigCommand {
    /// Canonical interface the directive targets
    pub interface: InterfaceId,
    /// Short interface name used in the rendered directive
    pub short_name: String,
    /// Rendered description text
    pub description: String,
}

impl ConfigCommand {
    /// The two configuration lines, in order.
    pub fn lines(&self) -> [String; 2] {
        [
            format!("interface {}", self.short_name),
            format!("description {}", self.description),
        ]
    }
}

impl fmt::Display for ConfigCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [select, describe] = self.lines();
        write!(f, "{select} ; {describe}")
    }
}
