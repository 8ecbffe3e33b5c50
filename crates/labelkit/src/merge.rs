//! Topology merge - folds the three fact tables into one description map.
//!
//! Precedence is expressed purely by write order. Later steps overwrite
//! earlier entries for the same interface:
//!
//! 1. neighbor facts seed the map
//! 2. port-channels inherit the description of their first member
//! 3. FEX fabric ports are labeled `FEX<id>`, overriding everything
//!
//! All inputs are sorted maps, so the result is the same on every run.

use crate::collect::Facts;
use crate::types::{Description, FexTable, InterfaceId, NeighborTable, PortChannelTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// Interface descriptions for one device, sorted by canonical interface.
///
/// Built once by [`merge`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DescriptionMap(BTreeMap<InterfaceId, Description>);

impl DescriptionMap {
    pub fn get(&self, interface: &InterfaceId) -> Option<&Description> {
        self.0.get(interface)
    }

    pub fn contains(&self, interface: &InterfaceId) -> bool {
        self.0.contains_key(interface)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in lexicographic order of the canonical interface name.
    pub fn iter(&self) -> impl Iterator<Item = (&InterfaceId, &Description)> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a DescriptionMap {
    type Item = (&'a InterfaceId, &'a Description);
    type IntoIter = std::collections::btree_map::Iter<'a, InterfaceId, Description>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Merge fact tables into a description map.
///
/// The inputs are only read; the map is built from copies.
pub fn merge(
    neighbors: &NeighborTable,
    port_channels: &PortChannelTable,
    fex: &FexTable,
) -> DescriptionMap {
    let mut map: BTreeMap<InterfaceId, Description> = neighbors
        .iter()
        .map(|(local, fact)| {
            (
                local.clone(),
                Description::new(fact.remote_name.clone(), Some(fact.remote_port.clone())),
            )
        })
        .collect();

    for (channel, fact) in port_channels {
        let Some(first) = fact.representative() else {
            log::debug!("{channel} has no members, not described");
            continue;
        };
        let Some(member) = map.get(first) else {
            log::debug!("{channel}: first member {first} has no description");
            continue;
        };
        let inherited = Description::new(member.render(), None);
        map.insert(channel.clone(), inherited);
    }

    for fact in fex.values() {
        let label = fact.label();
        for port in &fact.member_ports {
            if let Some(previous) = map.insert(port.clone(), Description::new(label.clone(), None))
            {
                log::debug!("{port}: {label} replaces '{}'", previous.render());
            }
        }
    }

    DescriptionMap(map)
}

/// Merge a collected [`Facts`] bundle.
pub fn merge_facts(facts: &Facts) -> DescriptionMap {
    merge(&facts.neighbors, &facts.port_channels, &facts.fex)
}
