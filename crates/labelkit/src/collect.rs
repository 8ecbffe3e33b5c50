//! Fact collectors.
//!
//! Each collector reads one operational table through a [`CommandSource`]
//! and builds a fresh fact table. A collector either returns its complete
//! table or an error; partial tables never escape.

use crate::error::Result;
use crate::source::{CommandSource, PlatformCapability, commands};
use crate::types::{
    FexFact, FexTable, InterfaceId, NeighborFact, NeighborTable, PortChannelFact,
    PortChannelTable,
};
use serde::Serialize;

/// Collect CDP neighbors keyed by local interface.
///
/// If a port reports several neighbors the last one seen wins.
pub fn collect_neighbors<S: CommandSource + ?Sized>(source: &S) -> Result<NeighborTable> {
    let command = commands::CDP_NEIGHBORS;
    let mut table = NeighborTable::new();

    for row in source.run(command)? {
        let fact = NeighborFact::new(
            row.require(command, "intf_id")?,
            row.require(command, "device_id")?,
            row.require(command, "port_id")?,
        );
        if let Some(previous) = table.insert(fact.local.clone(), fact) {
            log::debug!(
                "{} has more than one neighbor, dropping {}",
                previous.local,
                previous.remote_name
            );
        }
    }

    log::debug!("collected {} neighbors", table.len());
    Ok(table)
}

/// Collect port-channel membership keyed by channel.
pub fn collect_port_channels<S: CommandSource + ?Sized>(source: &S) -> Result<PortChannelTable> {
    let command = commands::PORT_CHANNEL_SUMMARY;
    let mut table = PortChannelTable::new();

    for row in source.run(command)? {
        let channel = InterfaceId::from(row.require(command, "port-channel")?);
        let fact = table
            .entry(channel.clone())
            .or_insert_with(|| PortChannelFact::new(channel));
        for member in row.children("member") {
            fact.members.push(member.require(command, "port")?.into());
        }
    }

    log::debug!("collected {} port-channels", table.len());
    Ok(table)
}

/// Collect fabric extenders keyed by FEX id.
///
/// Returns an empty table without touching the source when the platform
/// has no FEX support.
pub fn collect_fex<S, P>(source: &S, platform: &P) -> Result<FexTable>
where
    S: CommandSource + ?Sized,
    P: PlatformCapability + ?Sized,
{
    let mut table = FexTable::new();
    if !platform.supports_fex() {
        log::info!("FEX not enabled on this platform, skipping");
        return Ok(table);
    }

    let command = commands::FEX_DETAIL;
    for row in source.run(command)? {
        let fex_id = row.require(command, "chas_id")?.to_string();
        let fact = table
            .entry(fex_id.clone())
            .or_insert_with(|| FexFact::new(fex_id));
        for port in row.children("fbr_state") {
            fact.member_ports
                .insert(port.require(command, "fbr_index")?.into());
        }
    }

    log::debug!("collected {} fabric extenders", table.len());
    Ok(table)
}

/// All three fact tables for one device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facts {
    pub neighbors: NeighborTable,
    pub port_channels: PortChannelTable,
    pub fex: FexTable,
}

impl Facts {
    /// Collect every table, failing on the first source that errors.
    pub fn collect<S, P>(source: &S, platform: &P) -> Result<Self>
    where
        S: CommandSource + ?Sized,
        P: PlatformCapability + ?Sized,
    {
        Ok(Self {
            neighbors: collect_neighbors(source)?,
            port_channels: collect_port_channels(source)?,
            fex: collect_fex(source, platform)?,
        })
    }
}
