//! `intflabel facts` - show collected fact tables

use anyhow::{Context as AnyhowContext, Result};
use labelkit::Facts;

use crate::Context;
use crate::cli::FactsArgs;
use crate::device::Device;
use crate::ui;

pub fn run(ctx: &Context, args: FactsArgs) -> Result<()> {
    let device = Device::open(&ctx.config, &args.device)?;
    let platform = device.capability(&ctx.config, &args.device);
    let facts = Facts::collect(&device, &platform).context("Failed to collect topology facts")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&facts)?);
        return Ok(());
    }

    ui::header(&format!("Topology Facts ({})", device.describe()));
    ui::kv("FEX collection", if platform.supports_fex() { "on" } else { "off" });

    ui::section("CDP Neighbors");
    let rows: Vec<Vec<String>> = facts
        .neighbors
        .values()
        .map(|n| {
            vec![
                n.local.to_string(),
                n.remote_name.clone(),
                n.remote_port.to_string(),
            ]
        })
        .collect();
    ui::table(&["Local", "Neighbor", "Remote Port"], &rows);

    ui::section("Port-Channels");
    let rows: Vec<Vec<String>> = facts
        .port_channels
        .values()
        .map(|pc| {
            let members: Vec<_> = pc.members.iter().map(ToString::to_string).collect();
            vec![pc.channel.to_string(), members.join(", ")]
        })
        .collect();
    ui::table(&["Channel", "Members"], &rows);

    ui::section("Fabric Extenders");
    let rows: Vec<Vec<String>> = facts
        .fex
        .values()
        .map(|fex| {
            let ports: Vec<_> = fex.member_ports.iter().map(ToString::to_string).collect();
            vec![fex.fex_id.clone(), ports.join(", ")]
        })
        .collect();
    ui::table(&["FEX", "Fabric Ports"], &rows);

    Ok(())
}
