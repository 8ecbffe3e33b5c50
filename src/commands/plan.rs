//! `intflabel plan` - preview descriptions and commands

use anyhow::{Context as AnyhowContext, Result};
use labelkit::Plan;

use crate::Context;
use crate::cli::{DeviceArgs, PlanArgs};
use crate::device::Device;
use crate::ui;

pub fn run(ctx: &Context, args: PlanArgs) -> Result<()> {
    let (_device, plan) = build(ctx, &args.device)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    show_descriptions(&plan);
    show_commands(&plan);
    Ok(())
}

/// Open the device and build a plan from it
pub fn build(ctx: &Context, args: &DeviceArgs) -> Result<(Device, Plan)> {
    let device = Device::open(&ctx.config, args)?;
    log::info!("Collecting topology from {}", device.describe());

    let platform = device.capability(&ctx.config, args);
    let plan = Plan::build(&device, &platform).context("Failed to collect topology facts")?;
    log::debug!(
        "{} neighbors, {} port-channels, {} FEX -> {} descriptions",
        plan.facts.neighbors.len(),
        plan.facts.port_channels.len(),
        plan.facts.fex.len(),
        plan.descriptions.len()
    );

    Ok((device, plan))
}

/// Print the merged description map
pub fn show_descriptions(plan: &Plan) {
    ui::header("Interface Descriptions");
    let rows: Vec<Vec<String>> = plan
        .descriptions
        .iter()
        .map(|(interface, description)| {
            vec![
                interface.to_string(),
                interface.short(),
                description.render(),
            ]
        })
        .collect();
    ui::table(&["Interface", "Short", "Description"], &rows);
}

/// Print the commands that apply would run
pub fn show_commands(plan: &Plan) {
    ui::section("This will add the following commands to the configuration:");
    if plan.is_empty() {
        ui::dim("(none)");
        return;
    }
    for command in &plan.commands {
        println!("  configure terminal ; {command}");
    }
}
