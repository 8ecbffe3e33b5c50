//! `intflabel apply` - confirm, then write descriptions

use anyhow::Result;
use colored::Colorize;
use labelkit::{ApplyOutcome, ApplyReport, AutoConfirm, ConfirmCallback, SAVE_REMINDER};

use crate::Context;
use crate::cli::ApplyArgs;
use crate::commands::plan;
use crate::device::Device;
use crate::progress::ApplyBar;
use crate::ui;

pub fn run(ctx: &Context, args: ApplyArgs) -> Result<()> {
    let (mut device, plan) = plan::build(ctx, &args.device)?;
    if ctx.verbose > 0 {
        plan::show_descriptions(&plan);
    }
    plan::show_commands(&plan);

    if plan.is_empty() {
        println!();
        ui::success("No interfaces to describe");
        return Ok(());
    }

    if args.dry_run {
        println!();
        ui::info("Dry run - no changes made");
        return Ok(());
    }

    let mut confirm: Box<dyn ConfirmCallback> = if args.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(TerminalConfirm)
    };
    let mut progress = ApplyBar::new(ctx.quiet);

    println!();
    let outcome = labelkit::apply(&plan.commands, &mut device, confirm.as_mut(), &mut progress)?;

    match outcome {
        ApplyOutcome::NothingToApply => ui::success("No interfaces to describe"),
        ApplyOutcome::Declined => ui::error("Skipped writing to the configuration"),
        ApplyOutcome::Applied(report) => {
            print_summary(&report, &device);
            if !report.is_success() {
                anyhow::bail!("{} of {} commands failed", report.failed(), report.results.len());
            }
        }
    }

    Ok(())
}

/// Confirmation through the terminal; anything but an explicit yes declines
struct TerminalConfirm;

impl ConfirmCallback for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> labelkit::Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| labelkit::Error::Other(format!("confirmation failed: {e}")))
    }
}

fn print_summary(report: &ApplyReport, device: &Device) {
    println!();
    if report.is_success() {
        println!(
            "  {} {} descriptions applied",
            "✓".green().bold(),
            report.applied()
        );
    } else {
        println!(
            "  {} Descriptions applied with errors",
            "⚠".yellow().bold()
        );
        println!("    • {} applied", report.applied());
        println!("    • {} {}", report.failed(), "failed".red());
        for (command, error) in report.failures() {
            ui::dim(&format!("{command}: {error}"));
        }
    }

    if device.is_fixture() {
        ui::dim("Fixture mode: commands were recorded, no device was changed");
    }

    println!();
    ui::warn(SAVE_REMINDER);
}
