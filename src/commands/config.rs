use anyhow::Result;

use crate::Context;
use crate::cli::ConfigCommand;
use crate::paths;
use crate::ui;

pub fn run(ctx: &Context, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Path => {
            println!("{}", paths::config_file()?.display());
            Ok(())
        }
    }
}

fn show(ctx: &Context) -> Result<()> {
    ui::header("Configuration");

    let file = paths::config_file()?;
    ui::kv("Config file", &file.display().to_string());
    if !file.exists() {
        ui::dim("Not found - using defaults");
    }

    ui::section("Effective settings");
    for line in ctx.config.to_toml()?.lines() {
        println!("  {line}");
    }

    println!();
    ui::dim(&format!(
        "Set {} to use a different config directory.",
        paths::ENV_CONFIG_DIR
    ));
    Ok(())
}
