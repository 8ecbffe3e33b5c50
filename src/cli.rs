use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "intflabel")]
#[command(version)]
#[command(
    about = "Describe switch interfaces from CDP, port-channel and FEX topology",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview the descriptions and commands without changing anything
    Plan(PlanArgs),

    /// Show commands, ask for confirmation, then apply them
    Apply(ApplyArgs),

    /// Show the collected neighbor, port-channel and FEX tables
    Facts(FactsArgs),

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Device selection (shared by plan/apply/facts)
// ============================================================================

#[derive(Args, Clone, Default)]
pub struct DeviceArgs {
    /// Read captured command output from this directory instead of the device
    #[arg(long, env = "INTFLABEL_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    /// Override FEX detection
    #[arg(long, value_enum)]
    pub fex: Option<FexArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FexArg {
    Auto,
    Enabled,
    Disabled,
}

// ============================================================================
// Plan / Apply / Facts
// ============================================================================

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would be applied, then stop
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct FactsArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Print the facts as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// Config Commands
// ============================================================================

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,
}
