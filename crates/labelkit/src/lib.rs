//! # labelkit
//!
//! Interface description synthesis for network switches.
//!
//! This crate turns one switch's local view of its topology into interface
//! descriptions:
//! - Collecting CDP neighbors, port-channel membership and FEX fabric ports
//! - Merging them into one description per interface with fixed precedence
//! - Rendering the descriptions as sorted, previewable configuration commands
//! - Applying the commands after explicit operator confirmation
//!
//! ## Example
//!
//! ```no_run
//! use labelkit::source::fixture::FixtureSource;
//! use labelkit::source::platform::StaticPlatform;
//! use labelkit::{AutoConfirm, NoProgress, Plan};
//!
//! let mut device = FixtureSource::new("captures/leaf1").expect("fixtures");
//! let plan = Plan::build(&device, &StaticPlatform { fex: false }).expect("collect failed");
//!
//! for command in &plan.commands {
//!     println!("{command}");
//! }
//!
//! labelkit::apply(&plan.commands, &mut device, &mut AutoConfirm, &mut NoProgress)
//!     .expect("apply failed");
//! ```
//!
//! ## Precedence
//!
//! Neighbor facts seed the map, port-channels inherit the description of
//! their first member, and FEX fabric ports are labeled `FEX<id>` last, so
//! FEX membership wins over anything CDP reports for the same port.

#![warn(clippy::all)]

pub mod apply;
pub mod collect;
pub mod error;
pub mod merge;
pub mod names;
pub mod source;
pub mod synth;
pub mod types;

pub use apply::{
    ApplyChannel, ApplyOutcome, ApplyReport, AutoConfirm, AutoDecline, CommandStatus,
    ConfirmCallback, NoProgress, ProgressCallback, SAVE_REMINDER, apply, apply_confirmed,
};
pub use collect::{Facts, collect_fex, collect_neighbors, collect_port_channels};
pub use error::{Error, ErrorCategory, Result};
pub use merge::{DescriptionMap, merge, merge_facts};
pub use names::shorten;
pub use source::{CommandSource, PlatformCapability, Record};
pub use synth::synthesize;
pub use types::{
    ConfigCommand, Description, FexFact, FexTable, InterfaceId, NeighborFact, NeighborTable,
    PortChannelFact, PortChannelTable,
};

use serde::Serialize;

/// Everything one run produces before anything is applied.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// Collected fact tables
    pub facts: Facts,
    /// Merged descriptions
    pub descriptions: DescriptionMap,
    /// Commands in apply order
    pub commands: Vec<ConfigCommand>,
}

impl Plan {
    /// Collect facts from `source`, merge and synthesize.
    ///
    /// Fails if any required fact source fails; no partial plan is built.
    pub fn build<S, P>(source: &S, platform: &P) -> Result<Self>
    where
        S: CommandSource + ?Sized,
        P: PlatformCapability + ?Sized,
    {
        let facts = Facts::collect(source, platform)?;
        Ok(Self::from_facts(facts))
    }

    /// Merge and synthesize already-collected facts.
    pub fn from_facts(facts: Facts) -> Self {
        let descriptions = merge_facts(&facts);
        let commands = synthesize(&descriptions);
        Self {
            facts,
            descriptions,
            commands,
        }
    }

    /// Check if there is nothing to apply
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
