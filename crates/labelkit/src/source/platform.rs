//! Platform detection for the FEX fact source.
//!
//! Fabric extenders are only queried when the device says the feature is
//! on. Nexus 7000 reports it through `show feature-set`, Nexus 5000 through
//! `show feature`; any other chassis is treated as having no FEX.

use super::{CommandSource, PlatformCapability, Record, commands};
use crate::error::{Error, Result};

const FEX_FEATURE: &str = "fex";

/// Switch family, as far as FEX detection cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Nexus7000,
    Nexus5000,
    Other(String),
}

impl Platform {
    /// Classify a chassis description from `show version`.
    pub fn from_chassis(chassis: &str) -> Self {
        if chassis.contains("Nexus7") || chassis.contains("Nexus 7") {
            Self::Nexus7000
        } else if chassis.contains("Nexus5") || chassis.contains("Nexus 5") {
            Self::Nexus5000
        } else {
            Self::Other(chassis.trim().to_string())
        }
    }

    /// Command that lists the state of the FEX feature, plus the columns
    /// holding the feature name and its status.
    fn feature_query(&self) -> Result<(&'static str, &'static str, &'static str)> {
        match self {
            Self::Nexus7000 => Ok((commands::FEATURE_SET, "fs_name", "fs_status")),
            Self::Nexus5000 => Ok((
                commands::FEATURE,
                "cfcFeatureCtrlName2",
                "cfcFeatureCtrlOpStatus2",
            )),
            Self::Other(chassis) => Err(Error::UnsupportedPlatform {
                platform: chassis.clone(),
            }),
        }
    }
}

/// Fixed capability answer, from configuration or tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPlatform {
    pub fex: bool,
}

impl PlatformCapability for StaticPlatform {
    fn supports_fex(&self) -> bool {
        self.fex
    }
}

/// Capability probed from the device itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedPlatform {
    pub platform: Platform,
    pub fex_enabled: bool,
}

impl DetectedPlatform {
    /// Probe the device.
    ///
    /// Fails only if `show version` or the feature query cannot be run. An
    /// unrecognized chassis is not an error; it just has no FEX.
    pub fn detect<S: CommandSource + ?Sized>(source: &S) -> Result<Self> {
        let version = source.run(commands::VERSION)?;
        let chassis = version
            .first()
            .ok_or_else(|| Error::source_unavailable(commands::VERSION, "no output"))?
            .require(commands::VERSION, "chassis_id")?;
        let platform = Platform::from_chassis(chassis);

        let fex_enabled = match platform.feature_query() {
            Ok((command, name_col, status_col)) => {
                let rows = source.run(command)?;
                feature_enabled(&rows, name_col, status_col)
            }
            Err(e) if e.category().is_degradable() => {
                log::info!("FEX detection skipped: {e}");
                false
            }
            Err(e) => return Err(e),
        };

        log::info!("detected {platform:?}, fex enabled: {fex_enabled}");
        Ok(Self {
            platform,
            fex_enabled,
        })
    }

    /// Probe the device, treating any failure as "no FEX".
    pub fn detect_or_disabled<S: CommandSource + ?Sized>(source: &S) -> Self {
        match Self::detect(source) {
            Ok(detected) => detected,
            Err(e) => {
                log::warn!("platform detection failed, skipping FEX: {e}");
                Self {
                    platform: Platform::Other("unknown".to_string()),
                    fex_enabled: false,
                }
            }
        }
    }
}

impl PlatformCapability for DetectedPlatform {
    fn supports_fex(&self) -> bool {
        self.fex_enabled
    }
}

fn feature_enabled(rows: &[Record], name_col: &str, status_col: &str) -> bool {
    rows.iter()
        .filter(|row| row.field(name_col) == Some(FEX_FEATURE))
        .any(|row| {
            row.field(status_col)
                .is_some_and(|status| status.contains("enable"))
        })
}
