//! Device selection - live shell or captured fixtures

use anyhow::{Context as AnyhowContext, Result};
use labelkit::source::fixture::FixtureSource;
use labelkit::source::platform::{DetectedPlatform, StaticPlatform};
use labelkit::source::shell::ShellSource;
use labelkit::{ApplyChannel, CommandSource, ConfigCommand, PlatformCapability, Record};

use crate::cli::{DeviceArgs, FexArg};
use crate::config::{Config, FexSupport};

/// Where facts come from and where commands go
pub enum Device {
    Live(ShellSource),
    Fixture(FixtureSource),
}

impl Device {
    /// Open the device selected by flags, falling back to the config file.
    pub fn open(config: &Config, args: &DeviceArgs) -> Result<Self> {
        let fixtures = args
            .fixtures
            .clone()
            .or_else(|| config.device.fixtures_path());

        match fixtures {
            Some(dir) => {
                log::info!("Using captured output from {}", dir.display());
                let source = FixtureSource::new(&dir)
                    .with_context(|| format!("Cannot use fixtures at {}", dir.display()))?;
                Ok(Self::Fixture(source))
            }
            None => {
                let source = ShellSource::new(config.device.exec.as_slice())
                    .context("Invalid device.exec in config")?;
                Ok(Self::Live(source))
            }
        }
    }

    pub fn is_fixture(&self) -> bool {
        matches!(self, Self::Fixture(_))
    }

    /// Short description for status output
    pub fn describe(&self) -> String {
        match self {
            Self::Live(_) => "live device".to_string(),
            Self::Fixture(source) => format!("fixtures in {}", source.dir().display()),
        }
    }

    /// Resolve FEX support: flag, then config, then detection.
    pub fn capability(&self, config: &Config, args: &DeviceArgs) -> Box<dyn PlatformCapability> {
        let support = match args.fex {
            Some(FexArg::Auto) => FexSupport::Auto,
            Some(FexArg::Enabled) => FexSupport::Enabled,
            Some(FexArg::Disabled) => FexSupport::Disabled,
            None => config.fex.support,
        };

        match support {
            FexSupport::Enabled => Box::new(StaticPlatform { fex: true }),
            FexSupport::Disabled => Box::new(StaticPlatform { fex: false }),
            FexSupport::Auto => Box::new(DetectedPlatform::detect_or_disabled(self)),
        }
    }
}

impl CommandSource for Device {
    fn run(&self, command: &str) -> labelkit::Result<Vec<Record>> {
        match self {
            Self::Live(source) => source.run(command),
            Self::Fixture(source) => source.run(command),
        }
    }
}

impl ApplyChannel for Device {
    fn execute(&mut self, command: &ConfigCommand) -> labelkit::Result<()> {
        match self {
            Self::Live(channel) => channel.execute(command),
            Self::Fixture(channel) => channel.execute(command),
        }
    }
}
