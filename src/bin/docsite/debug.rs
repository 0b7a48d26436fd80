use std::io::Write as _;

use itertools::Itertools as _;

use crate::args;
use crate::error::Result;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the resolved config
    Config {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Lists the deployment profiles
    Profiles {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the home page feature grid
    Features {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        let mut stdout = anstream::stdout();
        match self {
            Self::Config { config } => {
                let site = config.load_site()?;
                writeln!(stdout, "{site}")?;
            }
            Self::Profiles { config } => {
                let config = config.load_config()?;
                for name in config.profile_names().sorted() {
                    writeln!(stdout, "{name}")?;
                }
            }
            Self::Features { config } => {
                let site = config.load_site()?;
                let blocks = docsite_core::compose_features(docsite_core::FEATURES, &site.base_url);
                writeln!(stdout, "{}", serde_json::to_string_pretty(&blocks)?)?;
            }
        }

        Ok(())
    }
}
