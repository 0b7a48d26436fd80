use std::path;

use crate::args;
use crate::error::Result;

/// Render the home page and version manifest
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct BuildArgs {
    /// Destination folder [default: ./build]
    #[arg(short, long, value_name = "DIR")]
    pub(crate) destination: Option<path::PathBuf>,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl BuildArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let mut site = self.config.load_site()?;
        if let Some(destination) = self.destination.as_deref() {
            site.destination = destination.to_owned();
        }

        let year = time::OffsetDateTime::now_utc().year();
        docsite::build(&site, year)?;
        log::info!("Build successful");

        Ok(())
    }
}
