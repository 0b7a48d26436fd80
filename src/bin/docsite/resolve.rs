use std::io::Write as _;

use crate::args;
use crate::error::Result;

/// Print the documentation version a request path belongs to
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ResolveArgs {
    /// Site-absolute request path, e.g. `/llm-operator/docs/1.2.0/quickstart`
    #[arg(value_name = "REQUEST_PATH")]
    pub(crate) request_path: String,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl ResolveArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.load_site()?;
        let catalog = docsite_core::VersionCatalog::new(&site);
        let version = catalog.resolve(&self.request_path);
        if version.is_fallback() {
            log::info!(
                "`{}` names no declared version, using `{}`",
                self.request_path,
                version.path()
            );
        }
        writeln!(anstream::stdout(), "{}\t{}", version.label(), version.path())?;
        Ok(())
    }
}
