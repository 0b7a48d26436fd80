use std::io::Write as _;

use crate::args;
use crate::error::Result;

/// Print one install command for a documentation version
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct SnippetArgs {
    #[arg(value_enum)]
    pub(crate) kind: Kind,

    /// Path of the page being viewed [default: the canonical version]
    #[arg(long, value_name = "PATH")]
    pub(crate) request_path: Option<String>,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Kind {
    /// Helm chart install
    PackageManager,
    /// Raw manifest apply
    DirectApply,
}

impl From<Kind> for docsite_core::SnippetKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::PackageManager => Self::PackageManager,
            Kind::DirectApply => Self::DirectApply,
        }
    }
}

impl SnippetArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.load_site()?;
        let line = docsite::snippet(&site, self.request_path.as_deref(), self.kind.into())?;
        writeln!(anstream::stdout(), "{line}")?;
        Ok(())
    }
}
