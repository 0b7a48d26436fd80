use std::env;
use std::path;

use crate::error::{Context as _, Result};

#[derive(Clone, Debug, clap::Parser)]
#[command(about, author, version)]
#[command(propagate_version = true)]
#[command(styles = clap_cargo_styles())]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum Command {
    Build(crate::build::BuildArgs),
    Snippet(crate::snippet::SnippetArgs),
    Resolve(crate::resolve::ResolveArgs),
    Check(crate::check::CheckArgs),

    #[command(subcommand)]
    Debug(crate::debug::DebugCommands),
}

impl Command {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Build(cmd) => cmd.run(),
            Self::Snippet(cmd) => cmd.run(),
            Self::Resolve(cmd) => cmd.run(),
            Self::Check(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _site.yml]
    #[arg(short, long, value_name = "FILE", global = true)]
    pub(crate) config: Option<path::PathBuf>,

    /// Deployment profile to layer over the base config
    #[arg(long, value_name = "NAME", global = true)]
    pub(crate) profile: Option<String>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<docsite_config::Config> {
        let config = if let Some(config_path) = self.config.as_deref() {
            docsite_config::Config::from_file(config_path).with_context(|| {
                anyhow::format_err!("Error reading config file {}", config_path.display())
            })?
        } else {
            let cwd = env::current_dir().context("Could not read current directory")?;
            docsite_config::Config::from_cwd(cwd)?
        };
        Ok(config)
    }

    pub(crate) fn load_site(&self) -> Result<docsite_config::SiteConfig> {
        let config = self.load_config()?;
        let site = config.resolve(self.profile.as_deref())?;
        Ok(site)
    }
}

const fn clap_cargo_styles() -> clap::builder::Styles {
    use anstyle::AnsiColor;
    use anstyle::Effects;

    const HEADER: anstyle::Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: anstyle::Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: anstyle::Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: anstyle::Style = AnsiColor::Cyan.on_default();
    const ERROR: anstyle::Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: anstyle::Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: anstyle::Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    clap::builder::styling::Styles::styled()
        .header(HEADER)
        .usage(USAGE)
        .literal(LITERAL)
        .placeholder(PLACEHOLDER)
        .error(ERROR)
        .valid(VALID)
        .invalid(INVALID)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_app() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
