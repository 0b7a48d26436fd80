use std::path;

use docsite_config::OnBrokenLinks;

use crate::args;
use crate::error::{Context as _, Result};

/// Compare the version catalog with the published version roots
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    /// Directory holding one content root per published version
    #[arg(long, value_name = "DIR")]
    pub(crate) published: path::PathBuf,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.load_site()?;
        let published = published_roots(&self.published)?;
        let catalog = docsite_core::VersionCatalog::new(&site);
        let audit = catalog.audit(published.iter().map(|s| s.as_str()));
        if audit.is_clean() {
            log::info!("All {} version(s) are published", site.versions.len());
            return Ok(());
        }

        let mut problems = Vec::new();
        for path in &audit.unpublished {
            problems.push(format!(
                "version `{path}` has no content under {}",
                self.published.display()
            ));
        }
        for path in &audit.undeclared {
            problems.push(format!("`{path}` is published but not in the version catalog"));
        }
        match site.on_broken_links {
            OnBrokenLinks::Ignore => {
                for problem in &problems {
                    log::debug!("{problem}");
                }
            }
            OnBrokenLinks::Warn => {
                for problem in &problems {
                    log::warn!("{problem}");
                }
            }
            OnBrokenLinks::Throw => {
                anyhow::bail!("Broken version links:\n  {}", problems.join("\n  "));
            }
        }

        Ok(())
    }
}

fn published_roots(dir: &path::Path) -> Result<Vec<String>> {
    let mut roots = Vec::new();
    for entry in walkdir::WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| anyhow::format_err!("Could not read {}", dir.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            roots.push(name.to_owned());
        } else {
            log::debug!("Skipping non-UTF8 directory {}", entry.path().display());
        }
    }
    roots.sort();
    Ok(roots)
}
