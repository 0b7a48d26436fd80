use std::fs;
use std::path;

use anyhow::Context as _;
use docsite_config::SiteConfig;
use docsite_core::InstallSnippets;
use docsite_core::SnippetKind;
use docsite_core::VersionCatalog;

use crate::error::Result;
use crate::page;
use crate::template::LiquidBuilder;

pub const HOME_FILE: &str = "index.html";
pub const VERSIONS_FILE: &str = "versions.json";

/// Entry of the version switcher manifest.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VersionEntry {
    pub label: String,
    pub path: String,
    pub href: String,
    pub canonical: bool,
}

pub fn version_manifest(site: &SiteConfig) -> Vec<VersionEntry> {
    let catalog = VersionCatalog::new(site);
    let canonical = catalog.canonical();
    catalog
        .versions()
        .iter()
        .map(|v| VersionEntry {
            label: v.label.to_string(),
            path: v.path.to_string(),
            href: catalog.href(v),
            canonical: v == canonical,
        })
        .collect()
}

/// Write the landing page and version manifest into `site.destination`.
pub fn build(site: &SiteConfig, year: i32) -> Result<()> {
    log::debug!("Building into `{}`", site.destination.display());

    let catalog = VersionCatalog::new(site);
    let version = catalog.resolve(&site.base_url);
    let snippets = InstallSnippets::from_site(site)?;
    let liquid = LiquidBuilder::new().build()?;

    let ctx = page::RenderContext {
        site,
        version,
        year,
    };
    let home = page::compose_home(ctx, &snippets, &liquid)?;
    let html = page::render_home(&home, &liquid)?;
    write_file(&site.destination.join(HOME_FILE), &html)?;

    let manifest = serde_json::to_string_pretty(&version_manifest(site))?;
    write_file(&site.destination.join(VERSIONS_FILE), &manifest)?;

    log::info!(
        "Built {} for {} version(s)",
        site.destination.display(),
        site.versions.len()
    );
    Ok(())
}

/// Render one install snippet for the version `request_path` resolves to.
pub fn snippet(site: &SiteConfig, request_path: Option<&str>, kind: SnippetKind) -> Result<String> {
    let catalog = VersionCatalog::new(site);
    let ctx = match request_path {
        Some(request_path) => catalog.resolve(request_path),
        None => docsite_core::resolve_version(&site.versions, None),
    };
    let snippets = InstallSnippets::from_site(site)?;
    let text = snippets.render(kind, site, &ctx)?;
    Ok(text)
}

fn write_file(path: &path::Path, content: &str) -> Result<()> {
    log::trace!("Writing {}", path.display());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| anyhow::format_err!("Could not create {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| anyhow::format_err!("Could not write {}", path.display()))?;
    Ok(())
}
