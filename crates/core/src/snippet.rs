use std::fmt;

use docsite_config::BaseUrl;
use docsite_config::SiteConfig;
use docsite_config::SiteUrl;
use docsite_config::SnippetTemplates;
use docsite_config::VersionPath;

use crate::Result;
use crate::Status;
use crate::VersionContext;

static SNIPPET_PARSER: once_cell::sync::Lazy<liquid::Parser> =
    once_cell::sync::Lazy::new(liquid::Parser::new);

const PROBE_VERSION: &str = "0.0.0";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnippetKind {
    /// Chart install through the package manager, sees `version`.
    PackageManager,
    /// Apply of the published release manifest, sees `version` and `full_url`.
    DirectApply,
}

impl SnippetKind {
    fn field(self) -> &'static str {
        match self {
            Self::PackageManager => "snippets.package_manager",
            Self::DirectApply => "snippets.direct_apply",
        }
    }
}

/// URL of the release manifest of `version`.
///
/// `base_url` carries both the leading and the trailing `/`, so plain concatenation
/// yields a well-formed absolute URL.
pub fn install_manifest_url(url: &SiteUrl, base_url: &BaseUrl, version: &VersionPath) -> String {
    format!("{url}{base_url}releases/{version}/install.yaml")
}

/// Compiled install snippet templates.
///
/// Templates are checked when compiled: a template that fails to parse, references
/// a value it is never given, or spans several lines is rejected here rather than at
/// render time.
pub struct InstallSnippets {
    package_manager: liquid::Template,
    direct_apply: liquid::Template,
}

impl InstallSnippets {
    pub fn new(templates: &SnippetTemplates) -> Result<Self> {
        let package_manager = parse(SnippetKind::PackageManager, &templates.package_manager)?;
        let direct_apply = parse(SnippetKind::DirectApply, &templates.direct_apply)?;
        let snippets = Self {
            package_manager,
            direct_apply,
        };
        snippets.probe()?;
        Ok(snippets)
    }

    pub fn from_site(site: &SiteConfig) -> Result<Self> {
        Self::new(&site.snippets)
    }

    pub fn render(
        &self,
        kind: SnippetKind,
        site: &SiteConfig,
        ctx: &VersionContext<'_>,
    ) -> Result<String> {
        match kind {
            SnippetKind::PackageManager => self.package_manager(ctx),
            SnippetKind::DirectApply => self.direct_apply(site, ctx),
        }
    }

    pub fn package_manager(&self, ctx: &VersionContext<'_>) -> Result<String> {
        let globals = globals(ctx.path(), None);
        render_line(SnippetKind::PackageManager, &self.package_manager, &globals)
    }

    pub fn direct_apply(&self, site: &SiteConfig, ctx: &VersionContext<'_>) -> Result<String> {
        let full_url = install_manifest_url(&site.url, &site.base_url, &ctx.version.path);
        let globals = globals(ctx.path(), Some(full_url));
        render_line(SnippetKind::DirectApply, &self.direct_apply, &globals)
    }

    fn probe(&self) -> Result<()> {
        let pm_globals = globals(PROBE_VERSION, None);
        render_line(SnippetKind::PackageManager, &self.package_manager, &pm_globals)
            .map_err(invalid_template)?;
        let full_url = format!("https://example.invalid/releases/{PROBE_VERSION}/install.yaml");
        let da_globals = globals(PROBE_VERSION, Some(full_url));
        render_line(SnippetKind::DirectApply, &self.direct_apply, &da_globals)
            .map_err(invalid_template)?;
        Ok(())
    }
}

impl fmt::Debug for InstallSnippets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstallSnippets{{}}")
    }
}

fn parse(kind: SnippetKind, source: &str) -> Result<liquid::Template> {
    SNIPPET_PARSER.parse(source.trim()).map_err(|e| {
        Status::new("Failed to parse snippet template")
            .with_source(e)
            .context_with(|c| c.insert("Field", kind.field().to_owned()))
    })
}

fn globals(version: &str, full_url: Option<String>) -> liquid::Object {
    let mut globals = liquid::Object::new();
    globals.insert(
        "version".into(),
        liquid::model::Value::scalar(version.to_owned()),
    );
    if let Some(full_url) = full_url {
        globals.insert("full_url".into(), liquid::model::Value::scalar(full_url));
    }
    globals
}

fn render_line(
    kind: SnippetKind,
    template: &liquid::Template,
    globals: &liquid::Object,
) -> Result<String> {
    let text = template.render(globals).map_err(|e| {
        Status::new("Snippet referenced a value missing from the version context")
            .with_source(e)
            .context_with(|c| c.insert("Field", kind.field().to_owned()))
    })?;
    let text = text.trim();
    if text.contains('\n') {
        return Err(Status::new("Snippets must render to a single line")
            .context_with(|c| c.insert("Field", kind.field().to_owned())));
    }
    Ok(text.to_owned())
}

fn invalid_template(e: Status) -> Status {
    Status::new("Invalid snippet template").with_source(e)
}
