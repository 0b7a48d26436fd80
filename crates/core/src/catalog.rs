use std::collections::BTreeSet;

use docsite_config::SiteConfig;
use docsite_config::VersionDescriptor;
use docsite_config::Versions;

/// How the active version of a render was picked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The request path named a declared version.
    Matched,
    /// Nothing matched; the canonical version stands in.
    Fallback,
}

/// The version being viewed, published to everything rendered for one request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VersionContext<'v> {
    pub version: &'v VersionDescriptor,
    pub resolution: Resolution,
}

impl<'v> VersionContext<'v> {
    pub fn path(&self) -> &'v str {
        self.version.path.as_str()
    }

    pub fn label(&self) -> &'v str {
        self.version.label.as_str()
    }

    pub fn is_fallback(&self) -> bool {
        self.resolution == Resolution::Fallback
    }
}

/// Pick the descriptor for `segment`, falling back to the canonical version on a miss.
pub fn resolve_version<'v>(versions: &'v Versions, segment: Option<&str>) -> VersionContext<'v> {
    match segment.and_then(|s| versions.get(s)) {
        Some(version) => VersionContext {
            version,
            resolution: Resolution::Matched,
        },
        None => {
            log::debug!(
                "No documentation version matches `{}`, using `{}`",
                segment.unwrap_or_default(),
                versions.canonical().path
            );
            VersionContext {
                version: versions.canonical(),
                resolution: Resolution::Fallback,
            }
        }
    }
}

/// Version lookup scoped to one site's URL layout.
#[derive(Clone, Debug)]
pub struct VersionCatalog<'s> {
    site: &'s SiteConfig,
}

impl<'s> VersionCatalog<'s> {
    pub fn new(site: &'s SiteConfig) -> Self {
        Self { site }
    }

    pub fn versions(&self) -> &'s Versions {
        &self.site.versions
    }

    pub fn canonical(&self) -> &'s VersionDescriptor {
        self.site.versions.canonical()
    }

    pub fn lookup(&self, path: &str) -> Option<&'s VersionDescriptor> {
        self.site.versions.get(path)
    }

    /// Version segment of `request_path`, if it points into the docs tree.
    ///
    /// Accepts paths under `base_url` (`/llm-operator/docs/head/install`) as well as
    /// site-relative ones (`/docs/head/install`).
    pub fn version_segment<'p>(&self, request_path: &'p str) -> Option<&'p str> {
        request_path
            .strip_prefix(self.site.base_url.as_str())
            .and_then(|rel| self.docs_segment(rel))
            .or_else(|| self.docs_segment(request_path.trim_start_matches('/')))
    }

    fn docs_segment<'p>(&self, rel: &'p str) -> Option<&'p str> {
        let rel = rel.strip_prefix(self.site.route_base_path.as_str())?;
        let rel = rel.strip_prefix('/')?;
        let segment = rel.split(['/', '?', '#']).next().unwrap_or_default();
        (!segment.is_empty()).then_some(segment)
    }

    pub fn resolve(&self, request_path: &str) -> VersionContext<'s> {
        let segment = self.version_segment(request_path);
        resolve_version(&self.site.versions, segment)
    }

    /// Site-absolute docs root of `version`, the target of the version switcher.
    pub fn href(&self, version: &VersionDescriptor) -> String {
        format!("{}{}/", self.site.docs_root(), version.path)
    }

    /// Compare declared version paths with the version roots actually published.
    pub fn audit<'p>(&self, published: impl IntoIterator<Item = &'p str>) -> CatalogAudit {
        let published: BTreeSet<&str> = published.into_iter().collect();
        let declared: BTreeSet<&str> = self
            .site
            .versions
            .iter()
            .map(|v| v.path.as_str())
            .collect();
        CatalogAudit {
            unpublished: declared
                .difference(&published)
                .map(|s| (*s).to_owned())
                .collect(),
            undeclared: published
                .difference(&declared)
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CatalogAudit {
    /// Declared in the catalog with no published content root.
    pub unpublished: Vec<String>,
    /// Published content roots missing from the catalog.
    pub undeclared: Vec<String>,
}

impl CatalogAudit {
    pub fn is_clean(&self) -> bool {
        self.unpublished.is_empty() && self.undeclared.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test {
    use docsite_config::Config;

    use super::*;

    pub(crate) fn site(yaml: &str) -> SiteConfig {
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        config.resolve(None).unwrap()
    }

    pub(crate) const SITE: &str = r#"
title: Geeper.AI
url: https://geeper-io.github.io
base_url: /llm-operator/
docs:
  versions:
    - label: HEAD
      path: head
    - label: "1.2.0"
      path: 1.2.0
    - label: "1.1.0"
      path: 1.1.0
navbar: {}
footer: {}
"#;

    #[test]
    fn resolve_under_base_url() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        let ctx = catalog.resolve("/llm-operator/docs/1.2.0/install");
        assert_eq!(ctx.path(), "1.2.0");
        assert_eq!(ctx.resolution, Resolution::Matched);
    }

    #[test]
    fn resolve_site_relative() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        let ctx = catalog.resolve("/docs/1.1.0/");
        assert_eq!(ctx.path(), "1.1.0");
        assert!(!ctx.is_fallback());
    }

    #[test]
    fn resolve_base_url_shares_route_segment() {
        let site = site(
            r#"
title: Docs
url: https://example.org
base_url: /docs/
docs:
  versions:
    - label: v1
      path: v1
    - label: "1.2.0"
      path: 1.2.0
navbar: {}
footer: {}
"#,
        );
        let catalog = VersionCatalog::new(&site);
        let ctx = catalog.resolve("/docs/1.2.0/install");
        assert_eq!(ctx.path(), "1.2.0");
        assert!(!ctx.is_fallback());
        assert_eq!(catalog.resolve("/docs/docs/1.2.0/install").path(), "1.2.0");
        assert_eq!(catalog.resolve("/docs/docs/v1/").path(), "v1");
        assert!(catalog.resolve("/docs/blog/post").is_fallback());
    }

    #[test]
    fn resolve_version_root_without_trailing_slash() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        assert_eq!(catalog.resolve("/llm-operator/docs/head").path(), "head");
    }

    #[test]
    fn resolve_ignores_query() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        assert_eq!(catalog.resolve("/docs/1.2.0?tab=helm").path(), "1.2.0");
    }

    #[test]
    fn resolve_miss_falls_back_to_canonical() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        let ctx = catalog.resolve("/llm-operator/docs/0.9.0/install");
        assert_eq!(ctx.path(), "head");
        assert_eq!(ctx.label(), "HEAD");
        assert!(ctx.is_fallback());
    }

    #[test]
    fn resolve_outside_docs_falls_back() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        for path in ["/", "", "/llm-operator/blog/1.2.0", "/llm-operator/docsx/1.2.0"] {
            let ctx = catalog.resolve(path);
            assert_eq!(ctx.path(), "head", "{path}");
            assert!(ctx.is_fallback());
        }
    }

    #[test]
    fn lookup_misses_are_reported() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        assert!(catalog.lookup("1.2.0").is_some());
        assert!(catalog.lookup("0.9.0").is_none());
    }

    #[test]
    fn resolve_version_without_segment() {
        let site = site(SITE);
        let ctx = resolve_version(&site.versions, None);
        assert_eq!(ctx.version, site.versions.canonical());
        assert!(ctx.is_fallback());
    }

    #[test]
    fn href_of_version() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        let version = catalog.lookup("1.2.0").unwrap();
        assert_eq!(catalog.href(version), "/llm-operator/docs/1.2.0/");
    }

    #[test]
    fn audit_clean() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        let audit = catalog.audit(["1.1.0", "head", "1.2.0"]);
        assert!(audit.is_clean());
    }

    #[test]
    fn audit_mismatch() {
        let site = site(SITE);
        let catalog = VersionCatalog::new(&site);
        let audit = catalog.audit(["head", "1.2.0", "2.0.0"]);
        assert_eq!(audit.unpublished, vec!["1.1.0".to_owned()]);
        assert_eq!(audit.undeclared, vec!["2.0.0".to_owned()]);
        assert!(!audit.is_clean());
    }
}
