use std::fmt;
use std::path;

use crate::BaseUrl;
use crate::Footer;
use crate::Home;
use crate::I18n;
use crate::KString;
use crate::Navbar;
use crate::PluginRef;
use crate::SiteUrl;
use crate::SnippetTemplates;
use crate::Theme;
use crate::Versions;

/// Resolved, validated description of one deployment.
///
/// Produced by [`crate::Config::resolve`]; never mutated afterwards and safe to share
/// across any number of renders.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    pub profile: Option<KString>,
    #[serde(skip)]
    pub root: path::PathBuf,
    #[serde(skip)]
    pub destination: path::PathBuf,
    pub title: KString,
    pub tagline: KString,
    pub favicon: Option<KString>,
    pub url: SiteUrl,
    pub base_url: BaseUrl,
    pub organization_name: Option<KString>,
    pub project_name: Option<KString>,
    pub on_broken_links: OnBrokenLinks,
    pub i18n: I18n,
    pub route_base_path: KString,
    pub versions: Versions,
    pub theme: Theme,
    pub navbar: Navbar,
    pub footer: Footer,
    pub plugins: Vec<PluginRef>,
    pub snippets: SnippetTemplates,
    pub home: Home,
}

impl SiteConfig {
    /// Site-absolute path for an internal link target.
    pub fn site_path(&self, to: &str) -> String {
        self.base_url.join(to)
    }

    /// Fully qualified URL for an internal link target.
    pub fn absolute_url(&self, to: &str) -> String {
        format!("{}{}", self.url, self.site_path(to))
    }

    /// Site-absolute root of the versioned docs tree, e.g. `/llm-operator/docs/`.
    pub fn docs_root(&self) -> String {
        format!("{}{}/", self.base_url, self.route_base_path)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.as_str() == name)
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        let converted = converted.strip_prefix("---\n").unwrap_or(converted.as_str());
        write!(f, "{}", converted.trim_end())
    }
}

/// How mismatches between declared versions and published content are reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnBrokenLinks {
    Ignore,
    #[default]
    Warn,
    Throw,
}
