use std::collections::BTreeMap;
use std::fmt;
use std::path;

use crate::BaseUrl;
use crate::Docs;
use crate::Footer;
use crate::Home;
use crate::I18n;
use crate::KString;
use crate::Navbar;
use crate::OnBrokenLinks;
use crate::PluginRef;
use crate::Profile;
use crate::Result;
use crate::Search;
use crate::SiteConfig;
use crate::SiteUrl;
use crate::SnippetTemplates;
use crate::Status;
use crate::Theme;
use crate::Versions;

pub const CONFIG_FILE: &str = "_site.yml";

/// The contents of `_site.yml`: a base record plus named deployment profiles.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub destination: KString,
    pub title: Option<KString>,
    pub tagline: Option<KString>,
    pub favicon: Option<KString>,
    pub url: Option<SiteUrl>,
    pub base_url: Option<BaseUrl>,
    pub organization_name: Option<KString>,
    pub project_name: Option<KString>,
    pub on_broken_links: OnBrokenLinks,
    pub i18n: I18n,
    pub docs: Docs,
    pub theme: Theme,
    pub search: Search,
    pub navbar: Option<Navbar>,
    pub footer: Option<Footer>,
    pub plugins: Vec<PluginRef>,
    pub snippets: SnippetTemplates,
    pub home: Home,
    pub profiles: BTreeMap<KString, Profile>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            root: Default::default(),
            destination: "./build".into(),
            title: Default::default(),
            tagline: Default::default(),
            favicon: Default::default(),
            url: Default::default(),
            base_url: Default::default(),
            organization_name: Default::default(),
            project_name: Default::default(),
            on_broken_links: Default::default(),
            i18n: Default::default(),
            docs: Default::default(),
            theme: Default::default(),
            search: Default::default(),
            navbar: Default::default(),
            footer: Default::default(),
            plugins: Default::default(),
            snippets: Default::default(),
            home: Default::default(),
            profiles: Default::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, CONFIG_FILE);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No {CONFIG_FILE} file found in current directory, using default config.");
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.profiles.keys().map(|k| k.as_str())
    }

    /// Apply one deployment profile to the base record and validate the result.
    ///
    /// `None` resolves the base record as is.  Profiles only ever layer on the base,
    /// never on each other.
    pub fn resolve(&self, profile: Option<&str>) -> Result<SiteConfig> {
        let config = match profile {
            Some(name) => {
                let overrides = self.profiles.get(name).ok_or_else(|| {
                    Status::new("Unknown profile")
                        .context_with(|c| c.insert("Profile", name.to_owned()))
                        .context_with(|c| {
                            c.insert("Available", itertools::join(self.profile_names(), ", "))
                        })
                })?;
                log::debug!("Applying profile `{name}`");
                overrides.apply(self.clone())
            }
            None => self.clone(),
        };
        config.into_site(profile).map_err(|e| match profile {
            Some(name) => e.context_with(|c| c.insert("Profile", name.to_owned())),
            None => e,
        })
    }

    fn into_site(self, profile: Option<&str>) -> Result<SiteConfig> {
        let Config {
            root,
            destination,
            title,
            tagline,
            favicon,
            url,
            base_url,
            organization_name,
            project_name,
            on_broken_links,
            i18n,
            docs,
            theme,
            search,
            navbar,
            footer,
            plugins,
            snippets,
            home,
            profiles: _,
        } = self;

        let title = title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| missing_field("title"))?;
        let url = url.ok_or_else(|| missing_field("url"))?;
        let base_url = base_url.ok_or_else(|| missing_field("base_url"))?;
        let navbar = navbar.ok_or_else(|| missing_field("navbar"))?;
        let footer = footer.ok_or_else(|| missing_field("footer"))?;

        i18n.validate()?;
        docs.validate_route_base_path()?;
        navbar.validate()?;
        footer.validate()?;

        let Docs {
            route_base_path,
            versions,
        } = docs;
        let versions = Versions::try_from(versions)?;

        let navbar = if search.enabled {
            navbar
        } else {
            log::debug!("Search disabled, dropping search navbar items");
            navbar.without_search()
        };
        let plugins = search.apply(plugins);

        let destination = root.join(destination.as_str());

        let site = SiteConfig {
            profile: profile.map(KString::from_ref),
            root,
            destination,
            title,
            tagline: tagline.unwrap_or_default(),
            favicon,
            url,
            base_url,
            organization_name,
            project_name,
            on_broken_links,
            i18n,
            route_base_path,
            versions,
            theme,
            navbar,
            footer,
            plugins,
            snippets,
            home,
        };
        Ok(site)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        let converted = converted.strip_prefix("---\n").unwrap_or(converted.as_str());
        write!(f, "{}", converted.trim_end())
    }
}

fn missing_field(field: &'static str) -> Status {
    Status::new("Missing required config field").context_with(|c| c.insert("Field", field.to_owned()))
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let result = Config::from_file("tests/fixtures/config/_site.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.title.as_deref(), Some("Geeper.AI"));
    }

    #[test]
    fn test_from_file_empty() {
        let result = Config::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.destination.as_str(), "./build");
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = Config::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_unslashed_base_url() {
        let result = Config::from_file("tests/fixtures/config/unslashed_base_url.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Config::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_cwd_ok() {
        let result = Config::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
    }

    #[test]
    fn test_from_cwd_not_found() {
        let result = Config::from_cwd("tests/fixtures").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures").to_path_buf());
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/config", CONFIG_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_site.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/config/child", CONFIG_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_site.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        let expected = path::Path::new("<NOT FOUND>");
        let actual =
            find_project_file("tests/fixtures/", CONFIG_FILE).unwrap_or_else(|| expected.into());
        assert_eq!(actual, expected);
    }

    fn fixture() -> Config {
        Config::from_file("tests/fixtures/config/_site.yml").unwrap()
    }

    #[test]
    fn resolve_base() {
        let site = fixture().resolve(None).unwrap();
        assert_eq!(site.profile, None);
        assert_eq!(site.url.as_str(), "https://geeper-io.github.io");
        assert_eq!(site.base_url.as_str(), "/llm-operator/");
        assert_eq!(site.versions.canonical().path.as_str(), "head");
        assert_eq!(
            site.destination,
            path::Path::new("tests/fixtures/config").join("./build")
        );
    }

    #[test]
    fn resolve_production() {
        let site = fixture().resolve(Some("production")).unwrap();
        assert_eq!(site.profile.as_deref(), Some("production"));
        assert_eq!(site.url.as_str(), "https://geeper-io.github.io");
        assert_eq!(site.organization_name.as_deref(), Some("geeper-io"));
        assert!(site.has_plugin("docusaurus-lunr-search"));
        assert!(
            site.navbar
                .items
                .iter()
                .any(|i| matches!(i, crate::NavbarItem::Search { .. }))
        );
    }

    #[test]
    fn resolve_default_profile() {
        let site = fixture().resolve(Some("default")).unwrap();
        assert_eq!(site.url.as_str(), "https://your-docusaurus-site.example.com");
        assert_eq!(site.organization_name.as_deref(), Some("facebook"));
        assert_eq!(site.versions.canonical().label.as_str(), "Next");
        assert_eq!(site.versions.canonical().path.as_str(), "next");
        assert!(!site.has_plugin("docusaurus-lunr-search"));
        assert!(
            !site
                .navbar
                .items
                .iter()
                .any(|i| matches!(i, crate::NavbarItem::Search { .. }))
        );
    }

    #[test]
    fn profiles_do_not_leak_into_each_other() {
        let config = fixture();
        let default = config.resolve(Some("default")).unwrap();
        let production = config.resolve(Some("production")).unwrap();
        assert_ne!(default.url, production.url);
        assert_eq!(production.versions.canonical().path.as_str(), "head");
        // Resolving a profile never mutates the base record
        assert_eq!(config, fixture());
    }

    #[test]
    fn resolve_unknown_profile() {
        let result = fixture().resolve(Some("staging"));
        assert!(result.is_err());
    }

    #[test]
    fn resolve_requires_title() {
        let config = Config {
            title: None,
            ..fixture()
        };
        assert!(config.resolve(None).is_err());
    }

    #[test]
    fn resolve_requires_url() {
        let config = Config {
            url: None,
            ..fixture()
        };
        assert!(config.resolve(None).is_err());
    }

    #[test]
    fn resolve_requires_versions() {
        let mut config = fixture();
        config.docs.versions.clear();
        assert!(config.resolve(None).is_err());
    }

    #[test]
    fn resolve_requires_navbar_and_footer() {
        let config = Config {
            navbar: None,
            ..fixture()
        };
        assert!(config.resolve(None).is_err());

        let config = Config {
            footer: None,
            ..fixture()
        };
        assert!(config.resolve(None).is_err());
    }

    #[test]
    fn resolve_rejects_duplicate_version_paths() {
        let mut config = fixture();
        let first = config.docs.versions[0].clone();
        config.docs.versions.push(first);
        assert!(config.resolve(None).is_err());
    }

    #[test]
    fn base_url_is_slash_delimited() {
        let config = fixture();
        for profile in [None, Some("production"), Some("default")] {
            let site = config.resolve(profile).unwrap();
            assert!(site.base_url.starts_with('/'));
            assert!(site.base_url.ends_with('/'));
        }
    }

    #[test]
    fn site_paths() {
        let site = fixture().resolve(None).unwrap();
        assert_eq!(site.site_path("/docs/overview"), "/llm-operator/docs/overview");
        assert_eq!(
            site.absolute_url("/blog"),
            "https://geeper-io.github.io/llm-operator/blog"
        );
        assert_eq!(site.docs_root(), "/llm-operator/docs/");
    }

    #[test]
    fn display_round_trips() {
        let config = fixture();
        let text = config.to_string();
        let mut parsed: Config = serde_yaml::from_str(&text).unwrap();
        parsed.root = config.root.clone();
        assert_eq!(parsed, config);
    }
}
