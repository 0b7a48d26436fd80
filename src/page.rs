//! Landing page composition.

use docsite_config::FooterStyle;
use docsite_config::HomeAction;
use docsite_config::NavbarItem;
use docsite_config::Position;
use docsite_config::SiteConfig;
use docsite_core::FEATURES;
use docsite_core::FeatureBlock;
use docsite_core::InstallSnippets;
use docsite_core::VersionCatalog;
use docsite_core::VersionContext;

use crate::error::Result;
use crate::template::Liquid;

/// Everything the home layout renders, already resolved against one site and version.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct HomePage<'s> {
    pub lang: &'s str,
    /// `<title>` of the document.
    pub title: String,
    pub meta_description: &'s str,
    pub favicon: Option<String>,
    pub navbar: NavbarView<'s>,
    pub header: Header<'s>,
    pub features: Vec<FeatureBlock<'static>>,
    pub install: Option<InstallView<'s>>,
    pub call_to_action: Option<CallToActionView<'s>>,
    pub footer: FooterView<'s>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Header<'s> {
    pub title: &'s str,
    pub tagline: &'s str,
    pub description: &'s str,
    pub actions: [LinkView<'s>; 2],
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LinkView<'s> {
    pub label: &'s str,
    pub href: String,
    pub external: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavbarView<'s> {
    pub home_href: String,
    pub title: Option<&'s str>,
    pub logo: Option<LogoView<'s>>,
    pub left: Vec<NavItemView<'s>>,
    pub right: Vec<NavItemView<'s>>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LogoView<'s> {
    pub alt: &'s str,
    pub src: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKind {
    Link,
    VersionDropdown,
    Search,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavItemView<'s> {
    pub kind: NavKind,
    pub label: &'s str,
    pub href: String,
    pub external: bool,
    pub aria_label: Option<&'s str>,
    pub class_name: Option<&'s str>,
    pub versions: Vec<VersionLink<'s>>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VersionLink<'s> {
    pub label: &'s str,
    pub href: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct InstallView<'s> {
    pub version: &'s str,
    pub package_manager: String,
    pub direct_apply: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CallToActionView<'s> {
    pub heading: &'s str,
    pub body: &'s str,
    pub action: LinkView<'s>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FooterView<'s> {
    pub style: FooterStyle,
    pub groups: Vec<FooterGroupView<'s>>,
    pub copyright: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FooterGroupView<'s> {
    pub title: &'s str,
    pub links: Vec<LinkView<'s>>,
}

/// Inputs shared by every section of one render.
#[derive(Copy, Clone, Debug)]
pub struct RenderContext<'s> {
    pub site: &'s SiteConfig,
    pub version: VersionContext<'s>,
    /// Build year, for the copyright line.
    pub year: i32,
}

pub fn compose_home<'s>(
    ctx: RenderContext<'s>,
    snippets: &InstallSnippets,
    liquid: &Liquid,
) -> Result<HomePage<'s>> {
    let site = ctx.site;
    let home = &site.home;

    let header = Header {
        title: &site.title,
        tagline: &site.tagline,
        description: &home.description,
        actions: [
            action_link(site, &home.primary_action),
            action_link(site, &home.secondary_action),
        ],
    };

    let install = if home.show_install {
        Some(InstallView {
            version: ctx.version.label(),
            package_manager: snippets.package_manager(&ctx.version)?,
            direct_apply: snippets.direct_apply(site, &ctx.version)?,
        })
    } else {
        None
    };

    let call_to_action = home
        .call_to_action
        .as_ref()
        .map(|cta| CallToActionView {
            heading: &cta.heading,
            body: &cta.body,
            action: action_link(site, &cta.action),
        });

    let title = if site.tagline.is_empty() {
        site.title.to_string()
    } else {
        format!("{} - {}", site.title, site.tagline)
    };

    let page = HomePage {
        lang: &site.i18n.default_locale,
        title,
        meta_description: &home.meta_description,
        favicon: site.favicon.as_deref().map(|f| site.site_path(f)),
        navbar: compose_navbar(ctx),
        header,
        features: docsite_core::compose_features(FEATURES, &site.base_url),
        install,
        call_to_action,
        footer: compose_footer(ctx, liquid)?,
    };
    Ok(page)
}

pub fn render_home(page: &HomePage<'_>, liquid: &Liquid) -> Result<String> {
    let globals = liquid::model::to_object(page)?;
    liquid.render_home(&globals)
}

fn compose_navbar(ctx: RenderContext<'_>) -> NavbarView<'_> {
    let site = ctx.site;
    let catalog = VersionCatalog::new(site);
    let mut left = Vec::new();
    let mut right = Vec::new();
    for item in &site.navbar.items {
        let view = match item {
            NavbarItem::DocSidebar { label, .. } => NavItemView {
                kind: NavKind::Link,
                label,
                href: catalog.href(ctx.version.version),
                external: false,
                aria_label: None,
                class_name: None,
                versions: Vec::new(),
            },
            NavbarItem::Link {
                label,
                to,
                href,
                aria_label,
                class_name,
                ..
            } => {
                let (href, external) = link_target(site, to.as_deref(), href.as_deref());
                NavItemView {
                    kind: NavKind::Link,
                    label: label.as_deref().unwrap_or_default(),
                    href,
                    external,
                    aria_label: aria_label.as_deref(),
                    class_name: class_name.as_deref(),
                    versions: Vec::new(),
                }
            }
            NavbarItem::DocsVersionDropdown { .. } => NavItemView {
                kind: NavKind::VersionDropdown,
                label: ctx.version.label(),
                href: catalog.href(ctx.version.version),
                external: false,
                aria_label: None,
                class_name: None,
                versions: catalog
                    .versions()
                    .iter()
                    .map(|v| VersionLink {
                        label: &v.label,
                        href: catalog.href(v),
                        active: v == ctx.version.version,
                    })
                    .collect(),
            },
            NavbarItem::Search { .. } => NavItemView {
                kind: NavKind::Search,
                label: "Search",
                href: String::new(),
                external: false,
                aria_label: None,
                class_name: None,
                versions: Vec::new(),
            },
        };
        match item.position() {
            Position::Left => left.push(view),
            Position::Right => right.push(view),
        }
    }

    NavbarView {
        home_href: site.site_path(""),
        title: site.navbar.title.as_deref(),
        logo: site.navbar.logo.as_ref().map(|logo| LogoView {
            alt: &logo.alt,
            src: site.site_path(&logo.src),
        }),
        left,
        right,
    }
}

fn compose_footer<'s>(ctx: RenderContext<'s>, liquid: &Liquid) -> Result<FooterView<'s>> {
    let site = ctx.site;
    let groups = site
        .footer
        .links
        .iter()
        .map(|group| FooterGroupView {
            title: &group.title,
            links: group
                .items
                .iter()
                .map(|link| {
                    let (href, external) =
                        link_target(site, link.to.as_deref(), link.href.as_deref());
                    LinkView {
                        label: &link.label,
                        href,
                        external,
                    }
                })
                .collect(),
        })
        .collect();

    let copyright = site
        .footer
        .copyright
        .as_deref()
        .map(|copyright| {
            let globals = liquid::object!({ "year": ctx.year });
            liquid.render_str(copyright, &globals)
        })
        .transpose()?;

    Ok(FooterView {
        style: site.footer.style,
        groups,
        copyright,
    })
}

fn action_link<'s>(site: &SiteConfig, action: &'s HomeAction) -> LinkView<'s> {
    LinkView {
        label: &action.label,
        href: site.site_path(&action.to),
        external: false,
    }
}

/// Internal `to` targets live under `base_url`, `href` targets are used verbatim.
fn link_target(site: &SiteConfig, to: Option<&str>, href: Option<&str>) -> (String, bool) {
    match (to, href) {
        (Some(to), _) => (site.site_path(to), false),
        (None, Some(href)) => (href.to_owned(), true),
        // Rejected when the config was resolved
        (None, None) => (String::new(), false),
    }
}

#[cfg(test)]
mod test {
    use docsite_config::Config;

    use super::*;
    use crate::template::LiquidBuilder;

    fn site() -> SiteConfig {
        let config = Config::from_file("tests/fixtures/site/_site.yml").unwrap();
        config.resolve(Some("production")).unwrap()
    }

    fn compose<'s>(site: &'s SiteConfig, request_path: &str) -> HomePage<'s> {
        let version = VersionCatalog::new(site).resolve(request_path);
        let snippets = InstallSnippets::from_site(site).unwrap();
        let liquid = LiquidBuilder::new().build().unwrap();
        let ctx = RenderContext {
            site,
            version,
            year: 2026,
        };
        compose_home(ctx, &snippets, &liquid).unwrap()
    }

    #[test]
    fn header_actions_are_under_base_url() {
        let site = site();
        let page = compose(&site, "/llm-operator/");
        assert_eq!(page.header.title, "Geeper.AI");
        assert_eq!(page.header.tagline, "LLM Operator for Kubernetes");
        assert_eq!(page.header.actions[0].href, "/llm-operator/docs/quickstart");
        assert_eq!(page.header.actions[1].href, "/llm-operator/docs/overview");
        assert_eq!(page.title, "Geeper.AI - LLM Operator for Kubernetes");
    }

    #[test]
    fn features_in_declaration_order() {
        let site = site();
        let page = compose(&site, "/llm-operator/");
        let titles: Vec<_> = page.features.iter().map(|f| f.title).collect();
        let expected: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn install_uses_active_version() {
        let site = site();
        let page = compose(&site, "/llm-operator/");
        let install = page.install.unwrap();
        assert_eq!(install.version, "HEAD");
        assert_eq!(
            install.package_manager,
            "helm install llm-operator oci://ghcr.io/geeper-io/llm-operator/llm-operator --version head"
        );
        assert_eq!(
            install.direct_apply,
            "kubectl apply -f https://geeper-io.github.io/llm-operator/releases/head/install.yaml"
        );
    }

    #[test]
    fn version_dropdown_marks_active_version() {
        let site = site();
        let page = compose(&site, "/llm-operator/docs/1.2.0/");
        let dropdown = page
            .navbar
            .right
            .iter()
            .find(|i| i.kind == NavKind::VersionDropdown)
            .unwrap();
        assert_eq!(dropdown.label, "1.2.0");
        let active: Vec<_> = dropdown
            .versions
            .iter()
            .filter(|v| v.active)
            .map(|v| v.label)
            .collect();
        assert_eq!(active, ["1.2.0"]);
        assert_eq!(dropdown.versions[0].href, "/llm-operator/docs/head/");
    }

    #[test]
    fn navbar_links() {
        let site = site();
        let page = compose(&site, "/llm-operator/");
        assert_eq!(page.navbar.left[0].href, "/llm-operator/docs/head/");
        assert_eq!(page.navbar.left[1].href, "/llm-operator/blog");
        assert!(!page.navbar.left[1].external);
        let github = page
            .navbar
            .right
            .iter()
            .find(|i| i.class_name == Some("header-github-link"))
            .unwrap();
        assert!(github.external);
        assert_eq!(github.href, "https://github.com/geeper-io/llm-operator");
    }

    #[test]
    fn default_profile_has_no_search() {
        let config = Config::from_file("tests/fixtures/site/_site.yml").unwrap();
        let site = config.resolve(Some("default")).unwrap();
        let page = compose(&site, "/llm-operator/");
        assert!(!page.navbar.right.iter().any(|i| i.kind == NavKind::Search));
    }

    #[test]
    fn footer_copyright_uses_year() {
        let site = site();
        let page = compose(&site, "/llm-operator/");
        assert_eq!(
            page.footer.copyright.as_deref(),
            Some("Copyright © 2026 Geeper.AI. Built with docsite.")
        );
        assert_eq!(page.footer.groups[0].links[0].href, "/llm-operator/docs/overview");
    }

    #[test]
    fn render_contains_sections() {
        let site = site();
        let page = compose(&site, "/llm-operator/");
        let liquid = LiquidBuilder::new().build().unwrap();
        let html = render_home(&page, &liquid).unwrap();
        assert!(html.contains("<title>Geeper.AI - LLM Operator for Kubernetes</title>"));
        assert!(html.contains("Kubernetes Native"));
        assert!(html.contains("/llm-operator/img/kubernetes-logo.svg"));
        assert!(html.contains(
            "kubectl apply -f https://geeper-io.github.io/llm-operator/releases/head/install.yaml"
        ));
        assert!(html.contains("Why Choose LLM Operator?"));
    }

    #[test]
    fn render_is_deterministic() {
        let site = site();
        let liquid = LiquidBuilder::new().build().unwrap();
        let first = render_home(&compose(&site, "/llm-operator/"), &liquid).unwrap();
        let second = render_home(&compose(&site, "/llm-operator/"), &liquid).unwrap();
        assert_eq!(first, second);
    }
}
