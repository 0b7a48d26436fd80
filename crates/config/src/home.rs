use crate::KString;

/// Content of the landing page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Home {
    pub description: KString,
    /// `<meta name="description">` of the page.
    pub meta_description: KString,
    pub primary_action: HomeAction,
    pub secondary_action: HomeAction,
    pub call_to_action: Option<CallToAction>,
    /// Show both install snippets for the canonical version.
    pub show_install: bool,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            description: Default::default(),
            meta_description: Default::default(),
            primary_action: HomeAction {
                label: "Get Started".into(),
                to: "/docs/quickstart".into(),
            },
            secondary_action: HomeAction {
                label: "Learn More".into(),
                to: "/docs/overview".into(),
            },
            call_to_action: None,
            show_install: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct HomeAction {
    pub label: KString,
    /// Site-relative target, prefixed with `base_url` when rendered.
    pub to: KString,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct CallToAction {
    pub heading: KString,
    #[serde(default)]
    pub body: KString,
    pub action: HomeAction,
}
