use crate::KString;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Footer {
    pub style: FooterStyle,
    pub links: Vec<FooterLinkGroup>,
    /// Liquid template, `{{ year }}` is the build year.
    pub copyright: Option<KString>,
}

impl Footer {
    pub(crate) fn validate(&self) -> Result<()> {
        for group in &self.links {
            for link in &group.items {
                crate::navbar::check_link_target(
                    "footer",
                    &link.label,
                    link.to.as_deref(),
                    link.href.as_deref(),
                )?;
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct FooterLinkGroup {
    pub title: KString,
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    pub label: KString,
    #[serde(default)]
    pub to: Option<KString>,
    #[serde(default)]
    pub href: Option<KString>,
}
