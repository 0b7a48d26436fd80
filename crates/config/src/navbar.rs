use crate::KString;
use crate::Result;
use crate::Status;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Navbar {
    pub title: Option<KString>,
    pub logo: Option<Logo>,
    pub items: Vec<NavbarItem>,
}

impl Navbar {
    pub(crate) fn validate(&self) -> Result<()> {
        for item in &self.items {
            if let NavbarItem::Link {
                label, to, href, ..
            } = item
            {
                let label = label.as_deref().unwrap_or("<unlabeled>");
                check_link_target("navbar", label, to.as_deref(), href.as_deref())?;
            }
        }
        Ok(())
    }

    pub(crate) fn without_search(mut self) -> Self {
        self.items
            .retain(|item| !matches!(item, NavbarItem::Search { .. }));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct Logo {
    pub alt: KString,
    pub src: KString,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavbarItem {
    DocSidebar {
        sidebar_id: KString,
        label: KString,
        #[serde(default)]
        position: Position,
    },
    Link {
        #[serde(default)]
        label: Option<KString>,
        #[serde(default)]
        to: Option<KString>,
        #[serde(default)]
        href: Option<KString>,
        #[serde(default)]
        position: Position,
        #[serde(default)]
        aria_label: Option<KString>,
        #[serde(default)]
        class_name: Option<KString>,
    },
    DocsVersionDropdown {
        #[serde(default)]
        position: Position,
    },
    Search {
        #[serde(default)]
        position: Position,
    },
}

impl NavbarItem {
    pub fn position(&self) -> Position {
        match self {
            Self::DocSidebar { position, .. }
            | Self::Link { position, .. }
            | Self::DocsVersionDropdown { position }
            | Self::Search { position } => *position,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Left,
    Right,
}

/// Links point either inside the site (`to`, prefixed with `base_url`) or outside (`href`).
pub(crate) fn check_link_target(
    section: &str,
    label: &str,
    to: Option<&str>,
    href: Option<&str>,
) -> Result<()> {
    match (to, href) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        _ => Err(Status::new("Links need exactly one of `to` or `href`")
            .context_with(|c| c.insert("Section", section.to_owned()))
            .context_with(|c| c.insert("Label", label.to_owned()))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_items() {
        let navbar: Navbar = serde_yaml::from_str(
            r#"
title: Geeper.AI
items:
  - type: doc_sidebar
    sidebar_id: docs
    label: Docs
  - type: link
    to: /blog
    label: Blog
  - type: docs_version_dropdown
    position: right
  - type: search
    position: right
"#,
        )
        .unwrap();
        assert_eq!(navbar.items.len(), 4);
        assert_eq!(navbar.items[0].position(), Position::Left);
        assert_eq!(navbar.items[2].position(), Position::Right);
        assert!(navbar.validate().is_ok());
    }

    #[test]
    fn link_needs_one_target() {
        let navbar: Navbar = serde_yaml::from_str(
            r#"
items:
  - type: link
    label: Nowhere
"#,
        )
        .unwrap();
        assert!(navbar.validate().is_err());

        let navbar: Navbar = serde_yaml::from_str(
            r#"
items:
  - type: link
    label: Both
    to: /blog
    href: https://example.org
"#,
        )
        .unwrap();
        assert!(navbar.validate().is_err());
    }

    #[test]
    fn without_search_keeps_order() {
        let navbar: Navbar = serde_yaml::from_str(
            r#"
items:
  - type: search
  - type: docs_version_dropdown
  - type: link
    href: https://github.com/geeper-io/llm-operator
"#,
        )
        .unwrap();
        let navbar = navbar.without_search();
        assert_eq!(navbar.items.len(), 2);
        assert!(matches!(
            navbar.items[0],
            NavbarItem::DocsVersionDropdown { .. }
        ));
    }
}
