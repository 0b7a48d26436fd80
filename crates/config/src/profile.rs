use crate::Config;
use crate::KString;
use crate::SiteUrl;
use crate::VersionDescriptor;

/// Per-deployment overrides applied on top of the base [`Config`].
///
/// Only the fields that legitimately differ between deployments are overridable.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<SiteUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<KString>,
    /// Replaces the canonical (first) documentation version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<VersionDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,
}

impl Profile {
    pub fn apply(&self, mut base: Config) -> Config {
        let Self {
            url,
            organization_name,
            current_version,
            search,
        } = self;
        base.url = url.clone().or(base.url);
        base.organization_name = organization_name.clone().or(base.organization_name);
        if let Some(current) = current_version {
            match base.docs.versions.first_mut() {
                Some(first) => *first = current.clone(),
                None => base.docs.versions.push(current.clone()),
            }
        }
        base.search.enabled = search.unwrap_or(base.search.enabled);
        base
    }
}
