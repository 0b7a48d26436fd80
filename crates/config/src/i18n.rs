use std::collections::BTreeSet;

use crate::KString;
use crate::Result;
use crate::Status;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct I18n {
    pub default_locale: KString,
    pub locales: BTreeSet<KString>,
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: ["en".into()].into_iter().collect(),
        }
    }
}

impl I18n {
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.locales.contains(&self.default_locale) {
            return Err(
                Status::new("`i18n.default_locale` must be one of `i18n.locales`")
                    .context_with(|c| c.insert("Locale", self.default_locale.to_string())),
            );
        }
        Ok(())
    }
}
