use crate::KString;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Theme {
    pub custom_css: Option<KString>,
    /// Social card image.
    pub image: Option<KString>,
    pub code_theme: KString,
    pub dark_code_theme: KString,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            custom_css: Default::default(),
            image: Default::default(),
            code_theme: "github".into(),
            dark_code_theme: "dracula".into(),
        }
    }
}
