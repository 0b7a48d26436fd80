use std::fmt;

use crate::KString;

static SITE_URL: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"^https?://[^/\s?#]+$").unwrap());

/// Scheme and host the site is served from, e.g. `https://geeper-io.github.io`.
///
/// Never carries a path or a trailing slash; the path prefix lives in [`BaseUrl`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct SiteUrl(KString);

impl SiteUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for SiteUrl {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::ops::Deref for SiteUrl {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for SiteUrl {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !SITE_URL.is_match(value) {
            Err("`url` must be a scheme and host without a path or trailing slash")
        } else {
            Ok(Self(KString::from_ref(value)))
        }
    }
}

impl TryFrom<String> for SiteUrl {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Path prefix the site is served under.
///
/// Always starts and ends with `/`, so `url + base_url + "some/path"` is well formed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct BaseUrl(KString);

impl BaseUrl {
    pub fn root() -> Self {
        Self(KString::from_static("/"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Site-absolute path for `path`, e.g. `/llm-operator/` + `docs/overview`.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for BaseUrl {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::ops::Deref for BaseUrl {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for BaseUrl {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.starts_with('/') || !value.ends_with('/') {
            Err("`base_url` must start and end with `/`")
        } else if value.contains("//") {
            Err("`base_url` must not contain empty path segments")
        } else if value.contains(|c: char| c.is_whitespace() || c == '?' || c == '#') {
            Err("`base_url` must be a plain path")
        } else {
            Ok(Self(KString::from_ref(value)))
        }
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
