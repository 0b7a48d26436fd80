use std::fmt;

use crate::KString;
use crate::Result;
use crate::Status;

/// URL segment a documentation version is served under, e.g. `head` or `1.2.0`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct VersionPath(KString);

impl VersionPath {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VersionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for VersionPath {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for VersionPath {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Err("version `path` must not be empty")
        } else if value.contains(|c: char| matches!(c, '/' | '\\') || c.is_whitespace()) {
            Err("version `path` must be a single URL segment")
        } else if value.contains(['?', '#', '%']) {
            Err("version `path` must not contain `?`, `#` or `%`")
        } else if value == "." || value == ".." {
            Err("version `path` must not be a dot segment")
        } else {
            Ok(Self(KString::from_ref(value)))
        }
    }
}

impl TryFrom<String> for VersionPath {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub struct VersionDescriptor {
    /// Name shown in the version switcher.
    pub label: KString,
    pub path: VersionPath,
}

impl VersionDescriptor {
    pub fn new(label: impl Into<KString>, path: VersionPath) -> Self {
        Self {
            label: label.into(),
            path,
        }
    }
}

/// Ordered, non-empty catalog of documentation versions.
///
/// The first entry is the canonical ("current") version.  No two entries share a `path`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Versions(Vec<VersionDescriptor>);

impl Versions {
    pub fn canonical(&self) -> &VersionDescriptor {
        &self.0[0]
    }

    pub fn get(&self, path: &str) -> Option<&VersionDescriptor> {
        self.0.iter().find(|v| v.path.as_str() == path)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionDescriptor> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[VersionDescriptor] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'v> IntoIterator for &'v Versions {
    type Item = &'v VersionDescriptor;
    type IntoIter = std::slice::Iter<'v, VersionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<VersionDescriptor>> for Versions {
    type Error = Status;

    fn try_from(versions: Vec<VersionDescriptor>) -> Result<Self> {
        if versions.is_empty() {
            return Err(Status::new("At least one documentation version is required")
                .context_with(|c| c.insert("Field", "docs.versions".to_owned())));
        }
        for (i, version) in versions.iter().enumerate() {
            if versions[..i].iter().any(|v| v.path == version.path) {
                return Err(
                    Status::new("Documentation versions must have distinct paths")
                        .context_with(|c| c.insert("Path", version.path.to_string())),
                );
            }
        }
        Ok(Self(versions))
    }
}

/// Where the versioned documentation tree is mounted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Docs {
    pub route_base_path: KString,
    pub versions: Vec<VersionDescriptor>,
}

impl Default for Docs {
    fn default() -> Self {
        Self {
            route_base_path: "docs".into(),
            versions: Default::default(),
        }
    }
}

impl Docs {
    pub(crate) fn validate_route_base_path(&self) -> Result<()> {
        let route = self.route_base_path.as_str();
        if route.is_empty() || route.starts_with('/') || route.ends_with('/') {
            return Err(
                Status::new("`docs.route_base_path` must be a relative path without surrounding `/`")
                    .context_with(|c| c.insert("Value", route.to_owned())),
            );
        }
        Ok(())
    }
}
