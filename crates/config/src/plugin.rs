use std::fmt;

use crate::KString;

/// Name of a build plugin handed to the external site builder.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PluginRef(KString);

impl PluginRef {
    pub fn new(name: impl Into<KString>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Search {
    pub enabled: bool,
    pub plugin: PluginRef,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            enabled: true,
            plugin: PluginRef::new("docusaurus-lunr-search"),
        }
    }
}

impl Search {
    /// Final plugin list: search plugin appended when enabled, stripped otherwise.
    pub(crate) fn apply(&self, plugins: Vec<PluginRef>) -> Vec<PluginRef> {
        let mut plugins: Vec<_> = plugins.into_iter().filter(|p| *p != self.plugin).collect();
        if self.enabled {
            plugins.push(self.plugin.clone());
        }
        plugins
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn enabled_appends_plugin_once() {
        let search = Search::default();
        let plugins = search.apply(vec![
            PluginRef::new("docusaurus-lunr-search"),
            PluginRef::new("ideal-image"),
        ]);
        assert_eq!(
            plugins,
            vec![
                PluginRef::new("ideal-image"),
                PluginRef::new("docusaurus-lunr-search")
            ]
        );
    }

    #[test]
    fn disabled_strips_plugin() {
        let search = Search {
            enabled: false,
            ..Default::default()
        };
        let plugins = search.apply(vec![PluginRef::new("docusaurus-lunr-search")]);
        assert!(plugins.is_empty());
    }
}
