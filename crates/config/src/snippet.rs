use crate::KString;

/// Liquid sources for the install snippets.
///
/// `package_manager` sees `version`; `direct_apply` sees `version` and `full_url`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SnippetTemplates {
    pub package_manager: KString,
    pub direct_apply: KString,
}

impl Default for SnippetTemplates {
    fn default() -> Self {
        Self {
            package_manager: "helm install llm-operator oci://ghcr.io/geeper-io/llm-operator/llm-operator --version {{ version }}".into(),
            direct_apply: "kubectl apply -f {{ full_url }}".into(),
        }
    }
}
