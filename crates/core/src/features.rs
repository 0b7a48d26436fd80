use docsite_config::BaseUrl;

/// Columns of the landing page feature grid.
pub const GRID_COLUMNS: usize = 3;

/// Icons bundled with the site, each registered against a static asset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Kubernetes,
    ChatLlm,
    CodingAssistants,
    LlmIntegration,
    Observability,
    Pipeline,
    MultiComponent,
}

impl Icon {
    /// Asset path relative to the site root.
    pub const fn asset(self) -> &'static str {
        match self {
            Self::Kubernetes => "img/kubernetes-logo.svg",
            Self::ChatLlm => "img/chat-llm.svg",
            Self::CodingAssistants => "img/coding-assistants.svg",
            Self::LlmIntegration => "img/llm-integration.svg",
            Self::Observability => "img/observability.svg",
            Self::Pipeline => "img/pipeline.svg",
            Self::MultiComponent => "img/multi-component.svg",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FeatureItem {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

/// Landing page features, in display order.
pub static FEATURES: &[FeatureItem] = &[
    FeatureItem {
        title: "Kubernetes Native",
        icon: Icon::Kubernetes,
        description: "Built as a native Kubernetes operator using Go and Kubebuilder. \
            Automatically manages the complete lifecycle of LLM services with declarative \
            configuration and GitOps workflows.",
    },
    FeatureItem {
        title: "Chat with LLM",
        icon: Icon::ChatLlm,
        description: "Interactive chat interfaces powered by OpenWebUI with real-time \
            conversations, context awareness, and seamless integration with multiple LLM \
            backends for natural AI interactions.",
    },
    FeatureItem {
        title: "Coding Assistants",
        icon: Icon::CodingAssistants,
        description: "Advanced coding assistance with Tabby integration, providing intelligent \
            code completion, refactoring suggestions, and AI-powered development workflows for \
            multiple programming languages.",
    },
    FeatureItem {
        title: "Multi-LLM Support",
        icon: Icon::LlmIntegration,
        description: "Seamlessly integrates Ollama, OpenWebUI, Tabby, and custom models. \
            Supports multiple model formats, automatic scaling, and unified management across \
            different LLM backends.",
    },
    FeatureItem {
        title: "Advanced Observability",
        icon: Icon::Observability,
        description: "Built-in Langfuse integration for comprehensive LLM monitoring, tracing, \
            and analytics. Track requests, performance metrics, costs, and user interactions in \
            real-time.",
    },
    FeatureItem {
        title: "Pipeline Processing",
        icon: Icon::Pipeline,
        description: "OpenWebUI Pipelines enable custom workflows, filters, and integrations. \
            Process requests through configurable stages with Python-based extensibility and \
            automatic monitoring.",
    },
    FeatureItem {
        title: "Production Ready",
        icon: Icon::MultiComponent,
        description: "Enterprise-grade features including Redis persistence, auto-scaling, \
            ingress management, and multi-replica support. Ready for production workloads with \
            minimal configuration.",
    },
];

/// One cell of the feature grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FeatureBlock<'f> {
    pub title: &'f str,
    pub description: &'f str,
    /// Site-absolute icon path.
    pub icon_src: String,
    pub row: usize,
    pub column: usize,
}

/// Lay `items` out row-major, every item exactly once and in declaration order.
pub fn compose_features<'f>(items: &'f [FeatureItem], base_url: &BaseUrl) -> Vec<FeatureBlock<'f>> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| FeatureBlock {
            title: item.title,
            description: item.description,
            icon_src: base_url.join(item.icon.asset()),
            row: idx / GRID_COLUMNS,
            column: idx % GRID_COLUMNS,
        })
        .collect()
}
