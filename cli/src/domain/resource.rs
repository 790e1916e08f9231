//! Resource categories, descriptors and the prefix safety gate.
//!
//! Pure types only: no I/O, no async, no AWS SDK types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Categories ────────────────────────────────────────────────────────────────

/// A kind of cloud resource the sweeper knows how to list and delete.
///
/// The declaration order is the deletion order. A knowledge base goes before
/// the vector store it reads from, and a vector index goes before the bucket
/// that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceCategory {
    KnowledgeBase,
    VectorIndex,
    VectorBucket,
    Guardrail,
    EcrRepository,
    #[serde(rename = "codebuild-project")]
    CodeBuildProject,
    IamPolicy,
    IamRole,
}

impl ResourceCategory {
    pub const COUNT: usize = 8;

    /// Every category, in deletion order.
    pub const ALL: [ResourceCategory; Self::COUNT] = [
        ResourceCategory::KnowledgeBase,
        ResourceCategory::VectorIndex,
        ResourceCategory::VectorBucket,
        ResourceCategory::Guardrail,
        ResourceCategory::EcrRepository,
        ResourceCategory::CodeBuildProject,
        ResourceCategory::IamPolicy,
        ResourceCategory::IamRole,
    ];

    /// Stable kebab-case identifier used on the command line and in config keys.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::VectorIndex => "vector-index",
            Self::VectorBucket => "vector-bucket",
            Self::KnowledgeBase => "knowledge-base",
            Self::Guardrail => "guardrail",
            Self::EcrRepository => "ecr-repository",
            Self::CodeBuildProject => "codebuild-project",
            Self::IamPolicy => "iam-policy",
            Self::IamRole => "iam-role",
        }
    }

    /// Plural label used in the summary table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VectorIndex => "Vector Indexes",
            Self::VectorBucket => "Vector Buckets",
            Self::KnowledgeBase => "Knowledge Bases",
            Self::Guardrail => "Guardrails",
            Self::EcrRepository => "ECR Repositories",
            Self::CodeBuildProject => "CodeBuild Projects",
            Self::IamPolicy => "IAM Policies",
            Self::IamRole => "IAM Roles",
        }
    }

    /// Singular noun used in per-resource progress lines.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::VectorIndex => "vector index",
            Self::VectorBucket => "vector bucket",
            Self::KnowledgeBase => "knowledge base",
            Self::Guardrail => "guardrail",
            Self::EcrRepository => "ECR repository",
            Self::CodeBuildProject => "CodeBuild project",
            Self::IamPolicy => "IAM policy",
            Self::IamRole => "IAM role",
        }
    }

    /// Name prefix the course scripts give to resources of this category.
    #[must_use]
    pub fn default_prefix(self) -> &'static str {
        match self {
            Self::VectorIndex => "bedrock-vector-index",
            Self::VectorBucket => "bedrock-vector-bucket",
            Self::KnowledgeBase => "bedrock-knowledge-base-",
            Self::Guardrail => "aws-assistant-guardrail",
            Self::EcrRepository | Self::CodeBuildProject => "bedrock-agentcore-",
            Self::IamPolicy => "kb-service-role-",
            Self::IamRole => "kb-service-role",
        }
    }

    /// Comma-separated list of every slug, for error messages.
    #[must_use]
    pub fn valid_slugs() -> String {
        Self::ALL
            .iter()
            .map(|c| c.slug())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ResourceCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| ConfigError::UnknownCategory {
                category: s.to_string(),
                valid: Self::valid_slugs(),
            })
    }
}

// ── Descriptors ───────────────────────────────────────────────────────────────

/// A single listed cloud resource. Built fresh on every run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub category: ResourceCategory,
    pub name: String,
    /// Owning container, e.g. the vector bucket of an index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    /// Service-assigned id or ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl ResourceDescriptor {
    #[must_use]
    pub fn new(category: ResourceCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            parent_name: None,
            identifier: None,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_name = Some(parent.into());
        self
    }

    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Human-readable reference, e.g. `bedrock-vector-index-1 (in bedrock-vector-bucket-1)`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.parent_name, &self.identifier) {
            (Some(parent), _) => format!("{} (in {parent})", self.name),
            (None, Some(id)) if id != &self.name => format!("{} (ID: {id})", self.name),
            _ => self.name.clone(),
        }
    }
}

// ── Prefix gate ───────────────────────────────────────────────────────────────

/// Effective prefix for every category: the defaults, possibly overridden by
/// the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRules {
    prefixes: [String; ResourceCategory::COUNT],
}

impl Default for PrefixRules {
    fn default() -> Self {
        Self {
            prefixes: ResourceCategory::ALL.map(|c| c.default_prefix().to_string()),
        }
    }
}

impl PrefixRules {
    fn slot(category: ResourceCategory) -> usize {
        ResourceCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn prefix(&self, category: ResourceCategory) -> &str {
        &self.prefixes[Self::slot(category)]
    }

    /// Replace the prefix for one category. Callers validate the value first.
    pub fn set(&mut self, category: ResourceCategory, prefix: impl Into<String>) {
        self.prefixes[Self::slot(category)] = prefix.into();
    }

    /// The safety gate: `true` only when `name` starts with the category prefix.
    #[must_use]
    pub fn matches(&self, category: ResourceCategory, name: &str) -> bool {
        let prefix = self.prefix(category);
        !prefix.is_empty() && name.starts_with(prefix)
    }

    /// Keep only the descriptors that pass the gate for their own category.
    #[must_use]
    pub fn retain_matching(&self, resources: Vec<ResourceDescriptor>) -> Vec<ResourceDescriptor> {
        resources
            .into_iter()
            .filter(|r| self.matches(r.category, &r.name))
            .collect()
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
