//! Infrastructure implementation of the resource ports on top of the AWS SDK.
//!
//! `AwsGateway` owns one client per service and maps each
//! [`ResourceCategory`] to its list and delete calls. All list calls follow
//! pagination to the end.

use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_iam::types::PolicyScopeType;
use aws_smithy_types::error::display::DisplayErrorContext;
use tracing::debug;

use crate::application::ports::{ResourceLister, ResourceRemover};
use crate::domain::{ResourceCategory, ResourceDescriptor};

/// Production gateway backed by the AWS SDK clients.
pub struct AwsGateway {
    bedrock: aws_sdk_bedrock::Client,
    bedrock_agent: aws_sdk_bedrockagent::Client,
    s3vectors: aws_sdk_s3vectors::Client,
    ecr: aws_sdk_ecr::Client,
    codebuild: aws_sdk_codebuild::Client,
    iam: aws_sdk_iam::Client,
}

impl AwsGateway {
    /// Build every service client from one shared SDK configuration.
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            bedrock: aws_sdk_bedrock::Client::new(config),
            bedrock_agent: aws_sdk_bedrockagent::Client::new(config),
            s3vectors: aws_sdk_s3vectors::Client::new(config),
            ecr: aws_sdk_ecr::Client::new(config),
            codebuild: aws_sdk_codebuild::Client::new(config),
            iam: aws_sdk_iam::Client::new(config),
        }
    }
}

/// Flatten an SDK error and its sources into one message.
///
/// `SdkError`'s own `Display` only says "service error"; the code and
/// message of the service response live in the source chain.
fn sdk_error<E: std::error::Error>(err: E) -> anyhow::Error {
    anyhow::anyhow!("{}", DisplayErrorContext(&err))
}

fn required<'a>(
    value: Option<&'a str>,
    what: &str,
    resource: &ResourceDescriptor,
) -> Result<&'a str> {
    value.with_context(|| format!("{what} missing for {}", resource.name))
}

// ── Listing ───────────────────────────────────────────────────────────────────

impl ResourceLister for AwsGateway {
    async fn list(
        &self,
        category: ResourceCategory,
        parent: Option<&str>,
    ) -> Result<Vec<ResourceDescriptor>> {
        debug!(category = %category, parent, "listing");
        match category {
            ResourceCategory::VectorIndex => {
                let bucket = parent.context("vector indexes can only be listed per bucket")?;
                self.list_vector_indexes(bucket).await
            }
            ResourceCategory::VectorBucket => self.list_vector_buckets().await,
            ResourceCategory::KnowledgeBase => self.list_knowledge_bases().await,
            ResourceCategory::Guardrail => self.list_guardrails().await,
            ResourceCategory::EcrRepository => self.list_ecr_repositories().await,
            ResourceCategory::CodeBuildProject => self.list_codebuild_projects().await,
            ResourceCategory::IamPolicy => self.list_iam_policies().await,
            ResourceCategory::IamRole => self.list_iam_roles().await,
        }
    }
}

impl AwsGateway {
    async fn list_vector_buckets(&self) -> Result<Vec<ResourceDescriptor>> {
        let mut found = Vec::new();
        let mut pages = self.s3vectors.list_vector_buckets().into_paginator().send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(sdk_error)?;
            for bucket in page.vector_buckets() {
                found.push(
                    ResourceDescriptor::new(
                        ResourceCategory::VectorBucket,
                        bucket.vector_bucket_name(),
                    )
                    .with_identifier(bucket.vector_bucket_arn()),
                );
            }
        }
        Ok(found)
    }

    async fn list_vector_indexes(&self, bucket: &str) -> Result<Vec<ResourceDescriptor>> {
        let mut found = Vec::new();
        let mut pages = self
            .s3vectors
            .list_indexes()
            .vector_bucket_name(bucket)
            .into_paginator()
            .send();
        while let Some(page) = pages.next().await {
            let page = page
                .map_err(sdk_error)
                .with_context(|| format!("listing indexes of {bucket}"))?;
            for index in page.indexes() {
                found.push(
                    ResourceDescriptor::new(ResourceCategory::VectorIndex, index.index_name())
                        .with_parent(bucket)
                        .with_identifier(index.index_arn()),
                );
            }
        }
        Ok(found)
    }

    async fn list_knowledge_bases(&self) -> Result<Vec<ResourceDescriptor>> {
        let mut found = Vec::new();
        let mut pages = self
            .bedrock_agent
            .list_knowledge_bases()
            .into_paginator()
            .send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(sdk_error)?;
            for kb in page.knowledge_base_summaries() {
                found.push(
                    ResourceDescriptor::new(ResourceCategory::KnowledgeBase, kb.name())
                        .with_identifier(kb.knowledge_base_id()),
                );
            }
        }
        Ok(found)
    }

    async fn list_guardrails(&self) -> Result<Vec<ResourceDescriptor>> {
        let mut found = Vec::new();
        let mut pages = self.bedrock.list_guardrails().into_paginator().send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(sdk_error)?;
            for guardrail in page.guardrails() {
                found.push(
                    ResourceDescriptor::new(ResourceCategory::Guardrail, guardrail.name())
                        .with_identifier(guardrail.id()),
                );
            }
        }
        Ok(found)
    }

    async fn list_ecr_repositories(&self) -> Result<Vec<ResourceDescriptor>> {
        let mut found = Vec::new();
        let mut pages = self.ecr.describe_repositories().into_paginator().send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(sdk_error)?;
            for repo in page.repositories() {
                let Some(name) = repo.repository_name() else {
                    continue;
                };
                let mut descriptor = ResourceDescriptor::new(ResourceCategory::EcrRepository, name);
                if let Some(arn) = repo.repository_arn() {
                    descriptor = descriptor.with_identifier(arn);
                }
                found.push(descriptor);
            }
        }
        Ok(found)
    }

    async fn list_codebuild_projects(&self) -> Result<Vec<ResourceDescriptor>> {
        let mut found = Vec::new();
        let mut pages = self.codebuild.list_projects().into_paginator().send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(sdk_error)?;
            found.extend(
                page.projects()
                    .iter()
                    .map(|name| ResourceDescriptor::new(ResourceCategory::CodeBuildProject, name)),
            );
        }
        Ok(found)
    }

    async fn list_iam_policies(&self) -> Result<Vec<ResourceDescriptor>> {
        let mut found = Vec::new();
        let mut pages = self
            .iam
            .list_policies()
            .scope(PolicyScopeType::Local)
            .into_paginator()
            .send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(sdk_error)?;
            for policy in page.policies() {
                let (Some(name), Some(arn)) = (policy.policy_name(), policy.arn()) else {
                    continue;
                };
                found.push(
                    ResourceDescriptor::new(ResourceCategory::IamPolicy, name).with_identifier(arn),
                );
            }
        }
        Ok(found)
    }

    async fn list_iam_roles(&self) -> Result<Vec<ResourceDescriptor>> {
        let mut found = Vec::new();
        let mut pages = self.iam.list_roles().into_paginator().send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(sdk_error)?;
            for role in page.roles() {
                found.push(
                    ResourceDescriptor::new(ResourceCategory::IamRole, role.role_name())
                        .with_identifier(role.arn()),
                );
            }
        }
        Ok(found)
    }
}

// ── Deletion ──────────────────────────────────────────────────────────────────

impl ResourceRemover for AwsGateway {
    async fn delete(&self, resource: &ResourceDescriptor) -> Result<()> {
        debug!(category = %resource.category, name = %resource.name, "deleting");
        match resource.category {
            ResourceCategory::VectorIndex => {
                let bucket = required(resource.parent_name.as_deref(), "owning bucket", resource)?;
                self.s3vectors
                    .delete_index()
                    .vector_bucket_name(bucket)
                    .index_name(&resource.name)
                    .send()
                    .await
                    .map_err(sdk_error)?;
            }
            ResourceCategory::VectorBucket => {
                self.s3vectors
                    .delete_vector_bucket()
                    .vector_bucket_name(&resource.name)
                    .send()
                    .await
                    .map_err(sdk_error)?;
            }
            ResourceCategory::KnowledgeBase => {
                let id = required(resource.identifier.as_deref(), "knowledge base ID", resource)?;
                self.bedrock_agent
                    .delete_knowledge_base()
                    .knowledge_base_id(id)
                    .send()
                    .await
                    .map_err(sdk_error)?;
            }
            ResourceCategory::Guardrail => {
                let id = required(resource.identifier.as_deref(), "guardrail ID", resource)?;
                self.bedrock
                    .delete_guardrail()
                    .guardrail_identifier(id)
                    .send()
                    .await
                    .map_err(sdk_error)?;
            }
            ResourceCategory::EcrRepository => {
                self.ecr
                    .delete_repository()
                    .repository_name(&resource.name)
                    .force(true)
                    .send()
                    .await
                    .map_err(sdk_error)?;
            }
            ResourceCategory::CodeBuildProject => {
                self.codebuild
                    .delete_project()
                    .name(&resource.name)
                    .send()
                    .await
                    .map_err(sdk_error)?;
            }
            ResourceCategory::IamPolicy => {
                let arn = required(resource.identifier.as_deref(), "policy ARN", resource)?;
                self.delete_iam_policy(arn).await?;
            }
            ResourceCategory::IamRole => self.delete_iam_role(&resource.name).await?,
        }
        Ok(())
    }
}

impl AwsGateway {
    /// Detach a customer-managed policy from every role, user and group,
    /// drop its non-default versions, then delete it.
    async fn delete_iam_policy(&self, arn: &str) -> Result<()> {
        let mut pages = self
            .iam
            .list_entities_for_policy()
            .policy_arn(arn)
            .into_paginator()
            .send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(sdk_error).context("listing policy attachments")?;
            for role in page.policy_roles().iter().filter_map(|r| r.role_name()) {
                debug!(policy = arn, role, "detaching policy from role");
                self.iam
                    .detach_role_policy()
                    .role_name(role)
                    .policy_arn(arn)
                    .send()
                    .await
                    .map_err(sdk_error)
                    .with_context(|| format!("detaching from role {role}"))?;
            }
            for user in page.policy_users().iter().filter_map(|u| u.user_name()) {
                debug!(policy = arn, user, "detaching policy from user");
                self.iam
                    .detach_user_policy()
                    .user_name(user)
                    .policy_arn(arn)
                    .send()
                    .await
                    .map_err(sdk_error)
                    .with_context(|| format!("detaching from user {user}"))?;
            }
            for group in page.policy_groups().iter().filter_map(|g| g.group_name()) {
                debug!(policy = arn, group, "detaching policy from group");
                self.iam
                    .detach_group_policy()
                    .group_name(group)
                    .policy_arn(arn)
                    .send()
                    .await
                    .map_err(sdk_error)
                    .with_context(|| format!("detaching from group {group}"))?;
            }
        }

        let versions = self
            .iam
            .list_policy_versions()
            .policy_arn(arn)
            .send()
            .await
            .map_err(sdk_error)
            .context("listing policy versions")?;
        for version in versions.versions() {
            if version.is_default_version() {
                continue;
            }
            if let Some(version_id) = version.version_id() {
                self.iam
                    .delete_policy_version()
                    .policy_arn(arn)
                    .version_id(version_id)
                    .send()
                    .await
                    .map_err(sdk_error)
                    .with_context(|| format!("deleting policy version {version_id}"))?;
            }
        }

        self.iam
            .delete_policy()
            .policy_arn(arn)
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }

    /// Detach managed policies, delete inline policies, remove it from
    /// instance profiles, then delete the role.
    async fn delete_iam_role(&self, role: &str) -> Result<()> {
        let mut attached = self
            .iam
            .list_attached_role_policies()
            .role_name(role)
            .into_paginator()
            .send();
        while let Some(page) = attached.next().await {
            let page = page.map_err(sdk_error).context("listing attached policies")?;
            for arn in page.attached_policies().iter().filter_map(|p| p.policy_arn()) {
                debug!(role, policy = arn, "detaching managed policy");
                self.iam
                    .detach_role_policy()
                    .role_name(role)
                    .policy_arn(arn)
                    .send()
                    .await
                    .map_err(sdk_error)
                    .with_context(|| format!("detaching {arn}"))?;
            }
        }

        let mut inline = self
            .iam
            .list_role_policies()
            .role_name(role)
            .into_paginator()
            .send();
        while let Some(page) = inline.next().await {
            let page = page.map_err(sdk_error).context("listing inline policies")?;
            for name in page.policy_names() {
                debug!(role, policy = %name, "deleting inline policy");
                self.iam
                    .delete_role_policy()
                    .role_name(role)
                    .policy_name(name)
                    .send()
                    .await
                    .map_err(sdk_error)
                    .with_context(|| format!("deleting inline policy {name}"))?;
            }
        }

        let mut profiles = self
            .iam
            .list_instance_profiles_for_role()
            .role_name(role)
            .into_paginator()
            .send();
        while let Some(page) = profiles.next().await {
            let page = page.map_err(sdk_error).context("listing instance profiles")?;
            for profile in page.instance_profiles() {
                let profile_name = profile.instance_profile_name();
                self.iam
                    .remove_role_from_instance_profile()
                    .instance_profile_name(profile_name)
                    .role_name(role)
                    .send()
                    .await
                    .map_err(sdk_error)
                    .with_context(|| format!("removing from instance profile {profile_name}"))?;
            }
        }

        self.iam
            .delete_role()
            .role_name(role)
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }
}
