//! Cross-account deployment role assembly.
//!
//! When a tooling account id is configured, the plan declares a role that
//! account can assume to publish site content and invalidate the CDN cache.
//! Without one, no role is declared at all.

use edgestack_model::iam::{PolicyStatement, Principal, RoleSpec};
use edgestack_model::value::{Attribute, LogicalId, TemplateValue};

use crate::config::{PARAMETER_NAMESPACE, SiteConfig};
use crate::types::AccountId;

/// Build the deployment role for `tooling_account`.
///
/// The role carries exactly four statements: object read/write on the two
/// origin buckets, cache invalidation plus global list, parameter reads on
/// the namespaced paths, and read on the app monitor.
pub(crate) fn deployment_role(
    config: &SiteConfig,
    tooling_account: &AccountId,
    frontend_bucket: &LogicalId,
    userguide_bucket: &LogicalId,
) -> RoleSpec {
    let account = config.account_id.as_str();
    let prefix = &config.resource_prefix;

    let object_access = PolicyStatement::new(
        vec!["s3:Get*".to_owned(), "s3:Put*".to_owned()],
        vec![
            TemplateValue::attr_suffixed(frontend_bucket.clone(), Attribute::Arn, "/*"),
            TemplateValue::attr_suffixed(userguide_bucket.clone(), Attribute::Arn, "/*"),
        ],
    );

    let invalidation = PolicyStatement::new(
        vec![
            "cloudfront:CreateInvalidation".to_owned(),
            "s3:List*".to_owned(),
        ],
        vec![TemplateValue::literal("*")],
    );

    let parameter_reads = PolicyStatement::new(
        vec![
            "ssm:GetParameterHistory".to_owned(),
            "ssm:GetParametersByPath".to_owned(),
            "ssm:GetParameters".to_owned(),
            "ssm:GetParameter".to_owned(),
        ],
        vec![
            TemplateValue::literal(format!(
                "arn:aws:ssm:*:{account}:parameter/*{PARAMETER_NAMESPACE}*"
            )),
            TemplateValue::literal(format!("arn:aws:ssm:*:{account}:parameter/*{prefix}*")),
        ],
    );

    let monitor_read = PolicyStatement::new(
        vec!["rum:GetAppMonitor".to_owned()],
        vec![TemplateValue::literal(format!(
            "arn:aws:rum:*:{account}:appmonitor/*{prefix}*"
        ))],
    );

    RoleSpec {
        role_name: config.scoped_name("S3DeploymentRole"),
        assumed_by: Principal::account(tooling_account.as_str()),
        managed_policy_arns: Vec::new(),
        inline_statements: vec![object_access, invalidation, parameter_reads, monitor_read],
    }
}
