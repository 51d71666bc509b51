//! Integration tests for the EdgeStack distribution planner.
//!
//! Each module builds complete plans through the public API and inspects the
//! declared template the way a deployment pipeline would consume it. No
//! external services are involved; the planner is a pure build.

use std::sync::Once;

use edgestack_core::{
    AccountId, AuthAtEdgeOutputs, DistributionPlan, DomainConfig, SiteConfig, SiteHandles,
    WafAllowLists,
};
use edgestack_model::cloudfront::DistributionSpec;
use edgestack_model::iam::RoleSpec;
use edgestack_model::route53::AliasRecord;
use edgestack_model::ssm::StringParameter;
use edgestack_model::template::Resource;
use edgestack_model::waf::WebAcl;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Collaborator outputs with all five edge functions published.
#[must_use]
pub fn auth_outputs() -> AuthAtEdgeOutputs {
    AuthAtEdgeOutputs::builder()
        .parse_auth_handler("arn:aws:lambda:us-east-1:123456789012:function:parse-auth:3".to_owned())
        .refresh_auth_handler(
            "arn:aws:lambda:us-east-1:123456789012:function:refresh-auth:3".to_owned(),
        )
        .sign_out_handler("arn:aws:lambda:us-east-1:123456789012:function:sign-out:3".to_owned())
        .check_auth_handler("arn:aws:lambda:us-east-1:123456789012:function:check-auth:3".to_owned())
        .http_headers_handler(
            "arn:aws:lambda:us-east-1:123456789012:function:http-headers:3".to_owned(),
        )
        .build()
}

/// A minimal valid configuration: no custom domain, no allow-lists, no
/// tooling account.
#[must_use]
pub fn base_config() -> SiteConfig {
    init_tracing();
    SiteConfig::builder()
        .account_id(AccountId::new("123456789012").expect("valid account"))
        .auth_at_edge(auth_outputs())
        .build()
}

/// A configuration with the given allow-lists; an empty slice means the list
/// is not configured.
#[must_use]
pub fn config_with_lists(geo: &[&str], ip: &[&str]) -> SiteConfig {
    init_tracing();
    let lists = WafAllowLists::builder()
        .allowed_geo_list(geo.iter().map(ToString::to_string).collect())
        .allowed_ip_list(ip.iter().map(ToString::to_string).collect())
        .build();
    SiteConfig::builder()
        .account_id(AccountId::new("123456789012").expect("valid account"))
        .waf_allow_lists(Some(lists))
        .auth_at_edge(auth_outputs())
        .build()
}

/// A configuration with a custom domain, optionally referencing an existing
/// certificate.
#[must_use]
pub fn config_with_domain(certificate_arn: Option<&str>) -> SiteConfig {
    init_tracing();
    let domain = DomainConfig::builder()
        .hosted_zone_name("data.example.com".to_owned())
        .hosted_zone_id("Z0123456789ABC".to_owned())
        .certificate_arn(certificate_arn.map(ToOwned::to_owned))
        .build();
    SiteConfig::builder()
        .account_id(AccountId::new("123456789012").expect("valid account"))
        .custom_domain(Some(domain))
        .auth_at_edge(auth_outputs())
        .build()
}

/// The plan's web ACL.
#[must_use]
pub fn web_acl(plan: &DistributionPlan) -> &WebAcl {
    plan.template
        .resources
        .values()
        .find_map(|resource| match resource {
            Resource::WebAcl(acl) => Some(acl),
            _ => None,
        })
        .expect("web acl declared")
}

/// The distribution spec behind a site handle.
#[must_use]
pub fn distribution<'a>(plan: &'a DistributionPlan, site: &SiteHandles) -> &'a DistributionSpec {
    match plan.template.get(&site.distribution) {
        Some(Resource::Distribution(spec)) => spec,
        _ => panic!("distribution {} not declared", site.distribution),
    }
}

/// All DNS alias records in the plan, in logical id order.
#[must_use]
pub fn alias_records(plan: &DistributionPlan) -> Vec<&AliasRecord> {
    plan.template
        .resources
        .values()
        .filter_map(|resource| match resource {
            Resource::AliasRecord(record) => Some(record),
            _ => None,
        })
        .collect()
}

/// All parameter-store entries in the plan, in logical id order.
#[must_use]
pub fn string_parameters(plan: &DistributionPlan) -> Vec<&StringParameter> {
    plan.template
        .resources
        .values()
        .filter_map(|resource| match resource {
            Resource::StringParameter(param) => Some(param),
            _ => None,
        })
        .collect()
}

/// The cross-account deployment role, when declared.
#[must_use]
pub fn deployment_role(plan: &DistributionPlan) -> Option<&RoleSpec> {
    plan.template
        .resources
        .values()
        .find_map(|resource| match resource {
            Resource::Role(role) if role.role_name.ends_with("S3DeploymentRole") => Some(role),
            _ => None,
        })
}

mod test_domain;
mod test_firewall;
mod test_outputs;
