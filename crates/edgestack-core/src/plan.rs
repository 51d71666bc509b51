//! Plan assembly: composes the firewall policy, buckets, distributions, DNS
//! records, parameters, exports, and the optional deployment role into one
//! immutable [`DistributionPlan`].
//!
//! Logical ids are fixed; physical names derive from the resource prefix and
//! environment name. The whole build is a single synchronous pass.

use std::collections::BTreeMap;

use edgestack_model::cloudfront::{
    BehaviorOptions, DistributionSpec, EdgeEventType, EdgeLambda, Origin, OriginAccessIdentity,
};
use edgestack_model::cloudfront::ErrorResponse;
use edgestack_model::iam::{Principal, RoleSpec};
use edgestack_model::lambda::{EdgeFunctionSpec, FunctionRuntime};
use edgestack_model::route53::AliasRecord;
use edgestack_model::s3::{BucketSpec, RemovalPolicy};
use edgestack_model::ssm::StringParameter;
use edgestack_model::template::{Resource, Template};
use edgestack_model::value::{Attribute, LogicalId, StackExport, TemplateValue};
use tracing::debug;

use crate::auth::{self, EdgeHandlers};
use crate::config::{PARAMETER_NAMESPACE, SiteConfig};
use crate::domain;
use crate::error::PlanResult;
use crate::role;
use crate::waf;

const IP_SET_ID: &str = "CloudfrontIpSet";
const WEB_ACL_ID: &str = "CloudfrontAcl";
const LOGGING_BUCKET_ID: &str = "LoggingBucket";
const CERTIFICATE_ID: &str = "CustomDomainCertificate";
const FRONTEND_BUCKET_ID: &str = "FrontendBucket";
const FRONTEND_OAI_ID: &str = "FrontendOriginAccessIdentity";
const FRONTEND_DISTRIBUTION_ID: &str = "FrontendDistribution";
const FRONTEND_RECORD_ID: &str = "FrontendAliasRecord";
const HTTP_HEADERS_ROLE_ID: &str = "HttpHeadersRole";
const HTTP_HEADERS_FUNCTION_ID: &str = "HttpHeadersFunction";
const USERGUIDE_BUCKET_ID: &str = "UserguideBucket";
const USERGUIDE_OAI_ID: &str = "UserguideOriginAccessIdentity";
const USERGUIDE_DISTRIBUTION_ID: &str = "UserguideDistribution";
const USERGUIDE_RECORD_ID: &str = "UserguideAliasRecord";
const DEPLOYMENT_ROLE_ID: &str = "DeploymentRole";

/// Placeholder origin for the auth path behaviors. Requests to those paths
/// are intercepted by the viewer-request functions and never reach it.
const AUTH_PLACEHOLDER_ORIGIN: &str = "example.org";

/// Comment attached to every origin access identity.
const OAI_COMMENT: &str = "Allows Read-Access from CloudFront";

/// Basic execution managed policy for the http-headers function role.
const LAMBDA_BASIC_EXECUTION_ARN: &str =
    "arn:aws:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole";

/// Logical ids of one site's externally relevant resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteHandles {
    /// The site's CDN distribution.
    pub distribution: LogicalId,
    /// The site's origin bucket.
    pub bucket: LogicalId,
}

/// The immutable result of a plan build.
///
/// Everything downstream consumers read — the declared template plus the
/// handles the deployment pipeline needs — is returned here; nothing is
/// accumulated in shared state during the build.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionPlan {
    /// The full declared resource graph.
    pub template: Template,
    /// Frontend site handles.
    pub frontend: SiteHandles,
    /// Userguide site handles.
    pub userguide: SiteHandles,
    /// Name of the cross-account deployment role, when one was declared.
    pub deployment_role_name: Option<String>,
}

/// Build the complete distribution plan for `config`.
///
/// # Errors
/// Fails fast when the config is invalid or any auth-at-edge function
/// version is missing; see [`crate::PlanError`].
pub fn build_plan(config: &SiteConfig) -> PlanResult<DistributionPlan> {
    config.validate()?;
    let handlers = auth::validate(&config.auth_at_edge)?;
    let resolution = domain::resolve(config.custom_domain.as_ref());

    let mut template = Template::new();

    // Firewall: optional IP set, then the ACL referencing it.
    let ip_set = waf::build_ip_set(config).map(|set| template.add(IP_SET_ID, Resource::IpSet(set)));
    let acl = waf::assemble_web_acl(config, ip_set.as_ref());
    let web_acl = template.add(WEB_ACL_ID, Resource::WebAcl(acl));
    let web_acl_arn = TemplateValue::attr(web_acl, Attribute::Arn);

    // Shared access-log bucket, retained on teardown.
    let logging_bucket = template.add(
        LOGGING_BUCKET_ID,
        Resource::Bucket(BucketSpec::private(RemovalPolicy::Retain).versioned()),
    );

    let certificate = resolution.as_ref().map(|resolved| {
        template.add(
            CERTIFICATE_ID,
            Resource::Certificate(resolved.certificate.clone()),
        )
    });

    // Frontend site: private origin bucket read through an OAI, no edge hooks.
    let frontend_oai = template.add(
        FRONTEND_OAI_ID,
        Resource::OriginAccessIdentity(OriginAccessIdentity {
            comment: OAI_COMMENT.to_owned(),
        }),
    );
    let frontend_bucket = template.add(
        FRONTEND_BUCKET_ID,
        Resource::Bucket(BucketSpec::private(RemovalPolicy::Destroy).grant_read(frontend_oai.clone())),
    );
    let frontend_distribution = template.add(
        FRONTEND_DISTRIBUTION_ID,
        Resource::Distribution(DistributionSpec {
            domain_names: resolution
                .as_ref()
                .map(|resolved| vec![resolved.frontend_domain.clone()]),
            certificate: certificate.clone(),
            ssl_support_method: resolution.as_ref().map(|resolved| resolved.ssl_support_method),
            minimum_protocol_version: resolution
                .as_ref()
                .map(|resolved| resolved.minimum_protocol_version),
            default_behavior: BehaviorOptions::new(Origin::S3 {
                bucket: frontend_bucket.clone(),
                origin_access_identity: frontend_oai,
            }),
            additional_behaviors: BTreeMap::new(),
            default_root_object: "index.html".to_owned(),
            error_responses: error_responses(),
            web_acl_arn: web_acl_arn.clone(),
            log_bucket: logging_bucket.clone(),
            log_file_prefix: "cloudfront-logs/frontend".to_owned(),
        }),
    );

    // Security-headers function attached to userguide viewer responses.
    let http_headers_role = template.add(
        HTTP_HEADERS_ROLE_ID,
        Resource::Role(http_headers_role(config)),
    );
    let http_headers_function = template.add(
        HTTP_HEADERS_FUNCTION_ID,
        Resource::EdgeFunction(http_headers_function(config, http_headers_role)),
    );

    // Userguide site: auth-at-edge hooks plus the auth path behaviors.
    let userguide_oai = template.add(
        USERGUIDE_OAI_ID,
        Resource::OriginAccessIdentity(OriginAccessIdentity {
            comment: OAI_COMMENT.to_owned(),
        }),
    );
    let userguide_bucket = template.add(
        USERGUIDE_BUCKET_ID,
        Resource::Bucket(BucketSpec::private(RemovalPolicy::Destroy).grant_read(userguide_oai.clone())),
    );
    let userguide_distribution = template.add(
        USERGUIDE_DISTRIBUTION_ID,
        Resource::Distribution(DistributionSpec {
            domain_names: resolution
                .as_ref()
                .map(|resolved| vec![resolved.userguide_domain.clone()]),
            certificate,
            ssl_support_method: resolution.as_ref().map(|resolved| resolved.ssl_support_method),
            minimum_protocol_version: resolution
                .as_ref()
                .map(|resolved| resolved.minimum_protocol_version),
            default_behavior: BehaviorOptions::new(Origin::S3 {
                bucket: userguide_bucket.clone(),
                origin_access_identity: userguide_oai,
            })
            .compressed()
            .with_edge_lambda(EdgeLambda::new(
                EdgeEventType::ViewerRequest,
                TemplateValue::literal(&handlers.check_auth),
            ))
            .with_edge_lambda(EdgeLambda::new(
                EdgeEventType::ViewerResponse,
                TemplateValue::attr(http_headers_function, Attribute::Version),
            )),
            additional_behaviors: auth_path_behaviors(&handlers),
            default_root_object: "index.html".to_owned(),
            error_responses: error_responses(),
            web_acl_arn,
            log_bucket: logging_bucket,
            log_file_prefix: "cloudfront-logs/userguide".to_owned(),
        }),
    );

    // DNS aliases, only with a custom domain.
    if let Some(resolved) = &resolution {
        template.add(
            FRONTEND_RECORD_ID,
            Resource::AliasRecord(AliasRecord {
                record_name: resolved.frontend_domain.clone(),
                zone: resolved.hosted_zone.clone(),
                target_distribution: frontend_distribution.clone(),
            }),
        );
        template.add(
            USERGUIDE_RECORD_ID,
            Resource::AliasRecord(AliasRecord {
                record_name: resolved.userguide_domain.clone(),
                zone: resolved.hosted_zone.clone(),
                target_distribution: userguide_distribution.clone(),
            }),
        );
    }

    // Parameter triplets: environment-scoped for the frontend, the fixed
    // docs path for the userguide.
    let frontend_path = format!("/{PARAMETER_NAMESPACE}/{}", config.envname);
    store_distribution_params(
        &mut template,
        "Frontend",
        &frontend_path,
        &frontend_distribution,
        &frontend_bucket,
    );
    let userguide_path = format!("/{PARAMETER_NAMESPACE}/{}/cloudfront/docs/user", config.envname);
    store_distribution_params(
        &mut template,
        "Userguide",
        &userguide_path,
        &userguide_distribution,
        &userguide_bucket,
    );

    // Cross-account deployment role, only with a tooling account.
    let deployment_role_name = config.tooling_account_id.as_ref().map(|tooling| {
        let spec = role::deployment_role(config, tooling, &frontend_bucket, &userguide_bucket);
        let name = spec.role_name.clone();
        template.add(DEPLOYMENT_ROLE_ID, Resource::Role(spec));
        name
    });

    // Frontend exports for cross-stack consumption.
    let env = &config.envname;
    template.export(StackExport::new(
        format!("OutputCfnFrontDistribution{env}"),
        TemplateValue::attr(frontend_distribution.clone(), Attribute::Id),
    ));
    template.export(StackExport::new(
        format!("OutputCfnFrontDistributionDomainName{env}"),
        TemplateValue::attr(frontend_distribution.clone(), Attribute::DomainName),
    ));
    template.export(StackExport::new(
        format!("OutputCfnFrontDistributionBucket{env}"),
        TemplateValue::attr(frontend_bucket.clone(), Attribute::Name),
    ));

    debug!(
        resources = template.len(),
        custom_domain = resolution.is_some(),
        deployment_role = deployment_role_name.is_some(),
        "built distribution plan",
    );

    Ok(DistributionPlan {
        template,
        frontend: SiteHandles {
            distribution: frontend_distribution,
            bucket: frontend_bucket,
        },
        userguide: SiteHandles {
            distribution: userguide_distribution,
            bucket: userguide_bucket,
        },
        deployment_role_name,
    })
}

/// The error mapping both distributions share: origin 404/403 serve the SPA
/// index so client-side routing can take over, never cached.
fn error_responses() -> Vec<ErrorResponse> {
    vec![
        ErrorResponse {
            http_status: 404,
            response_http_status: 404,
            ttl_seconds: 0,
            response_page_path: "/index.html".to_owned(),
        },
        ErrorResponse {
            http_status: 403,
            response_http_status: 403,
            ttl_seconds: 0,
            response_page_path: "/index.html".to_owned(),
        },
    ]
}

/// The three auth path behaviors, each intercepted by its own function.
fn auth_path_behaviors(handlers: &EdgeHandlers) -> BTreeMap<String, BehaviorOptions> {
    [
        ("/parseauth", &handlers.parse_auth),
        ("/refreshauth", &handlers.refresh_auth),
        ("/signout", &handlers.sign_out),
    ]
    .into_iter()
    .map(|(path, version)| (path.to_owned(), auth_path_behavior(version)))
    .collect()
}

/// One auth path behavior: placeholder origin, viewer-request hook.
fn auth_path_behavior(function_version: &str) -> BehaviorOptions {
    BehaviorOptions::new(Origin::Http {
        domain_name: AUTH_PLACEHOLDER_ORIGIN.to_owned(),
    })
    .compressed()
    .with_edge_lambda(EdgeLambda::new(
        EdgeEventType::ViewerRequest,
        TemplateValue::literal(function_version),
    ))
}

/// Execution role for the http-headers function, assumable by both the
/// edge-compute and compute service principals.
fn http_headers_role(config: &SiteConfig) -> RoleSpec {
    RoleSpec {
        role_name: config.scoped_name("httpheaders-role"),
        assumed_by: Principal::Composite {
            principals: vec![
                Principal::service("edgelambda.amazonaws.com"),
                Principal::service("lambda.amazonaws.com"),
            ],
        },
        managed_policy_arns: vec![LAMBDA_BASIC_EXECUTION_ARN.to_owned()],
        inline_statements: Vec::new(),
    }
}

/// The http-headers function declared by this plan.
fn http_headers_function(config: &SiteConfig, role: LogicalId) -> EdgeFunctionSpec {
    EdgeFunctionSpec {
        function_name: config.scoped_name("httpheaders-redirection"),
        description: "Edge function to set security policy headers for docs".to_owned(),
        handler: "index.handler".to_owned(),
        runtime: FunctionRuntime::Nodejs14,
        memory_size: 128,
        timeout_seconds: 5,
        role,
    }
}

/// Write one site's id/domain/bucket parameter triplet under `param_path`.
fn store_distribution_params(
    template: &mut Template,
    logical_prefix: &str,
    param_path: &str,
    distribution: &LogicalId,
    bucket: &LogicalId,
) {
    template.add(
        format!("{logical_prefix}DistributionIdParameter"),
        Resource::StringParameter(StringParameter::new(
            format!("{param_path}/CloudfrontDistributionId"),
            TemplateValue::attr(distribution.clone(), Attribute::Id),
        )),
    );
    template.add(
        format!("{logical_prefix}DistributionDomainParameter"),
        Resource::StringParameter(StringParameter::new(
            format!("{param_path}/CloudfrontDistributionDomainName"),
            TemplateValue::attr(distribution.clone(), Attribute::DomainName),
        )),
    );
    template.add(
        format!("{logical_prefix}DistributionBucketParameter"),
        Resource::StringParameter(StringParameter::new(
            format!("{param_path}/CloudfrontDistributionBucket"),
            TemplateValue::attr(bucket.clone(), Attribute::Name),
        )),
    );
}
