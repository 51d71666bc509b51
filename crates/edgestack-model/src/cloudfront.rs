//! CDN distribution shapes.
//!
//! A [`DistributionSpec`] maps request paths to origins with caching and
//! security policy, optional custom domains/TLS, optional edge-compute hooks,
//! and an error-response mapping. Managed policy identifiers (cache policy,
//! response headers policy) are referenced by name the way the CDN service
//! publishes them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::{LogicalId, TemplateValue};

/// How viewers are allowed to connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewerProtocolPolicy {
    /// Redirect HTTP to HTTPS.
    #[default]
    #[serde(rename = "redirect-to-https")]
    RedirectToHttps,
    /// Serve both HTTP and HTTPS.
    #[serde(rename = "allow-all")]
    AllowAll,
    /// HTTPS only, no redirect.
    #[serde(rename = "https-only")]
    HttpsOnly,
}

/// Vendor-managed cache policy, referenced by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CachePolicy {
    /// Long default TTLs with compression support.
    #[default]
    #[serde(rename = "CachingOptimized")]
    CachingOptimized,
    /// Pass-through, no caching.
    #[serde(rename = "CachingDisabled")]
    CachingDisabled,
}

/// Vendor-managed response headers policy, referenced by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResponseHeadersPolicy {
    /// The static security-headers bundle.
    #[default]
    #[serde(rename = "SecurityHeadersPolicy")]
    SecurityHeaders,
}

/// How TLS is served for custom domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SslSupportMethod {
    /// Server Name Indication.
    Sni,
    /// Dedicated IP addresses.
    Vip,
}

/// Minimum TLS protocol version negotiated with viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityPolicyProtocol {
    /// TLS 1.2, 2021 cipher suite.
    #[serde(rename = "TLSv1.2_2021")]
    TlsV12_2021,
    /// TLS 1.2, 2019 cipher suite.
    #[serde(rename = "TLSv1.2_2019")]
    TlsV12_2019,
}

/// Lifecycle event an edge function is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeEventType {
    /// Before the cache lookup, on every viewer request.
    ViewerRequest,
    /// After the response is assembled, before it reaches the viewer.
    ViewerResponse,
}

/// An edge function attachment: which event fires which function version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeLambda {
    /// Lifecycle event.
    pub event_type: EdgeEventType,
    /// Version identifier of the function to invoke.
    pub function_version: TemplateValue,
}

impl EdgeLambda {
    /// Attach `function_version` to `event_type`.
    #[must_use]
    pub fn new(event_type: EdgeEventType, function_version: TemplateValue) -> Self {
        Self {
            event_type,
            function_version,
        }
    }
}

/// Content source for a behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Origin {
    /// A private bucket read through an origin access identity.
    S3 {
        /// Logical id of the origin bucket.
        bucket: LogicalId,
        /// Logical id of the origin access identity granted read.
        origin_access_identity: LogicalId,
    },
    /// A plain HTTP(S) origin addressed by domain name.
    Http {
        /// Origin host name.
        domain_name: String,
    },
}

/// Per-path request handling: origin, policies, and edge hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorOptions {
    /// Where content is fetched from.
    pub origin: Origin,
    /// Viewer connection policy.
    pub viewer_protocol_policy: ViewerProtocolPolicy,
    /// Managed cache policy.
    pub cache_policy: CachePolicy,
    /// Managed response headers policy.
    pub response_headers_policy: ResponseHeadersPolicy,
    /// Whether compression is enabled.
    pub compress: bool,
    /// Edge function attachments, at most one per event type.
    pub edge_lambdas: Vec<EdgeLambda>,
}

impl BehaviorOptions {
    /// A behavior serving `origin` with the plan-wide policy defaults and no
    /// edge hooks.
    #[must_use]
    pub fn new(origin: Origin) -> Self {
        Self {
            origin,
            viewer_protocol_policy: ViewerProtocolPolicy::RedirectToHttps,
            cache_policy: CachePolicy::CachingOptimized,
            response_headers_policy: ResponseHeadersPolicy::SecurityHeaders,
            compress: false,
            edge_lambdas: Vec::new(),
        }
    }

    /// Enable compression.
    #[must_use]
    pub fn compressed(mut self) -> Self {
        self.compress = true;
        self
    }

    /// Attach an edge function.
    #[must_use]
    pub fn with_edge_lambda(mut self, lambda: EdgeLambda) -> Self {
        self.edge_lambdas.push(lambda);
        self
    }
}

/// Custom error mapping: serve `response_page_path` for `http_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Origin status code being mapped.
    pub http_status: u16,
    /// Status code returned to the viewer.
    pub response_http_status: u16,
    /// How long the mapping is cached, in seconds.
    pub ttl_seconds: u64,
    /// Page served instead of the origin error.
    pub response_page_path: String,
}

/// A full CDN distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSpec {
    /// Custom domain names, absent when the default CDN domain is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_names: Option<Vec<String>>,
    /// TLS certificate for the custom domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<LogicalId>,
    /// How TLS is served, set only with custom domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_support_method: Option<SslSupportMethod>,
    /// Minimum TLS version, set only with custom domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_protocol_version: Option<SecurityPolicyProtocol>,
    /// Behavior for requests matching no additional path pattern.
    pub default_behavior: BehaviorOptions,
    /// Path-pattern behaviors, ordered by pattern.
    pub additional_behaviors: BTreeMap<String, BehaviorOptions>,
    /// Object served for the root URL.
    pub default_root_object: String,
    /// Error-response mappings.
    pub error_responses: Vec<ErrorResponse>,
    /// ARN of the firewall policy guarding the distribution.
    pub web_acl_arn: TemplateValue,
    /// Access-log target bucket.
    pub log_bucket: LogicalId,
    /// Key prefix for access logs.
    pub log_file_prefix: String,
}

/// A CDN-side principal granted read on a private origin bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginAccessIdentity {
    /// Operator-facing comment.
    pub comment: String,
}
