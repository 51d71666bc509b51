//! Web application firewall resource shapes.
//!
//! Models an edge-scoped web ACL: an ordered, prioritized rule list with a
//! default-allow action, plus the optional IP set an ip-allow rule references.
//! Managed rule group names are passed through verbatim; the firewall service
//! resolves them by name.

use serde::{Deserialize, Serialize};

use crate::value::TemplateValue;

/// Scope a firewall policy is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WafScope {
    /// Evaluated at the CDN edge.
    #[default]
    #[serde(rename = "CLOUDFRONT")]
    Cloudfront,
    /// Evaluated in front of regional resources.
    #[serde(rename = "REGIONAL")]
    Regional,
}

impl WafScope {
    /// Returns the string value of this scope.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cloudfront => "CLOUDFRONT",
            Self::Regional => "REGIONAL",
        }
    }
}

/// Per-rule (and per-ACL) metrics and sampling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityConfig {
    /// Whether sampled requests are stored.
    pub sampled_requests_enabled: bool,
    /// Whether metrics are published.
    pub cloud_watch_metrics_enabled: bool,
    /// Metric name for this rule or ACL.
    pub metric_name: String,
}

impl VisibilityConfig {
    /// Visibility config with sampling and metrics on, named `metric_name`.
    #[must_use]
    pub fn named(metric_name: impl Into<String>) -> Self {
        Self {
            sampled_requests_enabled: true,
            cloud_watch_metrics_enabled: true,
            metric_name: metric_name.into(),
        }
    }
}

/// The six vendor-managed rule groups every policy carries, in evaluation
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManagedRuleGroup {
    /// Protection for admin pages.
    AdminProtection,
    /// Amazon IP reputation list.
    IpReputation,
    /// Common (core) rule set.
    Common,
    /// Known bad inputs.
    KnownBadInputs,
    /// Linux operating system rules.
    Linux,
    /// SQL injection rules.
    Sqli,
}

impl ManagedRuleGroup {
    /// All managed groups in the fixed evaluation order.
    pub const ALL: [Self; 6] = [
        Self::AdminProtection,
        Self::IpReputation,
        Self::Common,
        Self::KnownBadInputs,
        Self::Linux,
        Self::Sqli,
    ];

    /// The vendor's rule group identifier, passed through verbatim.
    #[must_use]
    pub fn group_name(&self) -> &'static str {
        match self {
            Self::AdminProtection => "AWSManagedRulesAdminProtectionRuleSet",
            Self::IpReputation => "AWSManagedRulesAmazonIpReputationList",
            Self::Common => "AWSManagedRulesCommonRuleSet",
            Self::KnownBadInputs => "AWSManagedRulesKnownBadInputsRuleSet",
            Self::Linux => "AWSManagedRulesLinuxRuleSet",
            Self::Sqli => "AWSManagedRulesSQLiRuleSet",
        }
    }

    /// The rule name used in the policy (`AWS-` + group identifier).
    #[must_use]
    pub fn rule_name(&self) -> String {
        format!("AWS-{}", self.group_name())
    }
}

/// Predicate a firewall rule matches requests against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleStatement {
    /// Matches requests whose country is NOT in the allow-list.
    GeoNotMatch {
        /// Allowed two-letter country codes.
        country_codes: Vec<String>,
    },
    /// Matches requests whose source address is NOT in the referenced IP set.
    IpSetNotReference {
        /// ARN of the IP set, resolved at deploy time.
        ip_set_arn: TemplateValue,
    },
    /// Delegates matching to a vendor-managed rule group.
    ManagedRuleGroup {
        /// Rule group vendor.
        vendor_name: String,
        /// Rule group name, passed through verbatim.
        name: String,
    },
}

/// Action taken when a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleAction {
    /// Block the request.
    Block,
    /// Honor the managed group's own per-rule actions (override: none).
    DelegateToManaged,
}

/// One prioritized rule in a firewall policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRule {
    /// Rule name, also used as the metric name.
    pub name: String,
    /// Evaluation priority. Unique and contiguous from 0 within a policy.
    pub priority: u32,
    /// Match predicate.
    pub statement: RuleStatement,
    /// Action on match.
    pub action: RuleAction,
    /// Metrics and sampling settings.
    pub visibility_config: VisibilityConfig,
}

/// Default action when no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefaultAction {
    /// Allow the request.
    #[default]
    Allow,
    /// Block the request.
    Block,
}

/// An edge-scoped web ACL: default allow plus an ordered rule sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAcl {
    /// Action when no rule matches.
    pub default_action: DefaultAction,
    /// Where the policy is evaluated.
    pub scope: WafScope,
    /// ACL-level metrics settings.
    pub visibility_config: VisibilityConfig,
    /// Rules in priority order.
    pub rules: Vec<FirewallRule>,
}

/// A named set of allowed source addresses referenced by an ip-allow rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpSet {
    /// Physical name of the set.
    pub name: String,
    /// Operator-facing description.
    pub description: String,
    /// Allowed CIDR blocks.
    pub addresses: Vec<String>,
    /// Address family.
    pub ip_address_version: IpAddressVersion,
    /// Where the set is evaluated.
    pub scope: WafScope,
}

/// Address family of an [`IpSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IpAddressVersion {
    /// IPv4 addresses.
    #[default]
    #[serde(rename = "IPV4")]
    V4,
    /// IPv6 addresses.
    #[serde(rename = "IPV6")]
    V6,
}
