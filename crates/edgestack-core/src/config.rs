//! Site configuration consumed by the planner.
//!
//! [`SiteConfig`] is the single input record. It deserializes from camelCase
//! JSON (the shape the synth CLI reads) and builds programmatically through
//! the typed builder. Optional concerns — custom domain, firewall
//! allow-lists, cross-account tooling — are `Option` fields; absence means
//! the corresponding resources are simply not declared.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{PlanError, PlanResult};
use crate::types::AccountId;

/// Parameter-store namespace shared by every environment of this app.
pub(crate) const PARAMETER_NAMESPACE: &str = "edgestack";

/// Default environment name.
const DEFAULT_ENVNAME: &str = "dev";

/// Default resource-name prefix.
const DEFAULT_RESOURCE_PREFIX: &str = "edgestack";

/// Custom domain configuration for both distributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    /// Apex name of the hosted zone, also the frontend host name.
    pub hosted_zone_name: String,
    /// Id of the pre-existing hosted zone.
    pub hosted_zone_id: String,
    /// ARN of a pre-existing certificate. When absent a DNS-validated
    /// certificate is requested against the zone.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
}

/// Firewall allow-lists. An empty list means the corresponding rule is not
/// generated at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct WafAllowLists {
    /// Allowed two-letter country codes; requests from elsewhere are blocked.
    #[builder(default)]
    #[serde(default)]
    pub allowed_geo_list: Vec<String>,
    /// Allowed source CIDR blocks; requests from elsewhere are blocked.
    #[builder(default)]
    #[serde(default)]
    pub allowed_ip_list: Vec<String>,
}

impl WafAllowLists {
    /// The geo allow-list, or `None` when not configured.
    #[must_use]
    pub fn geo(&self) -> Option<&[String]> {
        if self.allowed_geo_list.is_empty() {
            None
        } else {
            Some(&self.allowed_geo_list)
        }
    }

    /// The ip allow-list, or `None` when not configured.
    #[must_use]
    pub fn ip(&self) -> Option<&[String]> {
        if self.allowed_ip_list.is_empty() {
            None
        } else {
            Some(&self.allowed_ip_list)
        }
    }
}

/// Published outputs of the auth-at-edge collaborator stack: version
/// identifiers of the five edge functions the userguide distribution wires
/// in. All five are required; validation happens at plan time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct AuthAtEdgeOutputs {
    /// Version identifier of the parse-auth function.
    #[builder(default)]
    #[serde(default)]
    pub parse_auth_handler: String,
    /// Version identifier of the refresh-auth function.
    #[builder(default)]
    #[serde(default)]
    pub refresh_auth_handler: String,
    /// Version identifier of the sign-out function.
    #[builder(default)]
    #[serde(default)]
    pub sign_out_handler: String,
    /// Version identifier of the check-auth function.
    #[builder(default)]
    #[serde(default)]
    pub check_auth_handler: String,
    /// Version identifier of the collaborator's http-headers function.
    #[builder(default)]
    #[serde(default)]
    pub http_headers_handler: String,
}

/// Complete input to [`build_plan`](crate::build_plan).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Environment name, used in parameter paths and export names.
    #[builder(default = String::from(DEFAULT_ENVNAME))]
    #[serde(default = "default_envname")]
    pub envname: String,

    /// Prefix for physical resource names.
    #[builder(default = String::from(DEFAULT_RESOURCE_PREFIX))]
    #[serde(default = "default_resource_prefix")]
    pub resource_prefix: String,

    /// Account the plan is deployed into; used in policy resource ARNs.
    pub account_id: AccountId,

    /// Custom domain for both distributions, or `None` for the CDN defaults.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<DomainConfig>,

    /// Firewall allow-lists, or `None` for the managed rules only.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waf_allow_lists: Option<WafAllowLists>,

    /// Tooling account granted cross-account deployment access, or `None`
    /// to skip the deployment role entirely.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooling_account_id: Option<AccountId>,

    /// Auth-at-edge collaborator outputs.
    pub auth_at_edge: AuthAtEdgeOutputs,
}

fn default_envname() -> String {
    DEFAULT_ENVNAME.to_owned()
}

fn default_resource_prefix() -> String {
    DEFAULT_RESOURCE_PREFIX.to_owned()
}

impl SiteConfig {
    /// Validate invariants serde cannot enforce.
    ///
    /// # Errors
    /// Returns an error for malformed account ids or an empty environment
    /// name or resource prefix.
    pub fn validate(&self) -> PlanResult<()> {
        if self.envname.trim().is_empty() {
            return Err(PlanError::Config("envname must not be empty".to_owned()));
        }
        if self.resource_prefix.trim().is_empty() {
            return Err(PlanError::Config(
                "resourcePrefix must not be empty".to_owned(),
            ));
        }
        self.account_id.validate()?;
        if let Some(tooling) = &self.tooling_account_id {
            tooling.validate()?;
        }
        Ok(())
    }

    /// `{prefix}-{envname}` name fragment used by most physical names.
    #[must_use]
    pub(crate) fn scoped_name(&self, suffix: &str) -> String {
        format!("{}-{}-{}", self.resource_prefix, self.envname, suffix)
    }
}
