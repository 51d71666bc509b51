//! The synthesized template: every declared resource keyed by logical id,
//! plus the named outputs exported for cross-stack consumption.
//!
//! Resources are kept in a `BTreeMap` so serialization order is
//! deterministic regardless of insertion order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::acm::CertificateSpec;
use crate::cloudfront::{DistributionSpec, OriginAccessIdentity};
use crate::iam::RoleSpec;
use crate::lambda::EdgeFunctionSpec;
use crate::route53::AliasRecord;
use crate::s3::BucketSpec;
use crate::ssm::StringParameter;
use crate::value::{LogicalId, StackExport};
use crate::waf::{IpSet, WebAcl};

/// One declared resource, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "properties", rename_all = "camelCase")]
pub enum Resource {
    /// An edge firewall policy.
    WebAcl(WebAcl),
    /// A firewall IP allow-set.
    IpSet(IpSet),
    /// An origin or logging bucket.
    Bucket(BucketSpec),
    /// A CDN read principal for a private bucket.
    OriginAccessIdentity(OriginAccessIdentity),
    /// A CDN distribution.
    Distribution(DistributionSpec),
    /// A TLS certificate.
    Certificate(CertificateSpec),
    /// A DNS alias record.
    AliasRecord(AliasRecord),
    /// An IAM role.
    Role(RoleSpec),
    /// An edge function.
    EdgeFunction(EdgeFunctionSpec),
    /// A parameter-store entry.
    StringParameter(StringParameter),
}

/// A complete declared resource graph plus exported outputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Declared resources, keyed by logical id.
    pub resources: BTreeMap<LogicalId, Resource>,
    /// Named values exported for other stacks.
    pub outputs: Vec<StackExport>,
}

impl Template {
    /// Create an empty template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource under `id` and return the id for later reference.
    ///
    /// Logical ids are assigned by the planner and must be unique; a
    /// duplicate insert replaces the earlier resource, which the planner
    /// never does.
    pub fn add(&mut self, id: impl Into<LogicalId>, resource: Resource) -> LogicalId {
        let id = id.into();
        self.resources.insert(id.clone(), resource);
        id
    }

    /// Add a named export.
    pub fn export(&mut self, export: StackExport) {
        self.outputs.push(export);
    }

    /// Get a resource by logical id.
    #[must_use]
    pub fn get(&self, id: &LogicalId) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// Number of declared resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the template declares no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
