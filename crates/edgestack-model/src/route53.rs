//! DNS record shapes.

use serde::{Deserialize, Serialize};

use crate::value::LogicalId;

/// A pre-existing hosted zone, referenced by id and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZoneRef {
    /// Zone id in the DNS service.
    pub hosted_zone_id: String,
    /// Zone apex name.
    pub zone_name: String,
}

/// An A-record alias pointing a host name at a CDN distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasRecord {
    /// Fully qualified record name.
    pub record_name: String,
    /// Zone the record is created in.
    pub zone: HostedZoneRef,
    /// Logical id of the aliased distribution.
    pub target_distribution: LogicalId,
}
