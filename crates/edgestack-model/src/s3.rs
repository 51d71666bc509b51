//! Origin and logging bucket shapes.

use serde::{Deserialize, Serialize};

use crate::value::LogicalId;

/// Server-side encryption mode for a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketEncryption {
    /// Keys managed by the storage service.
    #[default]
    S3Managed,
    /// Keys managed through the key-management service.
    KmsManaged,
}

/// What happens to a bucket when the stack is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemovalPolicy {
    /// Keep the bucket and its contents.
    Retain,
    /// Delete the bucket.
    Destroy,
}

/// Object ownership model for a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectOwnership {
    /// The writing account owns the object.
    #[default]
    ObjectWriter,
    /// The bucket owner owns every object; ACLs disabled.
    BucketOwnerEnforced,
}

/// A private bucket serving as a CDN origin or access-log target.
///
/// All buckets in a plan block public access and enforce SSL; reads are
/// granted only to the principals listed in `grants_read` (origin access
/// identities).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSpec {
    /// Server-side encryption mode.
    pub encryption: BucketEncryption,
    /// Teardown behavior.
    pub removal_policy: RemovalPolicy,
    /// Whether all forms of public access are blocked.
    pub block_public_access: bool,
    /// Whether non-TLS requests are rejected.
    pub enforce_ssl: bool,
    /// Whether object versioning is enabled.
    pub versioned: bool,
    /// Object ownership model.
    pub object_ownership: ObjectOwnership,
    /// Principals (by logical id) granted read access.
    pub grants_read: Vec<LogicalId>,
}

impl BucketSpec {
    /// A hardened private bucket with the plan-wide defaults applied.
    #[must_use]
    pub fn private(removal_policy: RemovalPolicy) -> Self {
        Self {
            encryption: BucketEncryption::S3Managed,
            removal_policy,
            block_public_access: true,
            enforce_ssl: true,
            versioned: false,
            object_ownership: ObjectOwnership::ObjectWriter,
            grants_read: Vec::new(),
        }
    }

    /// Enable object versioning.
    #[must_use]
    pub fn versioned(mut self) -> Self {
        self.versioned = true;
        self
    }

    /// Grant read access to a principal.
    #[must_use]
    pub fn grant_read(mut self, principal: impl Into<LogicalId>) -> Self {
        self.grants_read.push(principal.into());
        self
    }
}
