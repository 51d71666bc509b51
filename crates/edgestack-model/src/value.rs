//! Template value plumbing.
//!
//! Resources in a plan reference each other through values that only exist
//! once the provisioning engine has realized the graph (a distribution id, a
//! bucket ARN). [`TemplateValue`] models those references explicitly instead
//! of smuggling placeholder strings through the plan.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a resource within a single template.
///
/// Logical ids are stable, human-readable keys (`"FrontendDistribution"`);
/// the provisioning engine maps them to physical resource identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogicalId(String);

impl LogicalId {
    /// Create a new logical id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogicalId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Deploy-time attributes a resource exposes to the rest of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    /// The resource's ARN.
    Arn,
    /// The resource's physical id (e.g. a distribution id).
    Id,
    /// The resource's generated name (e.g. a bucket name).
    Name,
    /// A generated domain name (e.g. `dxxxx.cloudfront.net`).
    DomainName,
    /// The published version of an edge function.
    Version,
}

impl Attribute {
    /// Returns the attribute name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arn => "Arn",
            Self::Id => "Id",
            Self::Name => "Name",
            Self::DomainName => "DomainName",
            Self::Version => "Version",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a deploy-time attribute of another resource in the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRef {
    /// Logical id of the referenced resource.
    pub logical_id: LogicalId,
    /// Which attribute of that resource is requested.
    pub attribute: Attribute,
}

impl AttributeRef {
    /// Create an attribute reference.
    #[must_use]
    pub fn new(logical_id: impl Into<LogicalId>, attribute: Attribute) -> Self {
        Self {
            logical_id: logical_id.into(),
            attribute,
        }
    }
}

impl From<String> for LogicalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A value in the template: either known at plan time or resolved at deploy
/// time from another resource's attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateValue {
    /// A literal string known when the plan is built.
    Literal(String),
    /// A deploy-time attribute of another resource.
    Attr(AttributeRef),
    /// Concatenation of parts, resolved left to right at deploy time.
    Concat(Vec<TemplateValue>),
}

impl TemplateValue {
    /// A literal value.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// An attribute reference value.
    #[must_use]
    pub fn attr(logical_id: impl Into<LogicalId>, attribute: Attribute) -> Self {
        Self::Attr(AttributeRef::new(logical_id, attribute))
    }

    /// An attribute reference with a literal suffix appended at deploy time.
    #[must_use]
    pub fn attr_suffixed(
        logical_id: impl Into<LogicalId>,
        attribute: Attribute,
        suffix: impl Into<String>,
    ) -> Self {
        Self::Concat(vec![
            Self::attr(logical_id, attribute),
            Self::Literal(suffix.into()),
        ])
    }
}

impl From<&str> for TemplateValue {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_owned())
    }
}

/// A named value exported for cross-stack consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackExport {
    /// Export name, unique across stacks in the target account.
    pub export_name: String,
    /// Exported value.
    pub value: TemplateValue,
}

impl StackExport {
    /// Create a named export.
    #[must_use]
    pub fn new(export_name: impl Into<String>, value: TemplateValue) -> Self {
        Self {
            export_name: export_name.into(),
            value,
        }
    }
}
