//! Typed cloud resource shapes for the EdgeStack distribution planner.
//!
//! This crate defines the declarative resource model the planner emits: WAF
//! policies, CDN distributions, origin buckets, DNS records, certificates,
//! IAM roles, edge functions, and string parameters, together with the
//! template plumbing ([`LogicalId`], [`TemplateValue`], [`Template`]) that
//! lets deploy-time attributes flow between resources. Nothing in here talks
//! to a cloud API; these are the request shapes an external provisioning
//! engine later realizes.

pub mod acm;
pub mod cloudfront;
pub mod iam;
pub mod lambda;
pub mod route53;
pub mod s3;
pub mod ssm;
pub mod template;
pub mod value;
pub mod waf;

pub use template::{Resource, Template};
pub use value::{Attribute, AttributeRef, LogicalId, StackExport, TemplateValue};
