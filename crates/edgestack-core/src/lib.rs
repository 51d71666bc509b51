//! Distribution planner for EdgeStack.
//!
//! Given a [`SiteConfig`] this crate deterministically builds a
//! [`DistributionPlan`]: one edge firewall policy, a logging bucket, two CDN
//! distributions (frontend and userguide) with their origin buckets, DNS
//! aliases when a custom domain is configured, parameter-store entries,
//! cross-stack exports, and an optional cross-account deployment role. The
//! build is a synchronous single pass with no I/O; realizing the declared
//! graph is left to an external provisioning engine.

mod auth;
mod config;
mod domain;
mod error;
mod plan;
mod role;
mod types;
mod waf;

pub use config::{AuthAtEdgeOutputs, DomainConfig, SiteConfig, WafAllowLists};
pub use error::{PlanError, PlanResult};
pub use plan::{DistributionPlan, SiteHandles, build_plan};
pub use types::AccountId;
