//! Error types for the planner.

/// Errors the planner can raise while building a plan.
///
/// All of these are build-time and fatal; there is no retry or partial-plan
/// recovery. Failures of the provisioning engine that later realizes the
/// template are not surfaced here.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// One or more required auth-at-edge function versions are missing.
    #[error("edge functions not found: missing {}", .missing.join(", "))]
    EdgeFunctionsNotFound {
        /// Names of the collaborator outputs that were absent or empty.
        missing: Vec<&'static str>,
    },

    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for planner operations.
pub type PlanResult<T> = Result<T, PlanError>;
