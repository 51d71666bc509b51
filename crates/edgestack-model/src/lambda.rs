//! Edge function shapes.

use serde::{Deserialize, Serialize};

use crate::value::LogicalId;

/// Runtime an edge function executes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionRuntime {
    /// Node.js 14.
    #[serde(rename = "nodejs14.x")]
    Nodejs14,
    /// Node.js 18.
    #[serde(rename = "nodejs18.x")]
    Nodejs18,
}

/// A function declared by the plan and attachable to CDN lifecycle events.
///
/// Only the HTTP-security-headers function is declared locally; the
/// authentication functions are supplied by a collaborator stack and
/// referenced by version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeFunctionSpec {
    /// Physical function name.
    pub function_name: String,
    /// Operator-facing description.
    pub description: String,
    /// Entry point within the deployment artifact.
    pub handler: String,
    /// Execution runtime.
    pub runtime: FunctionRuntime,
    /// Memory limit, in MB.
    pub memory_size: u32,
    /// Execution timeout, in seconds.
    pub timeout_seconds: u64,
    /// Logical id of the execution role.
    pub role: LogicalId,
}
