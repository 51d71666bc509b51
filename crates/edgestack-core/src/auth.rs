//! Auth-at-edge precondition check.
//!
//! The userguide distribution cannot be declared without the five edge
//! function versions published by the auth collaborator stack. The original
//! deployment only failed when every output was missing, which let a build
//! proceed with four of five functions absent; the check here requires all
//! five and names the missing ones.

use crate::config::AuthAtEdgeOutputs;
use crate::error::{PlanError, PlanResult};

/// The validated function version identifiers the plan wires in.
///
/// The collaborator's http-headers output is validated for presence but not
/// carried: the plan attaches its own locally declared http-headers function
/// to viewer responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EdgeHandlers {
    /// Handles `/parseauth`.
    pub parse_auth: String,
    /// Handles `/refreshauth`.
    pub refresh_auth: String,
    /// Handles `/signout`.
    pub sign_out: String,
    /// Intercepts every viewer request on the default behavior.
    pub check_auth: String,
}

/// Validate the collaborator outputs, failing fast when any is absent.
pub(crate) fn validate(outputs: &AuthAtEdgeOutputs) -> PlanResult<EdgeHandlers> {
    let required: [(&'static str, &str); 5] = [
        ("ParseAuthHandler", &outputs.parse_auth_handler),
        ("RefreshAuthHandler", &outputs.refresh_auth_handler),
        ("SignOutHandler", &outputs.sign_out_handler),
        ("CheckAuthHandler", &outputs.check_auth_handler),
        ("HttpHeadersHandler", &outputs.http_headers_handler),
    ];

    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(PlanError::EdgeFunctionsNotFound { missing });
    }

    Ok(EdgeHandlers {
        parse_auth: outputs.parse_auth_handler.clone(),
        refresh_auth: outputs.refresh_auth_handler.clone(),
        sign_out: outputs.sign_out_handler.clone(),
        check_auth: outputs.check_auth_handler.clone(),
    })
}
