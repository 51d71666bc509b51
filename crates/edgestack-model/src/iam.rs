//! IAM role and policy shapes.

use serde::{Deserialize, Serialize};

use crate::value::TemplateValue;

/// A principal allowed to assume a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Principal {
    /// Every identity in an account.
    Account {
        /// 12-digit account id.
        account_id: String,
    },
    /// A service principal (e.g. `lambda.amazonaws.com`).
    Service {
        /// Service principal name.
        service: String,
    },
    /// Any of the listed principals.
    Composite {
        /// Component principals.
        principals: Vec<Principal>,
    },
}

impl Principal {
    /// An account principal.
    #[must_use]
    pub fn account(account_id: impl Into<String>) -> Self {
        Self::Account {
            account_id: account_id.into(),
        }
    }

    /// A service principal.
    #[must_use]
    pub fn service(service: impl Into<String>) -> Self {
        Self::Service {
            service: service.into(),
        }
    }
}

/// One additive allow statement in a role's inline policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyStatement {
    /// Allowed actions.
    pub actions: Vec<String>,
    /// Resources the actions apply to.
    pub resources: Vec<TemplateValue>,
}

impl PolicyStatement {
    /// Create an allow statement.
    #[must_use]
    pub fn new(actions: Vec<String>, resources: Vec<TemplateValue>) -> Self {
        Self { actions, resources }
    }
}

/// A named role with its trust policy and attached permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSpec {
    /// Physical role name.
    pub role_name: String,
    /// Who may assume the role.
    pub assumed_by: Principal,
    /// Managed policies attached by ARN.
    pub managed_policy_arns: Vec<String>,
    /// Inline allow statements.
    pub inline_statements: Vec<PolicyStatement>,
}
