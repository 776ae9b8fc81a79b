//! Permission actions and check results

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Actions a permission check recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionAction {
    CanEdit,
    CanDelete,
}

impl PermissionAction {
    /// Every recognized action
    pub const ALL: [PermissionAction; 2] = [PermissionAction::CanEdit, PermissionAction::CanDelete];

    /// Canonical parameter key for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::CanEdit => "CanEdit",
            PermissionAction::CanDelete => "CanDelete",
        }
    }
}

impl std::fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionAction {
    type Err = ActionError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = s.trim();
        if action.is_empty() {
            return Err(ActionError::Missing);
        }

        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(action))
            .ok_or_else(|| ActionError::Unrecognized(action.to_string()))
    }
}

/// Reasons an action cannot be checked
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("No action was specified")]
    Missing,

    #[error("Action '{0}' is not valid")]
    Unrecognized(String),

    #[error("Action '{action}' is not configured for profile '{profile}'")]
    NotConfigured { profile: String, action: String },
}

/// Outcome of a permission check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheck {
    /// Whether the profile holds the permission
    pub success: bool,

    /// Human-readable rationale
    pub message: String,
}

impl PermissionCheck {
    pub fn new(profile: &str, action: &str, granted: bool) -> Self {
        let message = if granted {
            format!("Profile '{}' has permission for '{}'.", profile, action)
        } else {
            format!("Profile '{}' does not have permission for '{}'.", profile, action)
        };

        Self {
            success: granted,
            message,
        }
    }
}
