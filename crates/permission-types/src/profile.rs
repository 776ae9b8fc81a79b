//! Profile model
//!
//! Profiles are identified by name. Renaming is not supported; a rename is
//! a delete followed by a create.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Literal value granting a permission
pub const FLAG_TRUE: &str = "true";

/// Literal value denying a permission
pub const FLAG_FALSE: &str = "false";

/// A named profile and its permission parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique, case-sensitive profile name.
    ///
    /// Optional on the wire so update bodies may carry parameters only.
    #[serde(default)]
    pub profile_name: String,

    /// Parameter name -> parameter value
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl Profile {
    /// Create a profile with no parameters
    pub fn new(profile_name: impl Into<String>) -> Self {
        Self {
            profile_name: profile_name.into(),
            parameters: HashMap::new(),
        }
    }

    /// Builder-style parameter insertion
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter value
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }
}

/// Flip a permission flag.
///
/// Only the exact literal `"true"` flips to `"false"`; every other value,
/// including garbage, flips to `"true"`.
pub fn toggle_flag(value: &str) -> String {
    if value == FLAG_TRUE {
        FLAG_FALSE.to_string()
    } else {
        FLAG_TRUE.to_string()
    }
}

/// The fixed data set loaded at startup
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile::new("Admin")
            .with_parameter("CanEdit", FLAG_TRUE)
            .with_parameter("CanDelete", FLAG_TRUE),
        Profile::new("User")
            .with_parameter("CanEdit", FLAG_FALSE)
            .with_parameter("CanDelete", FLAG_FALSE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_period_two() {
        assert_eq!(toggle_flag("true"), "false");
        assert_eq!(toggle_flag(&toggle_flag("true")), "true");
    }

    #[test]
    fn test_toggle_non_true_values() {
        assert_eq!(toggle_flag("false"), "true");
        assert_eq!(toggle_flag("TRUE"), "true");
        assert_eq!(toggle_flag(""), "true");
        assert_eq!(toggle_flag("maybe"), "true");
    }

    #[test]
    fn test_seed_profiles() {
        let seed = seed_profiles();
        assert_eq!(seed.len(), 2);

        let admin = seed.iter().find(|p| p.profile_name == "Admin").unwrap();
        assert_eq!(admin.parameter("CanEdit"), Some("true"));
        assert_eq!(admin.parameter("CanDelete"), Some("true"));

        let user = seed.iter().find(|p| p.profile_name == "User").unwrap();
        assert_eq!(user.parameter("CanEdit"), Some("false"));
        assert_eq!(user.parameter("CanDelete"), Some("false"));
    }

    #[test]
    fn test_profile_wire_format() {
        let profile = Profile::new("User").with_parameter("CanEdit", "true");
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["profileName"], "User");
        assert_eq!(json["parameters"]["CanEdit"], "true");

        let parsed: Profile =
            serde_json::from_str(r#"{"profileName":"Guest"}"#).unwrap();
        assert_eq!(parsed.profile_name, "Guest");
        assert!(parsed.parameters.is_empty());

        let parsed: Profile =
            serde_json::from_str(r#"{"parameters":{"CanEdit":"false"}}"#).unwrap();
        assert!(parsed.profile_name.is_empty());
        assert_eq!(parsed.parameter("CanEdit"), Some("false"));
    }
}
