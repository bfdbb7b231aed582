//! Role — the validated set of callers that can request gated operations.
//!
//! Roles are a closed enum rather than free-form strings, so an unknown
//! role name is rejected when it is parsed. Authorization decisions (which
//! role may do what) live with the operation being gated, not here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A caller's role within the home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full control, including gated operations such as the door unlock.
    Admin,
    /// A regular household member.
    User,
    /// A visitor with no elevated permissions.
    Guest,
}

impl Role {
    /// The lowercase name used in configuration and logs.
    #[must_use]
    pub fn as_name(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Guest => "guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_name())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "guest" => Ok(Self::Guest),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_role_names() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("guest".parse::<Role>().unwrap(), Role::Guest);
    }

    #[test]
    fn should_reject_unknown_role_name() {
        let result = "root".parse::<Role>();
        assert!(matches!(
            result,
            Err(ValidationError::UnknownRole(name)) if name == "root"
        ));
    }

    #[test]
    fn should_reject_role_name_with_different_case() {
        // Matching is exact; "Admin" does not grant anything.
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        for role in [Role::Admin, Role::User, Role::Guest] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn should_serialize_as_lowercase_name() {
        let json = serde_json::to_string(&Role::Guest).unwrap();
        assert_eq!(json, "\"guest\"");
    }
}
