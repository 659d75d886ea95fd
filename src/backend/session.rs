use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role tag attached to a signed-in user.
///
/// Anything the auth service sends that we don't recognise (or no tag at all)
/// is treated as a regular customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    RestaurantOwner,
    #[default]
    Customer,
}

impl Role {
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::RestaurantOwner => "ROLE_RESTAURANT_OWNER",
            Role::Customer => "ROLE_CUSTOMER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::RestaurantOwner => "Restaurant owner",
            Role::Customer => "Customer",
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ROLE_ADMIN" => Role::Admin,
            "ROLE_RESTAURANT_OWNER" => Role::RestaurantOwner,
            _ => Role::Customer,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.tag().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            role,
            signed_in_at: Utc::now(),
        }
    }

    /// A session only counts as signed in when it carries a display name.
    pub fn is_signed_in(&self) -> bool {
        !self.full_name.trim().is_empty()
    }

    /// First letter of the display name, upper-cased.
    pub fn initial(&self) -> Option<String> {
        self.full_name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tags_decode() {
        let admin: Role = serde_json::from_str("\"ROLE_ADMIN\"").unwrap();
        let owner: Role = serde_json::from_str("\"ROLE_RESTAURANT_OWNER\"").unwrap();
        let customer: Role = serde_json::from_str("\"ROLE_CUSTOMER\"").unwrap();
        let unknown: Role = serde_json::from_str("\"ROLE_DRIVER\"").unwrap();

        assert_eq!(admin, Role::Admin);
        assert_eq!(owner, Role::RestaurantOwner);
        assert_eq!(customer, Role::Customer);
        assert_eq!(unknown, Role::Customer);
    }

    #[test]
    fn test_session_wire_format() {
        let json = r#"{"fullName":"ada lovelace","signedInAt":"2024-05-01T12:00:00Z"}"#;
        let session: Session = serde_json::from_str(json).unwrap();

        assert_eq!(session.full_name, "ada lovelace");
        assert_eq!(session.role, Role::Customer);
        assert!(session.email.is_empty());

        let encoded = serde_json::to_value(&session).unwrap();
        assert_eq!(encoded["role"], "ROLE_CUSTOMER");
        assert_eq!(encoded["fullName"], "ada lovelace");
    }

    #[test]
    fn test_initial() {
        assert_eq!(Session::new("ada", "", Role::Customer).initial().as_deref(), Some("A"));
        assert_eq!(Session::new("  émile", "", Role::Customer).initial().as_deref(), Some("É"));
        assert_eq!(Session::new("", "", Role::Admin).initial(), None);
        assert!(!Session::new("   ", "", Role::Admin).is_signed_in());
    }
}
