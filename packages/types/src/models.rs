//! # Shared data shapes for Stay With Friends
//!
//! Defines the types that cross every boundary in the workspace: the backend
//! REST API serializes them, the server functions forward them, and the views
//! render them. Everything here is `Serialize + Deserialize` so it works both
//! natively and in WASM.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A registered user's public profile — id, optional display name, email, optional avatar URL. Never carries credentials. |
//! | [`Host`] | A place to stay published by a user: identity, owner, name, location, optional photo. |
//! | [`Availability`] | A date window during which a host welcomes guests. `start_date <= end_date`. |
//! | [`HostWithAvailabilities`] | A [`Host`] extended with its amenity list and availability records — the shape the browse and detail pages consume. |
//! | [`HostDraft`] | What the host form submits: the editable subset of a host. |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// A place to stay published by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Host {
    pub id: String,
    /// Owning user's id. One host per user.
    pub user_id: String,
    pub name: String,
    pub location: String,
    pub image: Option<String>,
}

/// A date window during which a host welcomes guests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Availability {
    pub id: String,
    pub host_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A host together with its amenities and availability windows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostWithAvailabilities {
    #[serde(flatten)]
    pub host: Host,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub availabilities: Vec<Availability>,
}

/// The editable subset of a host, produced by the host form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HostDraft {
    pub name: String,
    pub location: String,
    pub amenities: Vec<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email() {
        let named = User {
            id: "u1".into(),
            name: Some("Ada".into()),
            email: "ada@example.com".into(),
            image: None,
        };
        assert_eq!(named.display_name(), "Ada");

        let anonymous = User {
            id: "u2".into(),
            name: None,
            email: "grace@example.com".into(),
            image: None,
        };
        assert_eq!(anonymous.display_name(), "grace@example.com");
    }

    #[test]
    fn host_with_availabilities_flattens_host_fields() {
        let host = HostWithAvailabilities {
            host: Host {
                id: "h1".into(),
                user_id: "u1".into(),
                name: "Canal flat".into(),
                location: "Amsterdam".into(),
                image: None,
            },
            amenities: vec!["wifi".into()],
            availabilities: vec![],
        };

        let value = serde_json::to_value(&host).unwrap();
        assert_eq!(value["id"], "h1");
        assert_eq!(value["location"], "Amsterdam");
        assert_eq!(value["amenities"][0], "wifi");

        let back: HostWithAvailabilities = serde_json::from_value(value).unwrap();
        assert_eq!(back, host);
    }

    #[test]
    fn host_with_availabilities_defaults_missing_lists() {
        let raw = r#"{"id":"h1","user_id":"u1","name":"Cabin","location":"Oslo","image":null}"#;
        let host: HostWithAvailabilities = serde_json::from_str(raw).unwrap();
        assert!(host.amenities.is_empty());
        assert!(host.availabilities.is_empty());
    }
}
