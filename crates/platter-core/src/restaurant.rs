//! Restaurant types as served by the backend API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a restaurant, assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub String);

impl RestaurantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A restaurant record from the backend
///
/// The UI only holds a transient cached list of these; the backend owns
/// the data and every mutation goes through a REST call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Uploaded logo, served from the backend's upload directory
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Last generated QR code image, if any
    #[serde(default)]
    pub qr_code_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl Restaurant {
    /// Description text for list cards, with the documented fallback
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }

    /// Creation date label for list cards (date only)
    pub fn created_label(&self) -> String {
        format!("Created: {}", self.created_at.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "9f6c2e0a-1d52-4c3e-8e63-0a42f6f2a111",
            "name": "La Brasserie",
            "description": null,
            "contact_email": "hello@brasserie.example",
            "contact_phone": null,
            "address": "12 Rue du Four",
            "logo_url": "/uploads/images/logo.png",
            "qr_code_url": null,
            "is_active": true,
            "created_at": "2026-03-14T09:30:00Z"
        }"#
    }

    #[test]
    fn test_parse_backend_json() {
        let restaurant: Restaurant = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(restaurant.name, "La Brasserie");
        assert_eq!(
            restaurant.id.as_str(),
            "9f6c2e0a-1d52-4c3e-8e63-0a42f6f2a111"
        );
        assert!(restaurant.is_active);
        assert_eq!(restaurant.logo_url.as_deref(), Some("/uploads/images/logo.png"));
    }

    #[test]
    fn test_description_fallback() {
        let restaurant: Restaurant = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(restaurant.description_or_default(), "No description");
    }

    #[test]
    fn test_created_label_is_date_only() {
        let restaurant: Restaurant = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(restaurant.created_label(), "Created: 2026-03-14");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        // A minimal payload: optional fields absent rather than null
        let json = r#"{
            "id": "r-1",
            "name": "Corner Deli",
            "created_at": "2026-01-01T00:00:00Z"
        }"#;
        let restaurant: Restaurant = serde_json::from_str(json).unwrap();
        assert!(restaurant.is_active);
        assert!(restaurant.qr_code_url.is_none());
    }
}
