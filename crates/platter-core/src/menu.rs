//! Menu item types as served by the backend API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::restaurant::RestaurantId;

/// Unique identifier for a menu item, assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A menu item record from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// 3D model asset rendered by the menu viewer (opaque to this UI)
    pub glb_file_url: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
    /// Viewer scale multiplier for the GLB model
    #[serde(default = "default_scale")]
    pub scale_factor: f64,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

fn default_scale() -> f64 {
    1.0
}

impl MenuItem {
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }

    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("None")
    }

    pub fn availability_label(&self) -> &'static str {
        if self.is_available {
            "✅ Yes"
        } else {
            "❌ No"
        }
    }
}

/// Concatenate per-restaurant item batches in fetch order
///
/// Used by the unfiltered menu list, which fans out one request per
/// restaurant and merges the results.
pub fn merge_all(batches: Vec<Vec<MenuItem>>) -> Vec<MenuItem> {
    let mut merged = Vec::with_capacity(batches.iter().map(Vec::len).sum());
    for batch in batches {
        merged.extend(batch);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, restaurant: &str, price: f64) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            restaurant_id: RestaurantId::new(restaurant),
            name: format!("item {id}"),
            description: None,
            price,
            category: None,
            image_url: None,
            glb_file_url: format!("/uploads/glb/{id}.glb"),
            is_available: true,
            scale_factor: 1.0,
            created_at: "2026-02-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_price_label() {
        assert_eq!(item("a", "r1", 12.5).price_label(), "$12.50");
        assert_eq!(item("b", "r1", 9.0).price_label(), "$9.00");
    }

    #[test]
    fn test_category_and_availability_labels() {
        let mut it = item("a", "r1", 4.0);
        assert_eq!(it.category_or_default(), "None");
        assert_eq!(it.availability_label(), "✅ Yes");
        it.is_available = false;
        assert_eq!(it.availability_label(), "❌ No");
    }

    #[test]
    fn test_merge_all_preserves_batch_order() {
        let merged = merge_all(vec![
            vec![item("a1", "r1", 1.0), item("a2", "r1", 2.0)],
            vec![],
            vec![item("b1", "r2", 3.0)],
        ]);
        let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "b1"]);
    }

    #[test]
    fn test_parse_backend_json_defaults() {
        let json = r#"{
            "id": "m-1",
            "restaurant_id": "r-1",
            "name": "Ramen",
            "price": 14.0,
            "glb_file_url": "/uploads/glb/m-1.glb",
            "created_at": "2026-02-01T12:00:00Z"
        }"#;
        let parsed: MenuItem = serde_json::from_str(json).unwrap();
        assert!(parsed.is_available);
        assert_eq!(parsed.scale_factor, 1.0);
        assert_eq!(parsed.description_or_default(), "No description");
    }
}
