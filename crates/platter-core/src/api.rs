//! REST endpoint paths and viewer routes exposed by the backend
//!
//! The network layer joins these paths onto the configured backend base
//! URL. Keeping path construction here means the fetch plan for each
//! operation can be unit tested without a browser.

use serde::Deserialize;

use crate::menu::MenuItemId;
use crate::restaurant::RestaurantId;

/// Collection endpoint for restaurants (GET list, POST multipart create)
pub fn restaurants() -> &'static str {
    "/api/restaurants"
}

/// Single restaurant endpoint (GET, DELETE)
pub fn restaurant(id: &RestaurantId) -> String {
    format!("/api/restaurants/{id}")
}

/// Per-restaurant QR generation endpoint (POST)
pub fn generate_qr(id: &RestaurantId) -> String {
    format!("/api/restaurants/{id}/generate-qr")
}

/// Per-restaurant menu item collection (GET list, POST multipart create)
pub fn restaurant_menu_items(id: &RestaurantId) -> String {
    format!("/api/restaurants/{id}/menu-items")
}

/// Single menu item endpoint (GET, DELETE)
pub fn menu_item(id: &MenuItemId) -> String {
    format!("/api/menu-items/{id}")
}

/// Browser route for the public menu viewer page
///
/// The viewer accepts either a restaurant id (full menu) or a menu item
/// id (single 3D preview); both open in a new tab.
pub fn menu_viewer(id: &str) -> String {
    format!("/menu/{id}")
}

/// How the menu list should be fetched for the current filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemsRequest {
    /// One request against the selected restaurant's item collection
    Single(String),
    /// Fetch every restaurant, then each restaurant's items, and merge
    FanOut,
}

impl MenuItemsRequest {
    pub fn for_filter(filter: Option<&RestaurantId>) -> Self {
        match filter {
            Some(id) => Self::Single(restaurant_menu_items(id)),
            None => Self::FanOut,
        }
    }
}

/// Response from the QR generation endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct QrCode {
    /// Image URL under the backend's upload directory
    pub qr_code_url: String,
    /// Public menu URL encoded in the QR image
    pub menu_url: String,
}

impl QrCode {
    /// Image URL with a cache-busting timestamp query parameter
    ///
    /// The backend overwrites the QR image in place on regeneration, so
    /// the modal must defeat the browser cache.
    pub fn busted_image_url(&self, timestamp_millis: i64) -> String {
        format!("{}?t={}", self.qr_code_url, timestamp_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let rid = RestaurantId::new("r-42");
        let mid = MenuItemId::new("m-7");
        assert_eq!(restaurants(), "/api/restaurants");
        assert_eq!(restaurant(&rid), "/api/restaurants/r-42");
        assert_eq!(generate_qr(&rid), "/api/restaurants/r-42/generate-qr");
        assert_eq!(
            restaurant_menu_items(&rid),
            "/api/restaurants/r-42/menu-items"
        );
        assert_eq!(menu_item(&mid), "/api/menu-items/m-7");
        assert_eq!(menu_viewer("r-42"), "/menu/r-42");
    }

    #[test]
    fn test_filtered_menu_request_targets_one_restaurant() {
        let rid = RestaurantId::new("r-1");
        assert_eq!(
            MenuItemsRequest::for_filter(Some(&rid)),
            MenuItemsRequest::Single("/api/restaurants/r-1/menu-items".to_string())
        );
    }

    #[test]
    fn test_unfiltered_menu_request_fans_out() {
        assert_eq!(MenuItemsRequest::for_filter(None), MenuItemsRequest::FanOut);
    }

    #[test]
    fn test_qr_cache_busting() {
        let qr = QrCode {
            qr_code_url: "/uploads/qr_codes/qr_r-1.png".to_string(),
            menu_url: "http://localhost:8000/menu/r-1".to_string(),
        };
        assert_eq!(
            qr.busted_image_url(1_700_000_000_000),
            "/uploads/qr_codes/qr_r-1.png?t=1700000000000"
        );
    }
}
