//! Bevy application setup and controller-scoped UI state
//!
//! Everything the original admin page kept in ambient globals lives here
//! as explicit resources with a clear lifecycle: registries reflect the
//! last successful fetch and are replaced wholesale on each load.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_picking::DefaultPickingPlugins;

use platter_core::{
    MenuItem, MenuItemDraft, MenuItemId, QrCode, Restaurant, RestaurantDraft, RestaurantId,
};

use crate::file_picker::FilePickerPlugin;
use crate::network::NetworkPlugin;
use crate::ui::UiPlugin;

/// Which admin tab is visible; exactly one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Resource)]
pub enum AdminTab {
    #[default]
    Restaurants,
    MenuItems,
}

/// Rendering state for a fetched collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// No fetch has completed yet
    Loading,
    /// The last fetch failed
    Error,
    /// The last fetch succeeded with zero records
    Empty,
    /// The last fetch succeeded with records to show
    Loaded,
}

/// Last-fetched restaurant list, also the source for both dropdowns
#[derive(Debug, Clone, Resource, Default)]
pub struct RestaurantRegistry {
    pub restaurants: Vec<Restaurant>,
    pub loaded: bool,
    pub error: Option<String>,
}

impl RestaurantRegistry {
    pub const EMPTY_STATE: &'static str =
        "No restaurants yet. Create your first restaurant above!";
    pub const ERROR_STATE: &'static str = "Error loading restaurants";

    pub fn apply_loaded(&mut self, restaurants: Vec<Restaurant>) {
        self.restaurants = restaurants;
        self.loaded = true;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn state(&self) -> ListState {
        if self.error.is_some() {
            ListState::Error
        } else if !self.loaded {
            ListState::Loading
        } else if self.restaurants.is_empty() {
            ListState::Empty
        } else {
            ListState::Loaded
        }
    }

    pub fn name_of(&self, id: &RestaurantId) -> Option<&str> {
        self.restaurants
            .iter()
            .find(|r| &r.id == id)
            .map(|r| r.name.as_str())
    }
}

/// Last-fetched menu item list for the current filter
#[derive(Debug, Clone, Resource, Default)]
pub struct MenuRegistry {
    pub items: Vec<MenuItem>,
    pub loaded: bool,
    pub error: Option<String>,
}

impl MenuRegistry {
    pub const EMPTY_STATE: &'static str = "No menu items yet. Add your first menu item above!";
    pub const ERROR_STATE: &'static str = "Error loading menu items";

    pub fn apply_loaded(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        self.loaded = true;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn state(&self) -> ListState {
        if self.error.is_some() {
            ListState::Error
        } else if !self.loaded {
            ListState::Loading
        } else if self.items.is_empty() {
            ListState::Empty
        } else {
            ListState::Loaded
        }
    }
}

/// Restaurant filter for the menu item list
#[derive(Debug, Clone, Resource, Default)]
pub struct MenuFilter {
    pub restaurant_id: Option<RestaurantId>,
}

/// Create-restaurant form state
#[derive(Debug, Clone, Resource, Default)]
pub struct RestaurantFormState {
    pub draft: RestaurantDraft,
}

/// Create-menu-item form state
#[derive(Debug, Clone, Resource, Default)]
pub struct MenuFormState {
    pub draft: MenuItemDraft,
}

/// Modal showing a freshly generated QR code
#[derive(Debug, Clone, Resource, Default)]
pub struct QrModal {
    pub show: bool,
    /// QR image URL with cache-busting suffix
    pub image_src: String,
    /// Public menu URL encoded in the QR code, shown verbatim
    pub menu_url: String,
    pub restaurant_id: Option<RestaurantId>,
}

impl QrModal {
    pub fn present(&mut self, restaurant_id: RestaurantId, qr: &QrCode, timestamp_millis: i64) {
        self.image_src = qr.busted_image_url(timestamp_millis);
        self.menu_url = qr.menu_url.clone();
        self.restaurant_id = Some(restaurant_id);
        self.show = true;
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    pub fn download_filename(&self) -> String {
        match &self.restaurant_id {
            Some(id) => format!("restaurant-qr-{id}.png"),
            None => "restaurant-qr.png".to_string(),
        }
    }
}

/// What a pending delete confirmation refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Restaurant(RestaurantId),
    MenuItem(MenuItemId),
}

impl DeleteTarget {
    pub fn confirm_message(&self) -> &'static str {
        match self {
            DeleteTarget::Restaurant(_) => {
                "Are you sure you want to delete this restaurant? This will also delete all menu items."
            }
            DeleteTarget::MenuItem(_) => "Are you sure you want to delete this menu item?",
        }
    }
}

/// Confirm-before-delete dialog
///
/// The delete request is only issued from `accept`; `cancel` drops the
/// target without any network activity.
#[derive(Debug, Clone, Resource, Default)]
pub struct ConfirmDialog {
    pub pending: Option<DeleteTarget>,
}

impl ConfirmDialog {
    pub fn request(&mut self, target: DeleteTarget) {
        self.pending = Some(target);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn accept(&mut self) -> Option<DeleteTarget> {
        self.pending.take()
    }
}

/// Blocking alert dialog; the UI stays interactive after dismissal
#[derive(Debug, Clone, Resource, Default)]
pub struct AlertDialog {
    pub message: Option<String>,
}

impl AlertDialog {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

/// Run the Bevy application
pub fn run() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.15)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platter - Restaurant Admin".to_string(),
                canvas: Some("#platter-canvas".to_string()),
                fit_canvas_to_parent: true,
                prevent_default_event_handling: false,
                ..default()
            }),
            ..default()
        }))
        // bevy_egui's picking feature looks for PickingPlugin, so the
        // picking plugins must be added before EguiPlugin
        .add_plugins(DefaultPickingPlugins)
        .add_plugins(EguiPlugin::default())
        .init_resource::<AdminTab>()
        .init_resource::<RestaurantRegistry>()
        .init_resource::<MenuRegistry>()
        .init_resource::<MenuFilter>()
        .init_resource::<RestaurantFormState>()
        .init_resource::<MenuFormState>()
        .init_resource::<QrModal>()
        .init_resource::<ConfirmDialog>()
        .init_resource::<AlertDialog>()
        .add_plugins(NetworkPlugin)
        .add_plugins(FilePickerPlugin)
        .add_plugins(UiPlugin)
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: &str) -> Restaurant {
        serde_json::from_str(&format!(
            r#"{{"id": "{id}", "name": "name-{id}", "created_at": "2026-01-01T00:00:00Z"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_default_tab_is_restaurants() {
        assert_eq!(AdminTab::default(), AdminTab::Restaurants);
    }

    #[test]
    fn test_registry_states() {
        let mut registry = RestaurantRegistry::default();
        assert_eq!(registry.state(), ListState::Loading);

        registry.apply_loaded(vec![]);
        assert_eq!(registry.state(), ListState::Empty);

        registry.apply_loaded(vec![restaurant("r-1")]);
        assert_eq!(registry.state(), ListState::Loaded);

        registry.apply_error("boom".to_string());
        assert_eq!(registry.state(), ListState::Error);

        // A successful reload clears the error
        registry.apply_loaded(vec![]);
        assert_eq!(registry.state(), ListState::Empty);
    }

    #[test]
    fn test_qr_modal_presents_busted_image_and_literal_url() {
        let qr = QrCode {
            qr_code_url: "/uploads/qr_codes/qr_r-9.png".to_string(),
            menu_url: "http://localhost:8000/menu/r-9".to_string(),
        };
        let mut modal = QrModal::default();
        modal.present(RestaurantId::new("r-9"), &qr, 1_700_000_000_123);

        assert!(modal.show);
        assert_eq!(modal.image_src, "/uploads/qr_codes/qr_r-9.png?t=1700000000123");
        assert_eq!(modal.menu_url, "http://localhost:8000/menu/r-9");
        assert_eq!(modal.download_filename(), "restaurant-qr-r-9.png");
    }

    #[test]
    fn test_confirm_cancel_drops_target() {
        let mut dialog = ConfirmDialog::default();
        dialog.request(DeleteTarget::Restaurant(RestaurantId::new("r-1")));
        dialog.cancel();
        // Nothing left to act on, so no delete request can be issued
        assert_eq!(dialog.accept(), None);
    }

    #[test]
    fn test_confirm_accept_hands_over_target_once() {
        let mut dialog = ConfirmDialog::default();
        dialog.request(DeleteTarget::MenuItem(MenuItemId::new("m-1")));
        assert_eq!(
            dialog.accept(),
            Some(DeleteTarget::MenuItem(MenuItemId::new("m-1")))
        );
        assert_eq!(dialog.accept(), None);
    }
}
