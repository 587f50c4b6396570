//! Network client for backend communication
//!
//! Every user action maps to one REST call. Fetches run on
//! `spawn_local` and push their outcome into a shared queue; the
//! `process_events` system drains the queue on the next frame and
//! updates the controller state.

use bevy::prelude::*;
use std::sync::{Arc, Mutex};

use platter_core::{
    MenuItem, MenuItemId, MenuItemUpload, QrCode, Restaurant, RestaurantDraft, RestaurantId,
};

#[cfg(target_arch = "wasm32")]
use platter_core::{api, menu, ApiError, FileAttachment, MenuItemsRequest};

use crate::app::{
    AlertDialog, MenuFilter, MenuFormState, MenuRegistry, QrModal, RestaurantFormState,
    RestaurantRegistry,
};

pub struct NetworkPlugin;

impl Plugin for NetworkPlugin {
    fn build(&self, app: &mut App) {
        let config = BackendConfig::from_browser();

        app.insert_resource(config)
            .init_resource::<PendingEvents>()
            .add_message::<RefreshRequest>()
            .add_systems(Startup, fetch_initial_restaurants)
            .add_systems(Update, (process_events, handle_refresh).chain());
    }
}

/// Resource storing the backend connection configuration
#[derive(Resource, Clone, Debug, Default)]
pub struct BackendConfig {
    /// HTTP(S) base URL for the REST API (e.g., "http://192.168.1.10:8000")
    pub base_url: String,
}

impl BackendConfig {
    /// Create config from URL query parameters or same-origin fallback
    #[cfg(target_arch = "wasm32")]
    pub fn from_browser() -> Self {
        let window = web_sys::window().expect("no window");
        let location = window.location();

        // Check for ?api= query parameter
        if let Ok(search) = location.search() {
            if let Some(api_param) = Self::parse_query_param(&search, "api") {
                tracing::info!("Using backend from URL parameter: {}", api_param);
                return Self::from_address(&api_param);
            }
        }

        // Fall back to same-origin
        let host = location.host().unwrap_or_else(|_| "localhost:8000".to_string());
        let is_https = location.protocol().unwrap_or_default() == "https:";

        Self {
            base_url: format!("{}://{}", if is_https { "https" } else { "http" }, host),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_browser() -> Self {
        Self::default()
    }

    /// Create config from a backend address (host:port, with or without scheme)
    pub fn from_address(addr: &str) -> Self {
        let base_url = if addr.starts_with("https://") || addr.starts_with("http://") {
            addr.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", addr.trim_end_matches('/'))
        };
        Self { base_url }
    }

    /// Parse a query parameter from a search string
    fn parse_query_param(search: &str, param: &str) -> Option<String> {
        let search = search.trim_start_matches('?');
        for pair in search.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
                if key == param {
                    // URL decode the value
                    return Some(value.replace("%3A", ":").replace("%2F", "/"));
                }
            }
        }
        None
    }
}

/// Outcome of a backend call, queued for the next frame
#[derive(Debug, Clone)]
pub enum AdminEvent {
    RestaurantsLoaded(Vec<Restaurant>),
    RestaurantsFailed(String),
    RestaurantCreated(Restaurant),
    RestaurantDeleted { id: RestaurantId },
    QrGenerated { restaurant_id: RestaurantId, qr: QrCode },
    MenuItemsLoaded(Vec<MenuItem>),
    MenuItemsFailed(String),
    MenuItemCreated(MenuItem),
    MenuItemDeleted { id: MenuItemId },
    ActionFailed { message: String },
}

/// Shared event queue between fetch callbacks and Bevy
#[derive(Resource, Default, Clone)]
pub struct PendingEvents(pub Arc<Mutex<Vec<AdminEvent>>>);

impl PendingEvents {
    pub fn push(&self, event: AdminEvent) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(event);
        }
    }
}

/// Which collections need a re-fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshScope {
    Restaurants,
    MenuItems,
    All,
}

/// Message requesting a collection reload
#[derive(Message)]
pub struct RefreshRequest(pub RefreshScope);

/// Fetch the restaurant list once at startup
fn fetch_initial_restaurants(pending: Res<PendingEvents>, config: Res<BackendConfig>) {
    fetch_restaurants(&config.base_url, &pending);
}

/// Drain queued events and apply them to the controller state
#[allow(clippy::too_many_arguments)]
fn process_events(
    pending: Res<PendingEvents>,
    mut restaurant_registry: ResMut<RestaurantRegistry>,
    mut menu_registry: ResMut<MenuRegistry>,
    mut restaurant_form: ResMut<RestaurantFormState>,
    mut menu_form: ResMut<MenuFormState>,
    mut qr_modal: ResMut<QrModal>,
    mut alert: ResMut<AlertDialog>,
    mut refresh: MessageWriter<RefreshRequest>,
) {
    let events = {
        if let Ok(mut queue) = pending.0.lock() {
            std::mem::take(&mut *queue)
        } else {
            Vec::new()
        }
    };

    for event in events {
        if let Some(scope) = apply_event(
            event,
            &mut restaurant_registry,
            &mut menu_registry,
            &mut restaurant_form.draft,
            &mut menu_form.draft,
            &mut qr_modal,
            &mut alert,
        ) {
            refresh.write(RefreshRequest(scope));
        }
    }
}

/// Apply one event to the controller state
///
/// Returns the collection that must be re-fetched, if any. Kept free of
/// Bevy system parameters so the transitions are unit testable.
pub fn apply_event(
    event: AdminEvent,
    restaurant_registry: &mut RestaurantRegistry,
    menu_registry: &mut MenuRegistry,
    restaurant_draft: &mut RestaurantDraft,
    menu_draft: &mut platter_core::MenuItemDraft,
    qr_modal: &mut QrModal,
    alert: &mut AlertDialog,
) -> Option<RefreshScope> {
    match event {
        AdminEvent::RestaurantsLoaded(restaurants) => {
            tracing::info!("Loaded {} restaurants", restaurants.len());
            restaurant_registry.apply_loaded(restaurants);
            None
        }
        AdminEvent::RestaurantsFailed(message) => {
            tracing::error!("Failed to load restaurants: {}", message);
            restaurant_registry.apply_error(message);
            None
        }
        AdminEvent::RestaurantCreated(restaurant) => {
            tracing::info!("Restaurant created: {}", restaurant.id);
            restaurant_draft.reset();
            alert.show("Restaurant created successfully!");
            Some(RefreshScope::Restaurants)
        }
        AdminEvent::RestaurantDeleted { id } => {
            tracing::info!("Restaurant deleted: {}", id);
            alert.show("Restaurant deleted successfully");
            Some(RefreshScope::Restaurants)
        }
        AdminEvent::QrGenerated { restaurant_id, qr } => {
            qr_modal.present(restaurant_id, &qr, timestamp_millis());
            None
        }
        AdminEvent::MenuItemsLoaded(items) => {
            tracing::info!("Loaded {} menu items", items.len());
            menu_registry.apply_loaded(items);
            None
        }
        AdminEvent::MenuItemsFailed(message) => {
            tracing::error!("Failed to load menu items: {}", message);
            menu_registry.apply_error(message);
            None
        }
        AdminEvent::MenuItemCreated(item) => {
            tracing::info!("Menu item created: {}", item.id);
            menu_draft.reset();
            alert.show("Menu item added successfully!");
            Some(RefreshScope::MenuItems)
        }
        AdminEvent::MenuItemDeleted { id } => {
            tracing::info!("Menu item deleted: {}", id);
            alert.show("Menu item deleted successfully");
            Some(RefreshScope::MenuItems)
        }
        AdminEvent::ActionFailed { message } => {
            tracing::error!("{}", message);
            alert.show(message);
            None
        }
    }
}

/// Re-fetch collections requested by this frame's events or the UI
fn handle_refresh(
    mut requests: MessageReader<RefreshRequest>,
    config: Res<BackendConfig>,
    pending: Res<PendingEvents>,
    filter: Res<MenuFilter>,
) {
    let mut restaurants = false;
    let mut menu_items = false;
    for RefreshRequest(scope) in requests.read() {
        match scope {
            RefreshScope::Restaurants => restaurants = true,
            RefreshScope::MenuItems => menu_items = true,
            RefreshScope::All => {
                restaurants = true;
                menu_items = true;
            }
        }
    }

    if restaurants {
        fetch_restaurants(&config.base_url, &pending);
    }
    if menu_items {
        fetch_menu_items(filter.restaurant_id.clone(), &config.base_url, &pending);
    }
}

/// Milliseconds since the epoch, for QR cache busting
pub fn timestamp_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default()
    }
}

// ============================================================================
// Fetch operations (called from systems and the UI)
// ============================================================================

/// Fetch all restaurants
pub fn fetch_restaurants(base_url: &str, pending: &PendingEvents) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::spawn_local;

        let url = format!("{}{}", base_url, api::restaurants());
        let pending = pending.clone();

        spawn_local(async move {
            tracing::debug!("Fetching restaurants from: {}", url);
            match gloo_net::http::Request::get(&url).send().await {
                Ok(response) if response.ok() => {
                    match response.json::<Vec<Restaurant>>().await {
                        Ok(restaurants) => pending.push(AdminEvent::RestaurantsLoaded(restaurants)),
                        Err(e) => pending.push(AdminEvent::RestaurantsFailed(e.to_string())),
                    }
                }
                Ok(response) => {
                    let err = failure_from(response).await;
                    pending.push(AdminEvent::RestaurantsFailed(err.to_string()));
                }
                Err(e) => {
                    pending.push(AdminEvent::RestaurantsFailed(
                        ApiError::network(e).to_string(),
                    ));
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (base_url, pending);
        tracing::warn!("Restaurant fetch not available in native mode");
    }
}

/// Submit the create-restaurant form as multipart form data
pub fn create_restaurant(draft: &RestaurantDraft, base_url: &str, pending: &PendingEvents) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::spawn_local;

        let url = format!("{}{}", base_url, api::restaurants());
        let fields = draft.fields();
        let logo = draft.logo.clone();
        let pending = pending.clone();

        spawn_local(async move {
            let mut files = Vec::new();
            if let Some(logo) = &logo {
                files.push(("logo", logo));
            }
            let form = match multipart_form(&fields, &files) {
                Ok(form) => form,
                Err(e) => {
                    pending.push(action_failed("Error creating restaurant", e));
                    return;
                }
            };

            tracing::info!("Creating restaurant at: {}", url);
            let request = match gloo_net::http::Request::post(&url).body(form) {
                Ok(request) => request,
                Err(e) => {
                    pending.push(action_failed("Error creating restaurant", e));
                    return;
                }
            };

            match request.send().await {
                Ok(response) if response.ok() => match response.json::<Restaurant>().await {
                    Ok(restaurant) => pending.push(AdminEvent::RestaurantCreated(restaurant)),
                    Err(e) => pending.push(action_failed("Error creating restaurant", e)),
                },
                Ok(response) => {
                    let err = failure_from(response).await;
                    pending.push(action_failed("Error creating restaurant", err));
                }
                Err(e) => {
                    pending.push(action_failed("Error creating restaurant", ApiError::network(e)))
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (draft, base_url, pending);
        tracing::warn!("Restaurant creation not available in native mode");
    }
}

/// Ask the backend to (re)generate a restaurant's QR code
pub fn generate_qr(restaurant_id: RestaurantId, base_url: &str, pending: &PendingEvents) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::spawn_local;

        let url = format!("{}{}", base_url, api::generate_qr(&restaurant_id));
        let pending = pending.clone();

        spawn_local(async move {
            tracing::info!("Generating QR code for restaurant: {}", restaurant_id);
            match gloo_net::http::Request::post(&url).send().await {
                Ok(response) if response.ok() => match response.json::<QrCode>().await {
                    Ok(qr) => pending.push(AdminEvent::QrGenerated { restaurant_id, qr }),
                    Err(e) => pending.push(action_failed("Error generating QR code", e)),
                },
                Ok(response) => {
                    let err = failure_from(response).await;
                    pending.push(action_failed("Error generating QR code", err));
                }
                Err(e) => {
                    pending.push(action_failed("Error generating QR code", ApiError::network(e)))
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (restaurant_id, base_url, pending);
        tracing::warn!("QR generation not available in native mode");
    }
}

/// Delete a restaurant (confirmation already accepted)
pub fn delete_restaurant(id: RestaurantId, base_url: &str, pending: &PendingEvents) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::spawn_local;

        let url = format!("{}{}", base_url, api::restaurant(&id));
        let pending = pending.clone();

        spawn_local(async move {
            tracing::info!("Deleting restaurant: {}", id);
            match gloo_net::http::Request::delete(&url).send().await {
                Ok(response) if response.ok() => {
                    pending.push(AdminEvent::RestaurantDeleted { id })
                }
                Ok(response) => {
                    let err = failure_from(response).await;
                    pending.push(action_failed("Error deleting restaurant", err));
                }
                Err(e) => {
                    pending.push(action_failed("Error deleting restaurant", ApiError::network(e)))
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, base_url, pending);
        tracing::warn!("Restaurant deletion not available in native mode");
    }
}

/// Fetch menu items for the current filter
///
/// With a filter this is one request; without one it fans out across
/// every restaurant and merges the results in order.
pub fn fetch_menu_items(
    filter: Option<RestaurantId>,
    base_url: &str,
    pending: &PendingEvents,
) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::spawn_local;

        let base_url = base_url.to_string();
        let pending = pending.clone();

        spawn_local(async move {
            let result = match MenuItemsRequest::for_filter(filter.as_ref()) {
                MenuItemsRequest::Single(path) => {
                    fetch_item_batch(&format!("{base_url}{path}")).await
                }
                MenuItemsRequest::FanOut => fetch_all_items(&base_url).await,
            };

            match result {
                Ok(items) => pending.push(AdminEvent::MenuItemsLoaded(items)),
                Err(e) => pending.push(AdminEvent::MenuItemsFailed(e.to_string())),
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (filter, base_url, pending);
        tracing::warn!("Menu item fetch not available in native mode");
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_item_batch(url: &str) -> Result<Vec<MenuItem>, ApiError> {
    tracing::debug!("Fetching menu items from: {}", url);
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(failure_from(response).await);
    }
    response.json::<Vec<MenuItem>>().await.map_err(ApiError::network)
}

/// Fan-out load: every restaurant, then each restaurant's items
#[cfg(target_arch = "wasm32")]
async fn fetch_all_items(base_url: &str) -> Result<Vec<MenuItem>, ApiError> {
    let url = format!("{}{}", base_url, api::restaurants());
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(failure_from(response).await);
    }
    let restaurants: Vec<Restaurant> = response.json().await.map_err(ApiError::network)?;

    let mut batches = Vec::with_capacity(restaurants.len());
    for restaurant in &restaurants {
        let url = format!("{}{}", base_url, api::restaurant_menu_items(&restaurant.id));
        batches.push(fetch_item_batch(&url).await?);
    }
    Ok(menu::merge_all(batches))
}

/// Submit a validated menu item as multipart form data
///
/// The restaurant id rides in the URL path and is excluded from the body.
pub fn create_menu_item(upload: MenuItemUpload, base_url: &str, pending: &PendingEvents) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::spawn_local;

        let url = format!(
            "{}{}",
            base_url,
            api::restaurant_menu_items(&upload.restaurant_id)
        );
        let pending = pending.clone();

        spawn_local(async move {
            let mut files = vec![("glb_file", &upload.glb)];
            if let Some(image) = &upload.image {
                files.push(("image", image));
            }
            let form = match multipart_form(&upload.fields, &files) {
                Ok(form) => form,
                Err(e) => {
                    pending.push(action_failed("Error adding menu item", e));
                    return;
                }
            };

            tracing::info!("Creating menu item at: {}", url);
            let request = match gloo_net::http::Request::post(&url).body(form) {
                Ok(request) => request,
                Err(e) => {
                    pending.push(action_failed("Error adding menu item", e));
                    return;
                }
            };

            match request.send().await {
                Ok(response) if response.ok() => match response.json::<MenuItem>().await {
                    Ok(item) => pending.push(AdminEvent::MenuItemCreated(item)),
                    Err(e) => pending.push(action_failed("Error adding menu item", e)),
                },
                Ok(response) => {
                    let err = failure_from(response).await;
                    pending.push(action_failed("Error adding menu item", err));
                }
                Err(e) => {
                    pending.push(action_failed("Error adding menu item", ApiError::network(e)))
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (upload, base_url, pending);
        tracing::warn!("Menu item creation not available in native mode");
    }
}

/// Delete a menu item (confirmation already accepted)
pub fn delete_menu_item(id: MenuItemId, base_url: &str, pending: &PendingEvents) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::spawn_local;

        let url = format!("{}{}", base_url, api::menu_item(&id));
        let pending = pending.clone();

        spawn_local(async move {
            tracing::info!("Deleting menu item: {}", id);
            match gloo_net::http::Request::delete(&url).send().await {
                Ok(response) if response.ok() => pending.push(AdminEvent::MenuItemDeleted { id }),
                Ok(response) => {
                    let err = failure_from(response).await;
                    pending.push(action_failed("Error deleting menu item", err));
                }
                Err(e) => {
                    pending.push(action_failed("Error deleting menu item", ApiError::network(e)))
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, base_url, pending);
        tracing::warn!("Menu item deletion not available in native mode");
    }
}

// ============================================================================
// WASM helpers
// ============================================================================

/// Normalize a non-2xx response into an [`ApiError`]
#[cfg(target_arch = "wasm32")]
async fn failure_from(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_response(status, &body)
}

fn action_failed(action: &str, err: impl std::fmt::Display) -> AdminEvent {
    AdminEvent::ActionFailed {
        message: format!("{action}: {err}"),
    }
}

/// Build a browser `FormData` from text fields and in-memory files
#[cfg(target_arch = "wasm32")]
fn multipart_form(
    fields: &[(&'static str, String)],
    files: &[(&str, &FileAttachment)],
) -> Result<web_sys::FormData, FormDataError> {
    let form = web_sys::FormData::new().map_err(FormDataError::from)?;
    for (key, value) in fields {
        form.append_with_str(key, value).map_err(FormDataError::from)?;
    }
    for (key, file) in files {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()).buffer());
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(FormDataError::from)?;
        form.append_with_blob_and_filename(key, &blob, &file.filename)
            .map_err(FormDataError::from)?;
    }
    Ok(form)
}

/// A JS-side failure while assembling form data
#[cfg(target_arch = "wasm32")]
#[derive(Debug)]
struct FormDataError(String);

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FormDataError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl std::fmt::Display for FormDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "form assembly failed: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platter_core::MenuItemDraft;

    struct Controller {
        restaurants: RestaurantRegistry,
        menu: MenuRegistry,
        restaurant_form: RestaurantFormState,
        menu_form: MenuFormState,
        qr_modal: QrModal,
        alert: AlertDialog,
    }

    impl Controller {
        fn new() -> Self {
            Self {
                restaurants: RestaurantRegistry::default(),
                menu: MenuRegistry::default(),
                restaurant_form: RestaurantFormState::default(),
                menu_form: MenuFormState::default(),
                qr_modal: QrModal::default(),
                alert: AlertDialog::default(),
            }
        }

        fn apply(&mut self, event: AdminEvent) -> Option<RefreshScope> {
            apply_event(
                event,
                &mut self.restaurants,
                &mut self.menu,
                &mut self.restaurant_form.draft,
                &mut self.menu_form.draft,
                &mut self.qr_modal,
                &mut self.alert,
            )
        }
    }

    fn restaurant(id: &str) -> Restaurant {
        serde_json::from_str(&format!(
            r#"{{"id": "{id}", "name": "name-{id}", "created_at": "2026-01-01T00:00:00Z"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_parse_query_param() {
        assert_eq!(
            BackendConfig::parse_query_param("?api=192.168.1.10%3A8000", "api"),
            Some("192.168.1.10:8000".to_string())
        );
        assert_eq!(
            BackendConfig::parse_query_param("?tab=menu&api=localhost:8000", "api"),
            Some("localhost:8000".to_string())
        );
        assert_eq!(BackendConfig::parse_query_param("?tab=menu", "api"), None);
    }

    #[test]
    fn test_from_address_adds_scheme() {
        assert_eq!(
            BackendConfig::from_address("192.168.1.10:8000").base_url,
            "http://192.168.1.10:8000"
        );
        assert_eq!(
            BackendConfig::from_address("https://menu.example/").base_url,
            "https://menu.example"
        );
    }

    #[test]
    fn test_created_event_resets_form_and_requests_reload() {
        let mut controller = Controller::new();
        controller.restaurant_form.draft.name = "La Brasserie".to_string();

        let scope = controller.apply(AdminEvent::RestaurantCreated(restaurant("r-1")));

        assert_eq!(scope, Some(RefreshScope::Restaurants));
        assert!(controller.restaurant_form.draft.name.is_empty());
        assert_eq!(
            controller.alert.message.as_deref(),
            Some("Restaurant created successfully!")
        );
    }

    #[test]
    fn test_menu_item_created_resets_scale_to_default() {
        let mut controller = Controller::new();
        controller.menu_form.draft.scale_factor = "3.0".to_string();

        let item_json = r#"{
            "id": "m-1", "restaurant_id": "r-1", "name": "Ramen", "price": 14.0,
            "glb_file_url": "/uploads/glb/m-1.glb", "created_at": "2026-02-01T12:00:00Z"
        }"#;
        let item: MenuItem = serde_json::from_str(item_json).unwrap();
        let scope = controller.apply(AdminEvent::MenuItemCreated(item));

        assert_eq!(scope, Some(RefreshScope::MenuItems));
        assert_eq!(
            controller.menu_form.draft,
            MenuItemDraft::default(),
            "form resets to defaults including scale"
        );
    }

    #[test]
    fn test_load_failure_sets_list_error_not_alert() {
        let mut controller = Controller::new();
        let scope = controller.apply(AdminEvent::RestaurantsFailed("boom".to_string()));

        assert_eq!(scope, None);
        assert!(controller.restaurants.error.is_some());
        assert!(controller.alert.message.is_none());
    }

    #[test]
    fn test_action_failure_raises_alert() {
        let mut controller = Controller::new();
        controller.apply(AdminEvent::ActionFailed {
            message: "Error deleting restaurant: request failed with status 404".to_string(),
        });
        assert_eq!(
            controller.alert.message.as_deref(),
            Some("Error deleting restaurant: request failed with status 404")
        );
    }

    #[test]
    fn test_qr_event_opens_modal_with_busted_src() {
        let mut controller = Controller::new();
        controller.apply(AdminEvent::QrGenerated {
            restaurant_id: RestaurantId::new("r-5"),
            qr: QrCode {
                qr_code_url: "/uploads/qr_codes/qr_r-5.png".to_string(),
                menu_url: "http://localhost:8000/menu/r-5".to_string(),
            },
        });

        assert!(controller.qr_modal.show);
        assert!(controller
            .qr_modal
            .image_src
            .starts_with("/uploads/qr_codes/qr_r-5.png?t="));
        assert_eq!(controller.qr_modal.menu_url, "http://localhost:8000/menu/r-5");
    }

    #[test]
    fn test_loaded_events_replace_registries() {
        let mut controller = Controller::new();
        controller.apply(AdminEvent::RestaurantsLoaded(vec![restaurant("r-1")]));
        controller.apply(AdminEvent::RestaurantsLoaded(vec![]));
        assert!(controller.restaurants.loaded);
        assert!(controller.restaurants.restaurants.is_empty());
    }
}
