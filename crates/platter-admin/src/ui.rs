//! Admin UI panels using bevy_egui
//!
//! One tab is visible at a time. Forms and list cards issue network
//! calls directly; destructive actions route through the confirm
//! dialog first. Validation failures raise the alert dialog and never
//! reach the network.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use platter_core::{api, form, MenuItemDraft, Restaurant, RestaurantDraft};

use crate::app::{
    AdminTab, AlertDialog, ConfirmDialog, DeleteTarget, ListState, MenuFilter, MenuFormState,
    MenuRegistry, QrModal, RestaurantFormState, RestaurantRegistry,
};
use crate::browser;
use crate::file_picker::{trigger_file_open, FileFilter, FilePickerContext, PendingFileResults};
use crate::network::{self, BackendConfig, PendingEvents, RefreshRequest, RefreshScope};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Main UI system runs in EguiPrimaryContextPass for proper input
        // handling (bevy_egui 0.38+)
        app.add_systems(EguiPrimaryContextPass, ui_system);
    }
}

#[allow(clippy::too_many_arguments)]
fn ui_system(
    mut contexts: EguiContexts,
    mut tab: ResMut<AdminTab>,
    restaurant_registry: Res<RestaurantRegistry>,
    menu_registry: Res<MenuRegistry>,
    mut filter: ResMut<MenuFilter>,
    mut restaurant_form: ResMut<RestaurantFormState>,
    mut menu_form: ResMut<MenuFormState>,
    mut qr_modal: ResMut<QrModal>,
    mut confirm: ResMut<ConfirmDialog>,
    mut alert: ResMut<AlertDialog>,
    config: Res<BackendConfig>,
    pending: Res<PendingEvents>,
    picker_pending: Res<PendingFileResults>,
    mut refresh: MessageWriter<RefreshRequest>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    // Tab bar
    egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Platter Admin");
            ui.separator();
            if ui
                .selectable_label(*tab == AdminTab::Restaurants, "Restaurants")
                .clicked()
            {
                *tab = AdminTab::Restaurants;
            }
            if ui
                .selectable_label(*tab == AdminTab::MenuItems, "Menu Items")
                .clicked()
                && *tab != AdminTab::MenuItems
            {
                *tab = AdminTab::MenuItems;
                // Entering the menu tab refreshes both the restaurant
                // dropdown and the item list
                refresh.write(RefreshRequest(RefreshScope::All));
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| match *tab {
            AdminTab::Restaurants => restaurants_tab(
                ui,
                &restaurant_registry,
                &mut restaurant_form.draft,
                &mut confirm,
                &mut alert,
                &config,
                &pending,
                &picker_pending,
            ),
            AdminTab::MenuItems => menu_tab(
                ui,
                &restaurant_registry,
                &menu_registry,
                &mut filter,
                &mut menu_form.draft,
                &mut confirm,
                &mut alert,
                &config,
                &pending,
                &picker_pending,
                &mut refresh,
            ),
        });
    });

    qr_modal_window(ctx, &mut qr_modal, &config);
    confirm_window(ctx, &mut confirm, &config, &pending);
    alert_window(ctx, &mut alert);
}

// ============================================================================
// Restaurants tab
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn restaurants_tab(
    ui: &mut egui::Ui,
    registry: &RestaurantRegistry,
    draft: &mut RestaurantDraft,
    confirm: &mut ConfirmDialog,
    alert: &mut AlertDialog,
    config: &BackendConfig,
    pending: &PendingEvents,
    picker_pending: &PendingFileResults,
) {
    ui.heading("Add Restaurant");
    ui.add_space(4.0);

    egui::Grid::new("restaurant_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut draft.name);
            ui.end_row();

            ui.label("Description:");
            ui.text_edit_multiline(&mut draft.description);
            ui.end_row();

            ui.label("Contact email:");
            ui.text_edit_singleline(&mut draft.contact_email);
            ui.end_row();

            ui.label("Contact phone:");
            ui.text_edit_singleline(&mut draft.contact_phone);
            ui.end_row();

            ui.label("Address:");
            ui.text_edit_singleline(&mut draft.address);
            ui.end_row();

            ui.label("Logo:");
            ui.horizontal(|ui| {
                if ui.button("Choose File").clicked() {
                    trigger_file_open(
                        picker_pending,
                        FilePickerContext::RestaurantLogo,
                        FileFilter::images(),
                    );
                }
                ui.label(form::attachment_label(draft.logo.as_ref()));
            });
            ui.end_row();
        });

    ui.add_space(4.0);
    if ui.button("Create Restaurant").clicked() {
        match draft.validate() {
            Ok(()) => network::create_restaurant(draft, &config.base_url, pending),
            Err(e) => alert.show(e.to_string()),
        }
    }

    ui.separator();
    ui.heading("Restaurants");
    ui.add_space(4.0);

    match registry.state() {
        ListState::Loading => {
            ui.label("Loading restaurants...");
        }
        ListState::Error => {
            ui.label(RestaurantRegistry::ERROR_STATE);
        }
        ListState::Empty => {
            ui.label(RestaurantRegistry::EMPTY_STATE);
        }
        ListState::Loaded => {
            for restaurant in &registry.restaurants {
                restaurant_card(ui, restaurant, confirm, config, pending);
            }
            ui.add_space(4.0);
            ui.label(format!("{} restaurants", registry.restaurants.len()));
        }
    }
}

fn restaurant_card(
    ui: &mut egui::Ui,
    restaurant: &Restaurant,
    confirm: &mut ConfirmDialog,
    config: &BackendConfig,
    pending: &PendingEvents,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong(&restaurant.name);
                ui.label(restaurant.description_or_default());
                ui.label(
                    egui::RichText::new(restaurant.created_label())
                        .size(11.0)
                        .color(egui::Color32::GRAY),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Delete").clicked() {
                    confirm.request(DeleteTarget::Restaurant(restaurant.id.clone()));
                }
                if ui.button("QR Code").clicked() {
                    network::generate_qr(restaurant.id.clone(), &config.base_url, pending);
                }
                if ui.button("View Menu").clicked() {
                    let url = format!(
                        "{}{}",
                        config.base_url,
                        api::menu_viewer(restaurant.id.as_str())
                    );
                    browser::open_in_new_tab(&url);
                }
            });
        });
    });
}

// ============================================================================
// Menu items tab
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn menu_tab(
    ui: &mut egui::Ui,
    restaurants: &RestaurantRegistry,
    registry: &MenuRegistry,
    filter: &mut MenuFilter,
    draft: &mut MenuItemDraft,
    confirm: &mut ConfirmDialog,
    alert: &mut AlertDialog,
    config: &BackendConfig,
    pending: &PendingEvents,
    picker_pending: &PendingFileResults,
    refresh: &mut MessageWriter<RefreshRequest>,
) {
    ui.heading("Add Menu Item");
    ui.add_space(4.0);

    // Restaurant dropdown, fed from the last restaurant fetch
    let selected_label = draft
        .restaurant_id
        .as_ref()
        .and_then(|id| restaurants.name_of(id))
        .unwrap_or("-- Select Restaurant --")
        .to_string();
    egui::ComboBox::from_label("Restaurant")
        .selected_text(selected_label)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(draft.restaurant_id.is_none(), "-- Select Restaurant --")
                .clicked()
            {
                draft.restaurant_id = None;
            }
            for restaurant in &restaurants.restaurants {
                if ui
                    .selectable_label(
                        draft.restaurant_id.as_ref() == Some(&restaurant.id),
                        &restaurant.name,
                    )
                    .clicked()
                {
                    draft.restaurant_id = Some(restaurant.id.clone());
                }
            }
        });

    egui::Grid::new("menu_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut draft.name);
            ui.end_row();

            ui.label("Description:");
            ui.text_edit_multiline(&mut draft.description);
            ui.end_row();

            ui.label("Price:");
            ui.text_edit_singleline(&mut draft.price);
            ui.end_row();

            ui.label("Category:");
            ui.text_edit_singleline(&mut draft.category);
            ui.end_row();

            ui.label("Model scale:");
            ui.text_edit_singleline(&mut draft.scale_factor);
            ui.end_row();

            ui.label("Available:");
            ui.checkbox(&mut draft.is_available, "");
            ui.end_row();

            ui.label("3D model (GLB):");
            ui.horizontal(|ui| {
                if ui.button("Choose File").clicked() {
                    trigger_file_open(
                        picker_pending,
                        FilePickerContext::MenuModel,
                        FileFilter::glb(),
                    );
                }
                ui.label(form::attachment_label(draft.glb.as_ref()));
            });
            ui.end_row();

            ui.label("Photo:");
            ui.horizontal(|ui| {
                if ui.button("Choose File").clicked() {
                    trigger_file_open(
                        picker_pending,
                        FilePickerContext::MenuImage,
                        FileFilter::images(),
                    );
                }
                ui.label(form::attachment_label(draft.image.as_ref()));
            });
            ui.end_row();
        });

    ui.add_space(4.0);
    if ui.button("Add Menu Item").clicked() {
        match draft.validate() {
            Ok(upload) => network::create_menu_item(upload, &config.base_url, pending),
            Err(e) => alert.show(e.to_string()),
        }
    }

    ui.separator();
    ui.horizontal(|ui| {
        ui.heading("Menu Items");
        ui.separator();

        // Filter dropdown; changing it reloads the list
        let filter_label = filter
            .restaurant_id
            .as_ref()
            .and_then(|id| restaurants.name_of(id))
            .unwrap_or("-- All Restaurants --")
            .to_string();
        let mut changed = false;
        egui::ComboBox::from_id_salt("menu_filter")
            .selected_text(filter_label)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(filter.restaurant_id.is_none(), "-- All Restaurants --")
                    .clicked()
                    && filter.restaurant_id.is_some()
                {
                    filter.restaurant_id = None;
                    changed = true;
                }
                for restaurant in &restaurants.restaurants {
                    if ui
                        .selectable_label(
                            filter.restaurant_id.as_ref() == Some(&restaurant.id),
                            &restaurant.name,
                        )
                        .clicked()
                        && filter.restaurant_id.as_ref() != Some(&restaurant.id)
                    {
                        filter.restaurant_id = Some(restaurant.id.clone());
                        changed = true;
                    }
                }
            });
        if changed {
            refresh.write(RefreshRequest(RefreshScope::MenuItems));
        }
    });
    ui.add_space(4.0);

    match registry.state() {
        ListState::Loading => {
            ui.label("Loading menu items...");
        }
        ListState::Error => {
            ui.label(MenuRegistry::ERROR_STATE);
        }
        ListState::Empty => {
            ui.label(MenuRegistry::EMPTY_STATE);
        }
        ListState::Loaded => {
            for item in &registry.items {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(&item.name);
                            ui.label(item.description_or_default());
                            ui.label(format!(
                                "Price: {} | Category: {} | Available: {}",
                                item.price_label(),
                                item.category_or_default(),
                                item.availability_label()
                            ));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Delete").clicked() {
                                confirm.request(DeleteTarget::MenuItem(item.id.clone()));
                            }
                            if ui.button("Preview").clicked() {
                                let url = format!(
                                    "{}{}",
                                    config.base_url,
                                    api::menu_viewer(item.id.as_str())
                                );
                                browser::open_in_new_tab(&url);
                            }
                        });
                    });
                });
            }
            ui.add_space(4.0);
            ui.label(format!("{} menu items", registry.items.len()));
        }
    }
}

// ============================================================================
// Modal windows
// ============================================================================

fn qr_modal_window(ctx: &egui::Context, qr_modal: &mut QrModal, config: &BackendConfig) {
    if !qr_modal.show {
        return;
    }

    egui::Window::new("Restaurant QR Code")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(320.0);

            ui.label("Scan to open the public menu:");
            ui.label(egui::RichText::new(&qr_modal.menu_url).monospace());
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(&qr_modal.image_src)
                    .size(11.0)
                    .color(egui::Color32::GRAY),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let image_url = format!("{}{}", config.base_url, qr_modal.image_src);
                if ui.button("Open Image").clicked() {
                    browser::open_in_new_tab(&image_url);
                }
                if ui.button("Download").clicked() {
                    browser::download_url(&image_url, &qr_modal.download_filename());
                }
                if ui.button("Close").clicked() {
                    qr_modal.close();
                }
            });
        });
}

fn confirm_window(
    ctx: &egui::Context,
    confirm: &mut ConfirmDialog,
    config: &BackendConfig,
    pending: &PendingEvents,
) {
    let Some(message) = confirm.pending.as_ref().map(|t| t.confirm_message()) else {
        return;
    };

    let mut accepted = false;
    egui::Window::new("Confirm Delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.label(message);
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    accepted = true;
                }
                if ui.button("Cancel").clicked() {
                    confirm.cancel();
                }
            });
        });

    // Only an accepted confirmation reaches the network
    if accepted {
        match confirm.accept() {
            Some(DeleteTarget::Restaurant(id)) => {
                network::delete_restaurant(id, &config.base_url, pending)
            }
            Some(DeleteTarget::MenuItem(id)) => {
                network::delete_menu_item(id, &config.base_url, pending)
            }
            None => {}
        }
    }
}

fn alert_window(ctx: &egui::Context, alert: &mut AlertDialog) {
    let Some(message) = alert.message.clone() else {
        return;
    };

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.label(message);
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                alert.dismiss();
            }
        });
}
