//! Browser file picker for form uploads
//!
//! Wraps a hidden HTML `<input type="file">` element. Picked files are
//! read into memory by a JavaScript callback and queued; a system moves
//! them into the matching form draft on the next frame.

use bevy::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use platter_core::FileAttachment;

use crate::app::{MenuFormState, RestaurantFormState};

pub struct FilePickerPlugin;

impl Plugin for FilePickerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingFileResults>()
            .add_systems(Update, apply_picked_files);
    }
}

/// Which form input the picker is feeding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePickerContext {
    /// Restaurant logo image
    RestaurantLogo,
    /// Menu item GLB model
    MenuModel,
    /// Menu item photo
    MenuImage,
}

/// File filter for the picker dialog
#[derive(Debug, Clone)]
pub struct FileFilter {
    /// File extensions without dots (e.g., ["glb"])
    pub extensions: Vec<&'static str>,
}

impl FileFilter {
    pub fn glb() -> Self {
        Self {
            extensions: vec!["glb"],
        }
    }

    pub fn images() -> Self {
        Self {
            extensions: vec!["png", "jpg", "jpeg", "webp"],
        }
    }

    /// Convert to accept string for the HTML input element
    pub fn to_accept_string(&self) -> String {
        if self.extensions.is_empty() {
            "*".to_string()
        } else {
            self.extensions
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(",")
        }
    }
}

/// A file picked by the user, read into memory
#[derive(Debug, Clone)]
pub struct FilePickerResult {
    pub context: FilePickerContext,
    pub attachment: FileAttachment,
}

/// Pending picked files from JavaScript callbacks
#[derive(Resource, Default)]
pub struct PendingFileResults(pub Arc<Mutex<VecDeque<FilePickerResult>>>);

/// Attach picked files to the form drafts
fn apply_picked_files(
    pending: Res<PendingFileResults>,
    mut restaurant_form: ResMut<RestaurantFormState>,
    mut menu_form: ResMut<MenuFormState>,
) {
    if let Ok(mut results) = pending.0.lock() {
        while let Some(result) = results.pop_front() {
            tracing::info!(
                "File picked for {:?}: {}",
                result.context,
                result.attachment.filename
            );
            match result.context {
                FilePickerContext::RestaurantLogo => {
                    restaurant_form.draft.logo = Some(result.attachment)
                }
                FilePickerContext::MenuModel => menu_form.draft.glb = Some(result.attachment),
                FilePickerContext::MenuImage => menu_form.draft.image = Some(result.attachment),
            }
        }
    }
}

/// Open the browser file dialog for the given form input
pub fn trigger_file_open(
    pending: &PendingFileResults,
    context: FilePickerContext,
    filter: FileFilter,
) {
    let accept = filter.to_accept_string();
    tracing::debug!("Opening file picker: accept={}, context={:?}", accept, context);
    js_interop::open_file_picker(&accept, pending.0.clone(), context);
}

// ============================================================================
// JavaScript Interop (WASM only)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod js_interop {
    use super::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlInputElement;

    /// Open a file picker dialog using a hidden HTML input element
    pub fn open_file_picker(
        accept: &str,
        pending_results: Arc<Mutex<VecDeque<FilePickerResult>>>,
        context: FilePickerContext,
    ) {
        let Some(window) = web_sys::window() else {
            tracing::error!("open_file_picker: no window object");
            return;
        };
        let Some(document) = window.document() else {
            tracing::error!("open_file_picker: no document object");
            return;
        };

        let input: HtmlInputElement = match document.create_element("input") {
            Ok(el) => match el.dyn_into::<HtmlInputElement>() {
                Ok(input) => input,
                Err(_) => {
                    tracing::error!("open_file_picker: failed to cast to HtmlInputElement");
                    return;
                }
            },
            Err(e) => {
                tracing::error!("open_file_picker: failed to create input element: {:?}", e);
                return;
            }
        };

        input.set_type("file");
        input.set_accept(accept);
        input.style().set_property("display", "none").ok();

        // Append to body temporarily
        if let Some(body) = document.body() {
            if let Err(e) = body.append_child(&input) {
                tracing::error!("open_file_picker: failed to append input to body: {:?}", e);
                return;
            }
        } else {
            tracing::error!("open_file_picker: no document body");
            return;
        }

        // Read the chosen file on change, then remove the input
        let input_clone = input.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(files) = input_clone.files() {
                if let Some(file) = files.get(0) {
                    let filename = file.name();
                    let pending = pending_results.clone();

                    let reader = match web_sys::FileReader::new() {
                        Ok(reader) => reader,
                        Err(e) => {
                            tracing::error!("open_file_picker: FileReader failed: {:?}", e);
                            return;
                        }
                    };
                    let reader_clone = reader.clone();

                    let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
                        let Ok(result) = reader_clone.result() else {
                            tracing::error!("open_file_picker: read failed");
                            return;
                        };
                        let Ok(array_buffer) = result.dyn_into::<js_sys::ArrayBuffer>() else {
                            return;
                        };
                        let bytes = js_sys::Uint8Array::new(&array_buffer).to_vec();

                        if let Ok(mut results) = pending.lock() {
                            results.push_back(FilePickerResult {
                                context,
                                attachment: FileAttachment {
                                    filename: filename.clone(),
                                    bytes,
                                },
                            });
                        }
                    }) as Box<dyn FnMut(_)>);

                    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
                    onload.forget();

                    reader.read_as_array_buffer(&file).ok();
                }
            }

            if let Some(parent) = input_clone.parent_node() {
                parent.remove_child(&input_clone).ok();
            }
        }) as Box<dyn FnMut(_)>);

        input.set_onchange(Some(closure.as_ref().unchecked_ref()));
        closure.forget();

        input.click();
    }
}

// Non-WASM stub
#[cfg(not(target_arch = "wasm32"))]
mod js_interop {
    use super::*;

    pub fn open_file_picker(
        _accept: &str,
        _pending_results: Arc<Mutex<VecDeque<FilePickerResult>>>,
        context: FilePickerContext,
    ) {
        tracing::warn!("File picker not supported on this platform: {:?}", context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_strings() {
        assert_eq!(FileFilter::glb().to_accept_string(), ".glb");
        assert_eq!(
            FileFilter::images().to_accept_string(),
            ".png,.jpg,.jpeg,.webp"
        );
    }
}
