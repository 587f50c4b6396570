//! Form drafts and client-side validation for multipart submissions
//!
//! Drafts hold the raw text the user typed; `validate` turns a draft into
//! the field/file pairs the network layer appends to a browser `FormData`.
//! Validation failures surface as alert messages and never reach the
//! network.

use thiserror::Error;

use crate::restaurant::RestaurantId;

/// Default viewer scale for new menu items, restored on form reset
pub const DEFAULT_SCALE_FACTOR: &str = "1.0";

/// Placeholder shown next to a file input with nothing chosen
pub const NO_FILE_SELECTED: &str = "No file selected";

/// A file chosen through the browser picker, read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    pub fn is_glb(&self) -> bool {
        self.filename.to_ascii_lowercase().ends_with(".glb")
    }
}

/// Label for a file-input row: the chosen file name or the placeholder
pub fn attachment_label(attachment: Option<&FileAttachment>) -> &str {
    attachment
        .map(|a| a.filename.as_str())
        .unwrap_or(NO_FILE_SELECTED)
}

/// Client-side validation failure, worded for the alert dialog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select a restaurant")]
    NoRestaurantSelected,
    #[error("Please enter a {0}")]
    MissingField(&'static str),
    #[error("Please enter a valid price")]
    InvalidPrice,
    #[error("Scale factor must be a positive number")]
    InvalidScale,
    #[error("Please choose a GLB model file")]
    MissingModel,
    #[error("Only GLB files are supported")]
    NotGlb,
}

/// Draft of the create-restaurant form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantDraft {
    pub name: String,
    pub description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub logo: Option<FileAttachment>,
}

impl RestaurantDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("restaurant name"));
        }
        Ok(())
    }

    /// Multipart text fields; optional fields are skipped when empty so
    /// the backend sees them as absent rather than blank
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.trim().to_string())];
        for (key, value) in [
            ("description", &self.description),
            ("contact_email", &self.contact_email),
            ("contact_phone", &self.contact_phone),
            ("address", &self.address),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                fields.push((key, value.to_string()));
            }
        }
        fields
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Draft of the create-menu-item form
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemDraft {
    /// Selected restaurant; carried in the URL path, never in the body
    pub restaurant_id: Option<RestaurantId>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub scale_factor: String,
    pub is_available: bool,
    pub glb: Option<FileAttachment>,
    pub image: Option<FileAttachment>,
}

impl Default for MenuItemDraft {
    fn default() -> Self {
        Self {
            restaurant_id: None,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            scale_factor: DEFAULT_SCALE_FACTOR.to_string(),
            is_available: true,
            glb: None,
            image: None,
        }
    }
}

/// A validated menu item submission, ready for the network layer
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemUpload {
    pub restaurant_id: RestaurantId,
    pub fields: Vec<(&'static str, String)>,
    pub glb: FileAttachment,
    pub image: Option<FileAttachment>,
}

impl MenuItemDraft {
    pub fn validate(&self) -> Result<MenuItemUpload, FormError> {
        let restaurant_id = self
            .restaurant_id
            .clone()
            .ok_or(FormError::NoRestaurantSelected)?;

        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("menu item name"));
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidPrice)?;
        if !price.is_finite() || price < 0.0 {
            return Err(FormError::InvalidPrice);
        }

        let scale: f64 = self
            .scale_factor
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidScale)?;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FormError::InvalidScale);
        }

        let glb = self.glb.clone().ok_or(FormError::MissingModel)?;
        if !glb.is_glb() {
            return Err(FormError::NotGlb);
        }

        let mut fields = vec![
            ("name", self.name.trim().to_string()),
            ("price", price.to_string()),
            ("scale_factor", scale.to_string()),
            ("is_available", self.is_available.to_string()),
        ];
        for (key, value) in [("description", &self.description), ("category", &self.category)] {
            let value = value.trim();
            if !value.is_empty() {
                fields.push((key, value.to_string()));
            }
        }

        Ok(MenuItemUpload {
            restaurant_id,
            fields,
            glb,
            image: self.image.clone(),
        })
    }

    /// Clear the form after a successful submission, restoring the scale
    /// field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glb_file() -> FileAttachment {
        FileAttachment {
            filename: "burger.glb".to_string(),
            bytes: vec![0x67, 0x6c, 0x54, 0x46],
        }
    }

    fn valid_draft() -> MenuItemDraft {
        MenuItemDraft {
            restaurant_id: Some(RestaurantId::new("r-1")),
            name: "Burger".to_string(),
            price: "12.50".to_string(),
            glb: Some(glb_file()),
            ..MenuItemDraft::default()
        }
    }

    #[test]
    fn test_attachment_label() {
        assert_eq!(attachment_label(None), NO_FILE_SELECTED);
        assert_eq!(attachment_label(Some(&glb_file())), "burger.glb");
    }

    #[test]
    fn test_menu_item_requires_restaurant() {
        let draft = MenuItemDraft {
            restaurant_id: None,
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Err(FormError::NoRestaurantSelected));
    }

    #[test]
    fn test_menu_item_rejects_bad_price() {
        let draft = MenuItemDraft {
            price: "twelve".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Err(FormError::InvalidPrice));

        let draft = MenuItemDraft {
            price: "-3".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Err(FormError::InvalidPrice));
    }

    #[test]
    fn test_menu_item_requires_glb_extension() {
        let draft = MenuItemDraft {
            glb: Some(FileAttachment {
                filename: "burger.obj".to_string(),
                bytes: vec![],
            }),
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Err(FormError::NotGlb));
    }

    #[test]
    fn test_valid_menu_item_excludes_restaurant_id_from_fields() {
        let upload = valid_draft().validate().unwrap();
        assert_eq!(upload.restaurant_id.as_str(), "r-1");
        assert!(upload.fields.iter().all(|(key, _)| *key != "restaurant_id"));
        assert!(upload
            .fields
            .iter()
            .any(|(key, value)| *key == "price" && value == "12.5"));
    }

    #[test]
    fn test_empty_optionals_are_skipped() {
        let upload = valid_draft().validate().unwrap();
        assert!(upload.fields.iter().all(|(key, _)| *key != "description"));
        assert!(upload.fields.iter().all(|(key, _)| *key != "category"));
    }

    #[test]
    fn test_reset_restores_scale_default() {
        let mut draft = valid_draft();
        draft.scale_factor = "2.5".to_string();
        draft.reset();
        assert_eq!(draft.scale_factor, DEFAULT_SCALE_FACTOR);
        assert!(draft.restaurant_id.is_none());
        assert!(draft.glb.is_none());
    }

    #[test]
    fn test_restaurant_draft_requires_name() {
        let draft = RestaurantDraft::default();
        assert_eq!(
            draft.validate(),
            Err(FormError::MissingField("restaurant name"))
        );
    }

    #[test]
    fn test_restaurant_fields_skip_empty_optionals() {
        let draft = RestaurantDraft {
            name: "  La Brasserie ".to_string(),
            address: "12 Rue du Four".to_string(),
            ..RestaurantDraft::default()
        };
        assert_eq!(
            draft.fields(),
            vec![
                ("name", "La Brasserie".to_string()),
                ("address", "12 Rue du Four".to_string()),
            ]
        );
    }
}
