//! Platter Core - Shared types for the Platter admin frontend
//!
//! This crate provides the foundational types for the Platter system:
//! - Restaurant and menu item models as served by the backend API
//! - REST endpoint paths and menu viewer routes
//! - Form drafts with client-side validation for multipart submissions
//! - Normalized error handling for backend responses

pub mod api;
pub mod error;
pub mod form;
pub mod menu;
pub mod restaurant;

pub use api::{MenuItemsRequest, QrCode};
pub use error::ApiError;
pub use form::{FileAttachment, FormError, MenuItemDraft, MenuItemUpload, RestaurantDraft};
pub use menu::{MenuItem, MenuItemId};
pub use restaurant::{Restaurant, RestaurantId};
