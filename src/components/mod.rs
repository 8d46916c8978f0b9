//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces. They receive
//! state signals and callbacks from the owning page and never call the API
//! themselves.

pub mod auth_layout;
pub mod password_field;
pub mod photo_card;
pub mod photo_modal;
pub mod profile_header;
pub mod upload_card;
pub mod zoomable_image;
