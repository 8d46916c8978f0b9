//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (blocking dialogs, file
//! downloads) from page and component logic to improve reuse and
//! testability.

pub mod dialog;
pub mod download;
pub mod task;
