//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `gallery`, `auth`) so pages and
//! components depend on small focused models.

pub mod auth;
pub mod gallery;
pub mod session;
