//! Screen orchestration over the API and session seams.
//!
//! ARCHITECTURE
//! ============
//! Services never touch the DOM and never navigate. Each takes a
//! [`crate::net::api::PhotoApi`] and a [`crate::state::session::SessionStore`],
//! updates the session when the flow requires it, and returns an outcome the
//! page turns into navigation, notices, and signal updates.

pub mod auth;
pub mod gallery;

#[cfg(test)]
pub(crate) mod test_support;
