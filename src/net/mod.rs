//! Networking modules for the remote photo API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `PhotoApi` seam and its `gloo-net` implementation,
//! `types` holds the JSON wire schema, `error` the failure taxonomy, and
//! `upload` wraps browser file handles for multipart requests.

pub mod api;
pub mod error;
pub mod types;
pub mod upload;
