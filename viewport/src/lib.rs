//! Pan/zoom engine for the photo viewer.
//!
//! This crate has no browser dependencies. It turns wheel notches, pointer
//! positions, and +/- button presses into a [`transform::ViewportTransform`]
//! that the UI applies to an `<img>` element as a CSS transform. Keeping the
//! math here lets it be exercised natively without a DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewer`] | Interactive state: transform, drag session, cursor |
//! | [`transform`] | Points, the scale/offset transform, CSS rendering |
//! | [`consts`] | Zoom limits, step sizes, snap-back threshold |

pub mod consts;
pub mod transform;
pub mod viewer;

pub use transform::{Point, ViewportTransform};
pub use viewer::{Cursor, ZoomPanViewer};
