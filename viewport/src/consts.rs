//! Shared numeric constants for the viewport crate.

// ── Scale limits ────────────────────────────────────────────────

/// Smallest allowed scale; the image is shown at its fitted size.
pub const MIN_SCALE: f64 = 1.0;

/// Largest allowed scale.
pub const MAX_SCALE: f64 = 4.0;

// ── Zoom steps ──────────────────────────────────────────────────

/// Multiplier applied per wheel notch that scrolls up (zoom in).
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 1.1;

/// Multiplier applied per wheel notch that scrolls down (zoom out).
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 0.9;

/// Additive step for the explicit +/- buttons.
pub const BUTTON_ZOOM_STEP: f64 = 0.25;

/// Zooming out with the minus button to a scale at or below this value
/// recenters the image.
pub const SNAP_BACK_SCALE: f64 = 1.1;

// ── Rendering ───────────────────────────────────────────────────

/// CSS transition used for discrete zoom steps when not dragging.
pub const TRANSFORM_TRANSITION: &str = "transform 0.25s ease";
