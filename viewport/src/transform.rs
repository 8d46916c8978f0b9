#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use std::ops::Sub;

use crate::consts::{MAX_SCALE, MIN_SCALE};

/// A position in CSS pixels, usually a pointer's client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Scale and translation applied to the viewed image.
///
/// `offset_x` / `offset_y` are in CSS pixels and applied before the scale,
/// matching `translate(..) scale(..)` ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self { scale: MIN_SCALE, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl ViewportTransform {
    /// Current offset as a point.
    #[must_use]
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset_x = offset.x;
        self.offset_y = offset.y;
    }

    /// Return the image to its resting position without touching scale.
    pub fn recenter(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Set the scale, clamped to `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// A non-finite request falls back to `MIN_SCALE`.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_scale(scale);
    }

    /// CSS `transform` value for the image element.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset_x, self.offset_y, self.scale
        )
    }
}

/// Clamp a candidate scale into the allowed range.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
