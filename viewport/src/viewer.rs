//! Interactive pan/zoom state for a single image.
//!
//! `ZoomPanViewer` owns the current [`ViewportTransform`] and, while the
//! pointer is held on a zoomed image, a [`DragSession`]. Host code forwards
//! raw wheel and pointer input and reads back the transform, transition and
//! cursor to render.
//!
//! Panning is only possible when zoomed in. The drag origin is stored as
//! `pointer - offset` at pointer-down, so every subsequent move sets the
//! offset directly from the pointer position and cannot accumulate drift.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::consts::{
    BUTTON_ZOOM_STEP, MIN_SCALE, SNAP_BACK_SCALE, TRANSFORM_TRANSITION, WHEEL_ZOOM_IN_FACTOR,
    WHEEL_ZOOM_OUT_FACTOR,
};
use crate::transform::{Point, ViewportTransform};

/// An in-progress drag, alive between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at pointer-down minus the offset at that moment.
    pub origin: Point,
}

/// Pointer cursor affordance for the viewer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Not zoomed; nothing to grab.
    #[default]
    Default,
    /// Zoomed and idle; the image can be grabbed.
    Grab,
    /// A drag session is active.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` property value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Pan/zoom state machine for the image viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomPanViewer {
    transform: ViewportTransform,
    drag: Option<DragSession>,
}

impl ZoomPanViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the image is magnified beyond its fitted size.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.transform.scale > MIN_SCALE
    }

    /// Apply one wheel event.
    ///
    /// Negative `delta_y` (scrolling up) zooms in; anything else zooms out.
    /// Offset is left untouched.
    pub fn on_wheel(&mut self, delta_y: f64) {
        let factor = if delta_y < 0.0 { WHEEL_ZOOM_IN_FACTOR } else { WHEEL_ZOOM_OUT_FACTOR };
        self.transform.set_scale(self.transform.scale * factor);
    }

    /// Begin a drag at `position`. Returns `true` if a session started.
    ///
    /// Ignored while unzoomed.
    pub fn on_pointer_down(&mut self, position: Point) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        self.drag = Some(DragSession { origin: position - self.transform.offset() });
        true
    }

    /// Track the pointer during a drag. Returns `true` if the offset changed.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        let Some(session) = self.drag else {
            return false;
        };
        self.transform.set_offset(position - session.origin);
        true
    }

    /// End any drag session.
    pub fn on_pointer_up(&mut self) {
        self.drag = None;
    }

    /// The browser took the pointer away mid-drag. Ends the session where it
    /// stands, like a release.
    pub fn on_pointer_cancel(&mut self) {
        self.on_pointer_up();
    }

    /// Step the scale up by one button increment.
    pub fn zoom_in(&mut self) {
        self.transform.set_scale(self.transform.scale + BUTTON_ZOOM_STEP);
    }

    /// Step the scale down by one button increment, recentering the image
    /// once the result is at or below the snap-back threshold.
    pub fn zoom_out(&mut self) {
        self.transform.set_scale(self.transform.scale - BUTTON_ZOOM_STEP);
        if self.transform.scale <= SNAP_BACK_SCALE {
            self.transform.recenter();
        }
    }

    /// Return to the unzoomed resting state and drop any drag session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.is_dragging() {
            Cursor::Grabbing
        } else if self.is_zoomed() {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }

    #[must_use]
    pub fn css_transform(&self) -> String {
        self.transform.css_transform()
    }

    /// CSS `transition` value. Easing is suspended while dragging so the
    /// image tracks the pointer without lag.
    #[must_use]
    pub fn css_transition(&self) -> &'static str {
        if self.is_dragging() { "none" } else { TRANSFORM_TRANSITION }
    }
}
