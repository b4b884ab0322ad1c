//! Drag-to-rotate interaction.
//!
//! A two-state machine (idle, dragging) that converts pointer movement
//! into an absolute rotation assignment on the projection.

use glam::Vec2;
use crate::core::projection::Orthographic;

/// Interaction state of a drag controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No active gesture.
    Idle,
    /// A pointer is held and moves rotate the globe.
    Dragging,
}

/// Outcome of offering a pointer-down to a controller.
///
/// Dispatch contract: the first controller that returns `Claimed` owns the
/// gesture for its whole duration, and the dispatcher must not offer the
/// event to any surface beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Claimed,
    Ignored,
}

/// Converts pointer gestures into rotation assignments.
///
/// On pointer-down the controller snapshots a drag origin from the current
/// rotation as `(lambda, -phi)`. Each move then produces the absolute drag
/// coordinate `origin + (pointer - press)` and assigns the rotation to
/// `(x, -y)` directly. No incremental deltas: one surface unit of pointer
/// travel is one degree of rotation, and the vertical axis inverts because
/// surface Y grows downward while latitude grows upward.
pub struct DragController {
    state: DragState,
    /// Rotation-derived drag origin captured at pointer-down.
    origin: Vec2,
    /// Surface position of the pointer-down.
    press: Vec2,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            origin: Vec2::ZERO,
            press: Vec2::ZERO,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a gesture is in progress. The host mirrors this as a
    /// "dragging" style on the render surface.
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Begin a gesture. Always claims the event; see [`Capture`] for the
    /// exclusivity contract between stacked surfaces.
    pub fn on_pointer_down(&mut self, pos: Vec2, projection: &Orthographic) -> Capture {
        let r = projection.rotation();
        self.origin = Vec2::new(r[0], -r[1]);
        self.press = pos;
        self.state = DragState::Dragging;
        Capture::Claimed
    }

    /// Advance a gesture. Returns true when the rotation changed.
    /// Moves without a preceding pointer-down are ignored.
    pub fn on_pointer_move(&mut self, pos: Vec2, projection: &mut Orthographic) -> bool {
        if self.state != DragState::Dragging {
            return false;
        }
        let drag = self.origin + (pos - self.press);
        projection.set_rotation(drag.x, -drag.y);
        true
    }

    /// End the gesture. Idempotent when already idle.
    pub fn on_pointer_up(&mut self, _pos: Vec2) {
        self.state = DragState::Idle;
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
