/// Pointer events the globe understands.
/// Coordinates are in surface units, relative to the render surface.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A touch/click began at surface coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at surface coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to surface coordinates (x, y).
    PointerMove { x: f32, y: f32 },
}

/// A queue of input events.
/// The host writes events into the queue; the engine drains them each tick,
/// so a burst of moves inside one frame is replayed in order.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
