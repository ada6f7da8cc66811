/// Input event types the engine understands.
/// Generic — no game-specific semantics. Coordinates are screen pixels.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Primary/secondary pointer button pressed at (x, y).
    PointerDown { x: f32, y: f32, button: u8, ctrl: bool },
    /// Pointer button released at (x, y).
    PointerUp { x: f32, y: f32, ctrl: bool },
    /// Pointer moved to (x, y).
    PointerMove { x: f32, y: f32, ctrl: bool },
    /// Scroll wheel; positive delta = away from the user.
    Wheel { delta: f32 },
    /// A key was pressed. `repeat` is true for held-key auto-repeat.
    KeyDown { key_code: u32, repeat: bool },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The viewport was resized.
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer (overlay buttons, etc.).
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
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
