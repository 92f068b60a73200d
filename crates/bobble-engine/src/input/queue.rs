use glam::Vec2;

/// Which pointer button an event refers to.
/// Values follow the DOM `MouseEvent.button` numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
}

impl PointerButton {
    /// Map a DOM button index. Unknown buttons (back/forward) map to `None`.
    pub fn from_dom(button: u32) -> Option<Self> {
        match button {
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Input event types the engine understands.
/// No game-specific semantics. Coordinates are logical surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button was pressed at (x, y).
    PointerDown { x: f32, y: f32, button: PointerButton },
    /// A button was released at (x, y).
    PointerUp { x: f32, y: f32, button: PointerButton },
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed (DOM `keyCode`).
    KeyDown { key_code: u32 },
    /// A key was released (DOM `keyCode`).
    KeyUp { key_code: u32 },
    /// A custom event from the UI layer.
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS pushes events between frames; the runner hands them to the next step.
#[derive(Debug, Clone)]
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

    /// Move all pending events into a fresh queue, leaving this one empty.
    pub fn take(&mut self) -> InputQueue {
        InputQueue {
            events: std::mem::take(&mut self.events),
        }
    }

    /// Iterate over pending events in arrival order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps client (CSS pixel) coordinates onto the fixed logical surface.
///
/// The canvas may be letterboxed or scaled by the page; the element's bounding
/// rect is captured by the host and the mapping is a plain per-axis scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMap {
    /// Top-left corner of the drawing element in client space.
    pub origin: Vec2,
    /// Displayed size of the drawing element in client space.
    pub displayed: Vec2,
    /// Logical surface size.
    pub logical: Vec2,
}

impl ViewportMap {
    pub fn new(origin: Vec2, displayed: Vec2, logical: Vec2) -> Self {
        Self { origin, displayed, logical }
    }

    /// Convert a client position to logical units.
    /// A collapsed element (zero displayed size) maps everything to the origin.
    pub fn to_logical(&self, client: Vec2) -> Vec2 {
        if self.displayed.x <= 0.0 || self.displayed.y <= 0.0 {
            return Vec2::ZERO;
        }
        (client - self.origin) * (self.logical / self.displayed)
    }
}
