//! Per-match bookkeeping that lives beside the entity world.

/// Frame clock; unset until the driver delivers its first timestamp
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    pub last_frame_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Kind of key transition reported by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// A single key transition with its numeric key identifier
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub code: u32,
}

/// Queue of key events delivered since the last frame
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<KeyEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: KeyEventKind, code: u32) {
        self.events.push(KeyEvent { kind, code });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// A scheduled serve: the ball is parked at the arena midpoint until the
/// real-time deadline passes, then released toward the conceding side.
///
/// Scheduling a new serve overwrites any outstanding one, so two goals in
/// quick succession can never race two releases against each other.
#[derive(Debug, Clone, Copy)]
pub struct PendingServe {
    pub deadline_ms: f64,
    /// +1.0 serves toward the right side, -1.0 toward the left
    pub direction: f32,
}
