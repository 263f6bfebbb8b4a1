//! Match entities: the ball and the two paddles.
//!
//! These carry both their data and the small per-entity update rules; the
//! cross-entity rules (bounces, goals) live in `systems`.

use glam::Vec2;

/// Axis-aligned box. `pos` is the bottom-left corner; edges derive from
/// `pos` and `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Size components must be non-negative for the life of the box.
    pub fn new(size: Vec2, pos: Vec2) -> Self {
        debug_assert!(
            size.x >= 0.0 && size.y >= 0.0,
            "Rect size must be non-negative"
        );
        Self { pos, size }
    }

    pub fn with_size(size: Vec2) -> Self {
        Self::new(size, Vec2::ZERO)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Ball component - a square box plus a velocity
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    /// One ball per match; scoring repositions it, never recreates it.
    pub fn new(size: f32, pos: Vec2) -> Self {
        Self {
            rect: Rect::new(Vec2::splat(size), pos),
            vel: Vec2::ZERO,
        }
    }

    /// Integrate position: `pos += vel * dt`, componentwise.
    pub fn update_position(&mut self, dt: f32) {
        self.rect.pos += self.vel * dt;
    }
}

/// Paddle component - box, velocity, score, and held-key arbitration state.
///
/// The arbitration tracks at most two simultaneously held directional keys.
/// The most recent press wins the velocity; releasing one of two held keys
/// resumes the other key's direction. This is a deliberate approximation
/// for two opposing keys, not a general pressed-key set.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub rect: Rect,
    pub vel: Vec2,
    pub score: u32,
    active_presses: u8,
    last_key: Option<u32>,
}

impl Paddle {
    pub fn new(player_id: u8, size: Vec2, pos: Vec2) -> Self {
        Self {
            player_id,
            rect: Rect::new(size, pos),
            vel: Vec2::ZERO,
            score: 0,
            active_presses: 0,
            last_key: None,
        }
    }

    /// Number of directional keys currently held (0, 1, or 2).
    pub fn active_presses(&self) -> u8 {
        self.active_presses
    }

    /// Register a key-down carrying the signed vertical speed for that key.
    ///
    /// A repeat of the most recent key (keyboard auto-repeat) does not
    /// increment the held count, but the velocity is always re-applied so
    /// the latest press wins.
    pub fn add_active_press(&mut self, velocity_y: f32, key: u32) {
        if self.active_presses < 2 && self.last_key != Some(key) {
            self.active_presses += 1;
            self.last_key = Some(key);
        }
        self.vel.y = velocity_y;
    }

    /// Register a key-up. At zero held keys the paddle stops; with one key
    /// still held its direction resumes by flipping the current velocity.
    pub fn remove_active_press(&mut self) {
        if self.active_presses == 0 {
            return;
        }
        self.active_presses -= 1;
        if self.active_presses == 0 {
            self.vel.y = 0.0;
        } else {
            self.vel.y = -self.vel.y;
        }
    }

    /// Integrate position with the arena limits as hard stops.
    ///
    /// A frame that starts at or past a limit while still pushing outward is
    /// skipped entirely; the position is left where it was rather than
    /// snapped to the boundary. A large step can therefore come to rest
    /// slightly past the limit.
    pub fn update_position(&mut self, dt: f32, top_limit: f32) {
        if self.vel.y < 0.0 && self.rect.bottom() <= 0.0 {
            return;
        }
        if self.vel.y > 0.0 && self.rect.top() >= top_limit {
            return;
        }
        self.rect.pos.y += self.vel.y * dt;
    }

    pub fn update_score(&mut self) {
        self.score += 1;
    }
}
