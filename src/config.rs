//! Match tuning parameters and host-supplied configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default tuning parameters for a match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Initial paddle distance from the side walls
    pub const INITIAL_OFFSET_X: f32 = 20.0;
    /// Initial paddle distance from the top/bottom walls
    pub const INITIAL_OFFSET_Y: f32 = 40.0;

    // Ball
    pub const BALL_SIZE: f32 = 10.0;

    /// Shared paddle/ball speed, in arena units per scaled time unit
    pub const SPEED: f32 = 3.0;

    // Timing
    /// Divisor applied to raw frame-to-frame milliseconds to produce dt
    pub const TIME_SCALE: f64 = 10.0;
    /// Real-time delay between a goal and the serve that follows
    pub const RESPAWN_DELAY_MS: f64 = 500.0;
}

/// Key codes a single player steers with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: u32,
    pub down: u32,
}

/// Match configuration
///
/// The host fills this from its surface dimensions and input layout; the
/// defaults reproduce the classic 800x400 layout with W/S for the left
/// player and the arrow keys for the right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub initial_offset_x: f32,
    pub initial_offset_y: f32,
    pub ball_size: f32,
    pub speed: f32,
    pub time_scale: f64,
    pub respawn_delay_ms: f64,
    /// Bindings indexed by player id (0 = left, 1 = right)
    pub bindings: [KeyBindings; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            initial_offset_x: Params::INITIAL_OFFSET_X,
            initial_offset_y: Params::INITIAL_OFFSET_Y,
            ball_size: Params::BALL_SIZE,
            speed: Params::SPEED,
            time_scale: Params::TIME_SCALE,
            respawn_delay_ms: Params::RESPAWN_DELAY_MS,
            bindings: [
                KeyBindings { up: 87, down: 83 }, // W / S
                KeyBindings { up: 38, down: 40 }, // ArrowUp / ArrowDown
            ],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paddle size as a vector
    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    /// Initial paddle position for a player: the left paddle sits near the
    /// bottom-left corner, the right paddle mirrored near the top-right.
    pub fn paddle_spawn(&self, player_id: u8) -> Vec2 {
        if player_id == 0 {
            Vec2::new(self.initial_offset_x, self.initial_offset_y)
        } else {
            Vec2::new(
                self.arena_width - self.initial_offset_x - self.paddle_width,
                self.arena_height - self.initial_offset_y - self.paddle_height,
            )
        }
    }

    /// Where the ball is placed at match start and after every goal
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}
