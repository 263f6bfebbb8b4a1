//! Two-player Pong match simulation core.
//!
//! Everything with real logic lives in this crate: numeric integration,
//! boundary and paddle collision rules, multi-key input arbitration and the
//! timed serve after each goal. Rendering surfaces, frame timing and score
//! widgets stay outside, behind the collaborator traits in [`render`].
//!
//! Core modules:
//! - `components`: ball, paddles and their per-entity rules
//! - `systems`: the per-frame pipeline (input, movement, collision, scoring, serve)
//! - `engine`: [`MatchEngine`], the state machine the host drives
//! - `config`: tuning constants and host configuration
//!
//! The host constructs one [`MatchEngine`] per match and calls
//! `advance(now_ms, renderer, scores)` once per display refresh.

pub mod components;
pub mod config;
pub mod engine;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::{Ball, Paddle, Rect};
pub use config::{Config, KeyBindings, Params};
pub use engine::MatchEngine;
pub use render::{ColorTag, Renderer, ScoreDisplay};
pub use resources::{Events, FrameClock, InputQueue, KeyEvent, KeyEventKind, PendingServe};

use glam::Vec2;
use hecs::World;

/// Helper to spawn a paddle entity at its configured start position
pub fn create_paddle(world: &mut World, player_id: u8, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(
        player_id,
        config.paddle_size(),
        config.paddle_spawn(player_id),
    ),))
}

/// Helper to spawn the ball entity at the arena midpoint, already moving
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let mut ball = Ball::new(config.ball_size, config.ball_spawn());
    ball.vel = Vec2::splat(config.speed);
    world.spawn((ball,))
}
