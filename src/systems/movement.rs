use hecs::World;

use crate::components::{Ball, Paddle};

/// Integrate paddle positions, blocking motion past the arena limits
pub fn move_paddles(world: &mut World, dt: f32, arena_height: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.update_position(dt, arena_height);
    }
}

/// Integrate the ball position from its velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update_position(dt);
    }
}
