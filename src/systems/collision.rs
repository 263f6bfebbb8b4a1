use hecs::World;

use crate::components::{Ball, Paddle, Rect};
use crate::config::Config;
use crate::resources::Events;

/// Check ball bounces against the paddles and the top/bottom walls.
///
/// The paddle test requires the ball's vertical extent to sit fully inside
/// the paddle's span; a ball clipping the paddle's tip passes through.
/// Stricter than an any-overlap test; kept for gameplay compatibility
/// (see DESIGN.md).
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Snapshot paddle extents first so the ball can be mutated freely.
    let mut paddles: Vec<(u8, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.rect))
        .collect();
    paddles.sort_by_key(|(player_id, _)| *player_id);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit_paddle = paddles.iter().any(|(player_id, rect)| {
            let contained =
                ball.rect.top() <= rect.top() && ball.rect.bottom() >= rect.bottom();
            let crossed_plane = if *player_id == 0 {
                ball.rect.left() <= rect.right()
            } else {
                ball.rect.right() >= rect.left()
            };
            contained && crossed_plane
        });
        if hit_paddle {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
        }

        if ball.rect.bottom() <= 0.0 || ball.rect.top() >= config.arena_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}
