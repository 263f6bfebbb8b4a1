use glam::Vec2;
use hecs::World;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::PendingServe;

/// Release a scheduled serve once its real-time deadline has passed.
///
/// The deadline lives on the driver's timestamp stream, so the delay is
/// measured in wall-clock milliseconds regardless of the scaled sim dt.
pub fn serve_tick(
    world: &mut World,
    pending_serve: &mut Option<PendingServe>,
    now_ms: f64,
    config: &Config,
) {
    let Some(serve) = *pending_serve else {
        return;
    };
    if now_ms < serve.deadline_ms {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = Vec2::splat(config.speed * serve.direction);
    }
    *pending_serve = None;

    log::debug!("serve released, direction {}", serve.direction);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    fn ball_vel(world: &World) -> Vec2 {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_, b)| b.vel)
            .unwrap()
    }

    fn parked_world(config: &Config) -> World {
        let mut world = World::new();
        create_ball(&mut world, config);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.vel = Vec2::ZERO;
        }
        world
    }

    #[test]
    fn test_serve_waits_for_deadline() {
        let config = Config::new();
        let mut world = parked_world(&config);
        let mut pending = Some(PendingServe {
            deadline_ms: 1500.0,
            direction: -1.0,
        });

        serve_tick(&mut world, &mut pending, 1499.0, &config);

        assert_eq!(ball_vel(&world), Vec2::ZERO);
        assert!(pending.is_some(), "serve still outstanding");
    }

    #[test]
    fn test_serve_releases_at_deadline() {
        let config = Config::new();
        let mut world = parked_world(&config);
        let mut pending = Some(PendingServe {
            deadline_ms: 1500.0,
            direction: -1.0,
        });

        serve_tick(&mut world, &mut pending, 1500.0, &config);

        assert_eq!(ball_vel(&world), Vec2::splat(-config.speed));
        assert!(pending.is_none(), "serve consumed once released");
    }

    #[test]
    fn test_serve_direction_toward_right_side() {
        let config = Config::new();
        let mut world = parked_world(&config);
        let mut pending = Some(PendingServe {
            deadline_ms: 0.0,
            direction: 1.0,
        });

        serve_tick(&mut world, &mut pending, 10.0, &config);

        assert_eq!(ball_vel(&world), Vec2::splat(config.speed));
    }

    #[test]
    fn test_no_pending_serve_is_noop() {
        let config = Config::new();
        let mut world = parked_world(&config);
        let mut pending = None;

        serve_tick(&mut world, &mut pending, 1_000_000.0, &config);

        assert_eq!(ball_vel(&world), Vec2::ZERO);
    }
}
