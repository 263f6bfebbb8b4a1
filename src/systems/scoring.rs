use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::{Events, PendingServe};

/// Check whether the ball crossed a goal plane; on a goal, award the point,
/// park the ball at the arena midpoint and schedule the serve.
///
/// Returns the scoring player and their new total so the engine can notify
/// the score display.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    pending_serve: &mut Option<PendingServe>,
    now_ms: f64,
) -> Option<(u8, u32)> {
    let winner = {
        let mut query = world.query_mut::<&mut Ball>().into_iter();
        let (_entity, ball) = query.next()?;

        let exited_left = ball.rect.left() <= 0.0;
        let exited_right = ball.rect.right() >= config.arena_width;
        let winner = match (exited_left, exited_right) {
            (false, false) => return None,
            (true, false) => 1u8,
            (false, true) => 0u8,
            // Both planes in one frame is physically out of reach for any
            // sane arena width; the travel direction breaks the tie.
            (true, true) => {
                if ball.vel.x < 0.0 {
                    1
                } else {
                    0
                }
            }
        };

        ball.vel = Vec2::ZERO;
        ball.rect.pos = config.ball_spawn();
        winner
    };

    let mut new_score = 0;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player_id == winner {
            paddle.update_score();
            new_score = paddle.score;
        }
    }

    if winner == 0 {
        events.left_scored = true;
    } else {
        events.right_scored = true;
    }

    // Serve back toward the side that just conceded. Overwriting a pending
    // serve is the cancellation path for back-to-back goals.
    let direction = if winner == 0 { 1.0 } else { -1.0 };
    *pending_serve = Some(PendingServe {
        deadline_ms: now_ms + config.respawn_delay_ms,
        direction,
    });

    log::debug!(
        "player {} scored, total {}; serving in {}ms",
        winner,
        new_score,
        config.respawn_delay_ms
    );

    Some((winner, new_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Config, Events, Option<PendingServe>) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, 0, &config);
        create_paddle(&mut world, 1, &config);
        create_ball(&mut world, &config);
        (world, config, Events::new(), None)
    }

    fn place_ball(world: &mut World, pos: Vec2, vel: Vec2) {
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.rect.pos = pos;
            ball.vel = vel;
        }
    }

    fn score_of(world: &World, player_id: u8) -> u32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_, p)| p.player_id == player_id)
            .map(|(_, p)| p.score)
            .unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut events, mut pending) = setup();
        place_ball(&mut world, Vec2::new(-0.5, 200.0), Vec2::new(-3.0, 0.0));

        let result = check_scoring(&mut world, &config, &mut events, &mut pending, 1000.0);

        assert_eq!(result, Some((1, 1)));
        assert_eq!(score_of(&world, 1), 1);
        assert_eq!(score_of(&world, 0), 0);
        assert!(events.right_scored);
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_at_exact_right_edge() {
        let (mut world, config, mut events, mut pending) = setup();
        // ball.right() == arena_width exactly
        place_ball(
            &mut world,
            Vec2::new(config.arena_width - config.ball_size, 200.0),
            Vec2::new(3.0, 0.0),
        );

        let result = check_scoring(&mut world, &config, &mut events, &mut pending, 1000.0);

        assert_eq!(result, Some((0, 1)));
        assert!(events.left_scored);
    }

    #[test]
    fn test_goal_parks_ball_at_midpoint_with_zero_velocity() {
        let (mut world, config, mut events, mut pending) = setup();
        place_ball(&mut world, Vec2::new(-0.5, 200.0), Vec2::new(-3.0, -3.0));

        check_scoring(&mut world, &config, &mut events, &mut pending, 1000.0);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.rect.pos, config.ball_spawn());
            assert_eq!(ball.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn test_goal_schedules_serve_toward_loser() {
        let (mut world, config, mut events, mut pending) = setup();
        place_ball(&mut world, Vec2::new(-0.5, 200.0), Vec2::new(-3.0, 0.0));

        check_scoring(&mut world, &config, &mut events, &mut pending, 1000.0);

        let serve = pending.expect("a serve must be scheduled after a goal");
        assert_eq!(serve.deadline_ms, 1000.0 + config.respawn_delay_ms);
        assert_eq!(
            serve.direction, -1.0,
            "right player scored, so the serve heads back left"
        );
    }

    #[test]
    fn test_new_goal_replaces_outstanding_serve() {
        let (mut world, config, mut events, mut pending) = setup();
        pending = Some(PendingServe {
            deadline_ms: 900.0,
            direction: -1.0,
        });
        place_ball(
            &mut world,
            Vec2::new(config.arena_width, 200.0),
            Vec2::new(3.0, 0.0),
        );

        check_scoring(&mut world, &config, &mut events, &mut pending, 1000.0);

        let serve = pending.unwrap();
        assert_eq!(serve.deadline_ms, 1000.0 + config.respawn_delay_ms);
        assert_eq!(serve.direction, 1.0);
    }

    #[test]
    fn test_dual_exit_resolved_by_travel_direction() {
        let (mut world, mut config, mut events, mut pending) = setup();
        // Shrink the arena until one frame can touch both planes.
        config.arena_width = 8.0;
        place_ball(&mut world, Vec2::new(-1.0, 200.0), Vec2::new(-3.0, 0.0));

        let result = check_scoring(&mut world, &config, &mut events, &mut pending, 0.0);

        assert_eq!(
            result.map(|(p, _)| p),
            Some(1),
            "leftward travel means the ball exited left"
        );
    }

    #[test]
    fn test_no_goal_when_ball_in_bounds() {
        let (mut world, config, mut events, mut pending) = setup();

        let result = check_scoring(&mut world, &config, &mut events, &mut pending, 0.0);

        assert_eq!(result, None);
        assert!(pending.is_none());
        assert_eq!(score_of(&world, 0), 0);
        assert_eq!(score_of(&world, 1), 0);
    }

    #[test]
    fn test_scores_accumulate_over_goals() {
        let (mut world, config, mut events, mut pending) = setup();

        place_ball(&mut world, Vec2::new(-0.5, 200.0), Vec2::new(-3.0, 0.0));
        check_scoring(&mut world, &config, &mut events, &mut pending, 0.0);

        place_ball(&mut world, Vec2::new(-0.5, 200.0), Vec2::new(-3.0, 0.0));
        let result = check_scoring(&mut world, &config, &mut events, &mut pending, 600.0);

        assert_eq!(result, Some((1, 2)));
    }
}
