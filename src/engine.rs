//! The match engine: owns all match state and runs the per-frame sequence.

use hecs::World;

use crate::components::{Ball, Paddle, Rect};
use crate::config::Config;
use crate::render::{ColorTag, Renderer, ScoreDisplay};
use crate::resources::{Events, FrameClock, InputQueue, KeyEventKind, PendingServe};
use crate::systems::{check_collisions, check_scoring, ingest_inputs, move_ball, move_paddles, serve_tick};
use crate::{create_ball, create_paddle};

/// One running match: a ball, two paddles and the frame state machine.
///
/// The host constructs one engine per match and owns it for the match's
/// lifetime; there is no global instance. The display driver calls
/// [`advance`](Self::advance) once per refresh with a monotonic timestamp,
/// and the input source routes key transitions through
/// [`handle_key_event`](Self::handle_key_event).
pub struct MatchEngine {
    world: World,
    config: Config,
    clock: FrameClock,
    events: Events,
    input_queue: InputQueue,
    pending_serve: Option<PendingServe>,
}

impl MatchEngine {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, 0, &config);
        create_paddle(&mut world, 1, &config);
        create_ball(&mut world, &config);

        Self {
            world,
            config,
            clock: FrameClock::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            pending_serve: None,
        }
    }

    /// Advance one frame.
    ///
    /// The very first call only records the timestamp - simulating against
    /// an unknown previous frame would produce an arbitrarily large step.
    /// Every later call scales the elapsed milliseconds down by the
    /// configured time divisor, runs input ingestion, serve release,
    /// integration, collisions and scoring in that order, then emits the
    /// frame's draw list.
    pub fn advance<R: Renderer, S: ScoreDisplay>(
        &mut self,
        now_ms: f64,
        renderer: &mut R,
        scores: &mut S,
    ) {
        let Some(last_ms) = self.clock.last_frame_ms else {
            self.clock.last_frame_ms = Some(now_ms);
            return;
        };
        let dt = ((now_ms - last_ms) / self.config.time_scale) as f32;
        self.clock.last_frame_ms = Some(now_ms);

        self.events.clear();
        ingest_inputs(&mut self.world, &mut self.input_queue, &self.config);
        serve_tick(&mut self.world, &mut self.pending_serve, now_ms, &self.config);
        move_paddles(&mut self.world, dt, self.config.arena_height);
        move_ball(&mut self.world, dt);
        check_collisions(&mut self.world, &self.config, &mut self.events);
        if let Some((player, score)) = check_scoring(
            &mut self.world,
            &self.config,
            &mut self.events,
            &mut self.pending_serve,
            now_ms,
        ) {
            scores.set_score(player, score);
        }

        self.draw(renderer);
    }

    /// Entry point for the input collaborator. Events are queued and
    /// applied at the start of the next frame, so a burst of transitions
    /// between frames is arbitrated in arrival order.
    pub fn handle_key_event(&mut self, kind: KeyEventKind, code: u32) {
        self.input_queue.push(kind, code);
    }

    fn draw<R: Renderer>(&self, renderer: &mut R) {
        renderer.clear(self.config.arena_width, self.config.arena_height);

        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            renderer.draw_rect(ball.rect.pos, ball.rect.size, ColorTag::Ball);
        }

        // Stable draw order: left paddle first.
        let mut paddles: Vec<(u8, Rect)> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, p)| (p.player_id, p.rect))
            .collect();
        paddles.sort_by_key(|(player_id, _)| *player_id);
        for (_player_id, rect) in paddles {
            renderer.draw_rect(rect.pos, rect.size, ColorTag::Paddle);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the ball, for hosts that interpolate between frames
    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("match world always holds a ball")
    }

    /// Snapshot of a player's paddle
    pub fn paddle(&self, player_id: u8) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, p)| *p)
            .find(|p| p.player_id == player_id)
            .expect("match world always holds both paddles")
    }

    /// A player's current score
    pub fn score(&self, player_id: u8) -> u32 {
        self.paddle(player_id).score
    }

    /// Events raised during the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// True while a goal has been conceded and the serve delay is running
    pub fn serve_pending(&self) -> bool {
        self.pending_serve.is_some()
    }
}
