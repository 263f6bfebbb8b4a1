use hecs::World;

use crate::components::Paddle;
use crate::config::Config;
use crate::resources::{InputQueue, KeyEventKind};

/// Drain queued key events into paddle press arbitration.
///
/// Each player owns two bound codes; a down on `up` registers a press with
/// negative vertical speed, a down on `down` a positive one, and an up on
/// either releases one press. Unbound codes are dropped.
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue, config: &Config) {
    for event in queue.events.drain(..) {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            let binds = config.bindings[paddle.player_id as usize];
            match event.kind {
                KeyEventKind::Down => {
                    if event.code == binds.up {
                        paddle.add_active_press(-config.speed, event.code);
                    } else if event.code == binds.down {
                        paddle.add_active_press(config.speed, event.code);
                    }
                }
                KeyEventKind::Up => {
                    if event.code == binds.up || event.code == binds.down {
                        paddle.remove_active_press();
                    }
                }
            }
        }
    }
}
