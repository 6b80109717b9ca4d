pub mod components;
pub mod config;
pub mod game;
pub mod keys;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use keys::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// The order is fixed: every step observes the side effects of the ones
/// before it within the same tick.
pub fn step<K: KeyState + ?Sized>(
    world: &mut World,
    config: &Config,
    keys: &K,
    score: &mut Score,
    rally: &mut Rally,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Player paddle reads the keyboard
    move_player_paddle(world, keys, config);

    // 2. Computer paddle tracks the ball
    track_ball(world, config);

    // 3. Move ball
    move_ball(world);

    // 4. Side walls score, otherwise top/bottom walls bounce
    if !check_scoring(world, config, score, rally, events) {
        bounce_off_walls(world, config, events);
    }

    // 5. Player paddle, then computer paddle
    collide_with_player_paddle(world, events);
    collide_with_computer_paddle(world, config, rally, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
