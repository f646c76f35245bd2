pub mod components;
pub mod config;
pub mod game;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the simulation by one frame.
///
/// Order matters: the pointer vector is latched, the ball moves (bouncing or
/// scoring), both paddles track their targets and finally the ball is checked
/// against the paddle faces.
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    pointer: &mut Pointer,
    rng: &mut GameRng,
) {
    // 1. Latch the pointer position for this frame
    pointer.latch();

    // 2. Move ball (walls, exits, launch delay)
    move_ball(world, time, config, score, events, rng);

    // 3. Paddles chase their targets
    track_paddles(world, pointer, time, config);

    // 4. Ball vs paddle faces
    resolve_collisions(world, config, events);
}

/// Helper to create a paddle entity from its side's configuration
pub fn create_paddle(
    world: &mut World,
    side: Side,
    tracking: Tracking,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, config.paddle(side)), tracking))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
