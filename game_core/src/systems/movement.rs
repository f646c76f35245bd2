use crate::{Ball, Config, Events, GameRng, Paddle, Pointer, Score, Time, Tracking};
use hecs::World;

use super::record_ball_outcome;

/// Advance the ball, bouncing off walls and scoring exits
pub fn move_ball(
    world: &mut World,
    time: &Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let outcome = ball.update(time.dt, config, rng);
        record_ball_outcome(outcome, score, events);
    }
}

/// Move each paddle toward whatever it tracks
pub fn track_paddles(world: &mut World, pointer: &Pointer, time: &Time, config: &Config) {
    let ball_center = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.center());

    for (_entity, (paddle, tracking)) in world.query_mut::<(&mut Paddle, &Tracking)>() {
        let target_y = match tracking {
            Tracking::Pointer => pointer.tracked.y,
            // Without a ball, hold position
            Tracking::Ball => ball_center.map_or(paddle.center().y, |center| center.y),
        };
        paddle.update(target_y, time.dt, config);
    }
}
