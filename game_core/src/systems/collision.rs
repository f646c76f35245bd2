use crate::{Ball, Config, Events, Paddle, Rect, Side};
use hecs::World;

/// Strike the ball off the first paddle whose front face it crossed.
///
/// The face is tested against the area the ball swept this frame, so long
/// frames can't carry the ball past it. The left paddle is checked before the right one and at most one strike
/// happens per frame.
pub fn resolve_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle faces without holding a borrow on the world
    let mut faces: Vec<(Side, Rect, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| {
            (
                paddle.side,
                paddle.front_face(config.paddle_face_width),
                paddle.center().y,
            )
        })
        .collect();
    faces.sort_by_key(|(side, _, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let struck = faces
            .iter()
            .find(|(_side, face, _center_y)| ball.swept_rect().overlaps(face));

        if let Some((side, face, center_y)) = struck {
            ball.paddle_strike(side.strike_direction(), *center_y, config.strike_spin);

            // Move the ball clear of the face so it can't strike again next frame
            ball.pos.x = match side {
                Side::Left => face.right(),
                Side::Right => face.pos.x - ball.size.x,
            };
            events.paddle_strike = Some(*side);
        }
    }
}
