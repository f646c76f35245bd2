use crate::{BallOutcome, Events, Score, Side};

/// Turn a ball update outcome into score changes and frame events
pub fn record_ball_outcome(outcome: BallOutcome, score: &mut Score, events: &mut Events) {
    match outcome {
        BallOutcome::Scored(side) => {
            score.increment(side);
            match side {
                Side::Left => events.left_scored = true,
                Side::Right => events.right_scored = true,
            }
        }
        BallOutcome::BouncedWall => events.ball_hit_wall = true,
        BallOutcome::Recovered => events.ball_recovered = true,
        BallOutcome::Moved | BallOutcome::Waiting => {}
    }
}
