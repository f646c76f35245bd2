use glam::Vec2;

use crate::{clamp, colliding, Config, GameRng, PaddleConfig, Rect};

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Index into the score pair (0 = left, 1 = right)
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction a ball leaves in after striking this side's paddle
    pub fn strike_direction(self) -> i8 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }
}

/// What a paddle follows on the y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracking {
    Pointer,
    Ball,
}

/// Paddle component - a rectangle that follows a target on the y axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub threshold: f32, // dead zone around the target
    pub vel: Vec2,      // x stays 0
}

impl Paddle {
    pub fn new(side: Side, config: &PaddleConfig) -> Self {
        Self {
            side,
            pos: config.pos,
            size: config.size,
            speed: config.speed,
            threshold: config.threshold,
            vel: Vec2::ZERO,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Thin strip along the edge facing the court
    pub fn front_face(&self, face_width: f32) -> Rect {
        let width = face_width.min(self.size.x);
        let x = match self.side {
            Side::Left => self.pos.x + self.size.x - width,
            Side::Right => self.pos.x,
        };
        Rect::new(Vec2::new(x, self.pos.y), Vec2::new(width, self.size.y))
    }

    /// Move toward `target_y`, stopping inside the dead zone, and keep the
    /// paddle on the canvas.
    pub fn update(&mut self, target_y: f32, dt: f32, config: &Config) {
        let center_y = self.center().y;

        self.vel.y = if (target_y - center_y).abs() <= self.threshold {
            0.0
        } else if target_y > center_y {
            self.speed
        } else {
            -self.speed
        };

        self.pos.y = clamp(
            self.pos.y + self.vel.y * dt * config.motion_scale,
            0.0,
            config.canvas_height - self.size.y,
        );
    }
}

/// Result of a single ball update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    Moved,
    /// Launch delay still running, the ball did not move
    Waiting,
    BouncedWall,
    /// Ball left the court, the given side earns the point
    Scored(Side),
    /// Ball was found off the canvas without exiting a side; reset silently
    Recovered,
}

/// Ball component - the square ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub init: Vec2, // reset position
    pub pos: Vec2,
    pub prev_pos: Vec2, // position at the start of the last update
    pub size: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    pub min_y_speed: f32,
    pub delay: f32,         // ms before launch after a reset
    pub delay_counter: f32, // ms since the last reset
}

impl Ball {
    /// Ball resting at `init`; call `reset` to give it a launch velocity
    pub fn new(init: Vec2, size: Vec2, speed: f32, delay: f32) -> Self {
        Self {
            init,
            pos: init,
            prev_pos: init,
            size,
            vel: Vec2::ZERO,
            speed,
            min_y_speed: crate::Params::BALL_MIN_Y_SPEED,
            delay,
            delay_counter: 0.0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut ball = Self::new(
            config.ball_spawn(),
            config.ball_size,
            config.ball_speed,
            config.ball_launch_delay,
        );
        ball.min_y_speed = config.ball_min_y_speed;
        ball
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Area covered while moving from `prev_pos` to `pos` this frame
    pub fn swept_rect(&self) -> Rect {
        let min = self.prev_pos.min(self.pos);
        let max = self.prev_pos.max(self.pos) + self.size;
        Rect::new(min, max - min)
    }

    /// Re-center the ball and pick a new random launch velocity
    pub fn reset(&mut self, rng: &mut GameRng) {
        use rand::Rng;

        self.delay_counter = 0.0;
        self.pos = self.init;
        self.prev_pos = self.init;

        let vx = if rng.0.gen_bool(0.5) {
            self.speed
        } else {
            -self.speed
        };
        let y_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let y_speed = if self.speed > self.min_y_speed {
            rng.0.gen_range(self.min_y_speed..self.speed)
        } else {
            self.min_y_speed
        };

        self.vel = Vec2::new(vx, y_sign * y_speed);
    }

    /// Advance one frame of `dt` milliseconds.
    ///
    /// Walls reflect the y velocity. Leaving through a side resets the ball and
    /// reports the scoring side; the ball then stays at its reset position for
    /// the rest of the frame.
    pub fn update(&mut self, dt: f32, config: &Config, rng: &mut GameRng) -> BallOutcome {
        let center = self.center();
        let canvas = config.canvas_size();
        self.prev_pos = self.pos;
        self.delay_counter += dt;

        let mut outcome = BallOutcome::Moved;
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
            outcome = BallOutcome::BouncedWall;
        } else if self.pos.y + self.size.y > canvas.y {
            self.pos.y = canvas.y - self.size.y;
            self.vel.y = -self.vel.y;
            outcome = BallOutcome::BouncedWall;
        } else if self.pos.x + self.size.x <= 0.0 || self.pos.x >= canvas.x {
            let scorer = if center.x <= 0.0 {
                Some(Side::Right)
            } else if center.x >= canvas.x {
                Some(Side::Left)
            } else {
                None
            };
            self.reset(rng);
            return scorer.map_or(BallOutcome::Recovered, BallOutcome::Scored);
        } else if !colliding(self.pos, self.size, Vec2::ZERO, canvas) {
            // Only reachable with degenerate state (e.g. NaN position)
            self.reset(rng);
            return BallOutcome::Recovered;
        }

        if self.delay_counter >= self.delay {
            self.pos += self.vel * dt * config.motion_scale;
        } else if outcome == BallOutcome::Moved {
            outcome = BallOutcome::Waiting;
        }
        outcome
    }

    /// Send the ball back after hitting a paddle.
    ///
    /// `direction` is +1 (rightward) or -1 (leftward). The further from the
    /// paddle's center the ball hit, the more spin is added to its y velocity.
    pub fn paddle_strike(&mut self, direction: i8, paddle_center_y: f32, spin: f32) {
        self.vel.x = f32::from(direction) * self.speed;
        let offset = self.center().y - paddle_center_y;
        self.vel.y += clamp(offset * spin, -self.speed, self.speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_ball(config: &Config) -> Ball {
        let mut ball = Ball::from_config(config);
        ball.delay = 0.0;
        ball
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.index(), 0);
        assert_eq!(Side::Right.index(), 1);
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.strike_direction(), -1);
    }

    #[test]
    fn test_paddle_stops_inside_dead_zone() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, &config.left_paddle);
        paddle.vel.y = paddle.speed;
        let target = paddle.center().y + paddle.threshold;

        paddle.update(target, 16.0, &config);

        assert_eq!(paddle.vel.y, 0.0, "Paddle should rest inside the dead zone");
        assert_eq!(paddle.pos, config.left_paddle.pos, "Paddle should not move");
    }

    #[test]
    fn test_paddle_moves_toward_target() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Left, &config.left_paddle);
        let start = paddle.pos.y;

        paddle.update(config.canvas_height, 10.0, &config);
        assert_eq!(paddle.vel.y, paddle.speed);
        assert!((paddle.pos.y - (start + paddle.speed * 10.0 * config.motion_scale)).abs() < 1e-4);

        paddle.update(0.0, 10.0, &config);
        assert_eq!(paddle.vel.y, -paddle.speed, "Paddle should move up");
    }

    #[test]
    fn test_paddle_clamped_to_canvas() {
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Right, &config.right_paddle);

        for _ in 0..200 {
            paddle.update(config.canvas_height * 2.0, 16.0, &config);
            assert!(paddle.pos.y >= 0.0);
            assert!(paddle.pos.y <= config.canvas_height - paddle.size.y);
        }
        assert_eq!(paddle.pos.y, config.canvas_height - paddle.size.y);

        for _ in 0..200 {
            paddle.update(-500.0, 16.0, &config);
        }
        assert_eq!(paddle.pos.y, 0.0);
    }

    #[test]
    fn test_paddle_front_faces() {
        let config = Config::new();
        let left = Paddle::new(Side::Left, &config.left_paddle);
        let right = Paddle::new(Side::Right, &config.right_paddle);

        let left_face = left.front_face(1.0);
        assert_eq!(left_face.pos.x, 89.0, "Left face sits on the right edge");
        assert_eq!(left_face.size, Vec2::new(1.0, 150.0));

        let right_face = right.front_face(1.0);
        assert_eq!(right_face.pos.x, 1530.0, "Right face sits on the left edge");
    }

    #[test]
    fn test_ball_reset_recenters() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::from_config(&config);
        ball.pos = Vec2::new(3.0, 4.0);
        ball.delay_counter = 999.0;

        ball.reset(&mut rng);

        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(ball.delay_counter, 0.0);
        assert_eq!(ball.vel.x.abs(), ball.speed);
        assert!(ball.vel.y.abs() >= ball.min_y_speed && ball.vel.y.abs() < ball.speed);
    }

    #[test]
    fn test_ball_waits_for_launch_delay() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut ball = Ball::from_config(&config);
        ball.vel = Vec2::new(ball.speed, 0.0);

        let outcome = ball.update(100.0, &config, &mut rng);
        assert_eq!(outcome, BallOutcome::Waiting);
        assert_eq!(ball.pos, config.ball_spawn());

        for _ in 0..3 {
            ball.update(100.0, &config, &mut rng);
        }
        let outcome = ball.update(100.0, &config, &mut rng);
        assert_eq!(outcome, BallOutcome::Moved, "Delay of 450ms should have passed");
        assert!(ball.pos.x > config.ball_spawn().x);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut ball = ready_ball(&config);
        ball.pos.y = -2.0;
        ball.vel = Vec2::new(4.1, -3.0);

        let outcome = ball.update(16.0, &config, &mut rng);

        assert_eq!(outcome, BallOutcome::BouncedWall);
        assert_eq!(ball.vel.y, 3.0, "Y velocity should flip once");
        assert!(ball.pos.y >= 0.0);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut ball = ready_ball(&config);
        ball.pos.y = config.canvas_height - ball.size.y + 2.0;
        ball.vel = Vec2::new(-4.1, 3.0);

        let outcome = ball.update(16.0, &config, &mut rng);

        assert_eq!(outcome, BallOutcome::BouncedWall);
        assert_eq!(ball.vel.y, -3.0);
        assert!(ball.pos.y + ball.size.y <= config.canvas_height);
    }

    #[test]
    fn test_ball_exit_left_scores_for_right() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut ball = ready_ball(&config);
        ball.pos.x = -ball.size.x - 1.0;

        let outcome = ball.update(16.0, &config, &mut rng);

        assert_eq!(outcome, BallOutcome::Scored(Side::Right));
        assert_eq!(ball.pos, ball.init, "Ball should stay at reset position this frame");
    }

    #[test]
    fn test_ball_exit_right_scores_for_left() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut ball = ready_ball(&config);
        ball.pos.x = config.canvas_width;

        let outcome = ball.update(16.0, &config, &mut rng);

        assert_eq!(outcome, BallOutcome::Scored(Side::Left));
        assert_eq!(ball.pos, ball.init);
    }

    #[test]
    fn test_degenerate_ball_recovers_without_score() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut ball = ready_ball(&config);
        ball.pos = Vec2::new(f32::NAN, f32::NAN);

        let outcome = ball.update(16.0, &config, &mut rng);

        assert_eq!(outcome, BallOutcome::Recovered);
        assert_eq!(ball.pos, ball.init);
    }

    #[test]
    fn test_swept_rect_covers_whole_move() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut ball = ready_ball(&config);
        ball.vel = Vec2::new(ball.speed, 0.0);
        let start = ball.pos;

        ball.update(100.0, &config, &mut rng);

        let swept = ball.swept_rect();
        assert_eq!(swept.pos, start);
        assert!((swept.right() - ball.rect().right()).abs() < 1e-4);
        assert!(swept.size.x > ball.size.x + 80.0, "100ms covers an 82px move");
    }

    #[test]
    fn test_reset_collapses_sweep() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut ball = ready_ball(&config);
        ball.pos.x = config.canvas_width + 1.0;

        ball.update(16.0, &config, &mut rng);

        assert_eq!(ball.swept_rect(), ball.rect(), "No sweep across the court on reset");
    }

    #[test]
    fn test_paddle_strike_sets_direction_and_spin() {
        let config = Config::new();
        let mut ball = ready_ball(&config);
        ball.vel = Vec2::new(-4.1, 0.0);

        // Ball center 50px below paddle center
        let paddle_center_y = ball.center().y - 50.0;
        ball.paddle_strike(1, paddle_center_y, config.strike_spin);

        assert_eq!(ball.vel.x, ball.speed);
        assert!((ball.vel.y - 50.0 * config.strike_spin).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_strike_spin_is_bounded() {
        let config = Config::new();
        let mut ball = ready_ball(&config);
        ball.vel = Vec2::new(4.1, 1.0);

        ball.paddle_strike(-1, ball.center().y + 10_000.0, config.strike_spin);

        assert_eq!(ball.vel.x, -ball.speed);
        assert_eq!(ball.vel.y, 1.0 - ball.speed, "Nudge clamps to the ball speed");
    }
}
