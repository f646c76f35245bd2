//! Top-level driver that owns the world and resources

use glam::Vec2;
use hecs::{Entity, World};

use crate::render::{draw_debug_overlay, draw_pause_overlay, draw_scene, Canvas};
use crate::systems::ingest_inputs;
use crate::{
    create_ball, create_paddle, step, Ball, Command, Config, Events, GameRng, InputQueue,
    PauseState, Pointer, Score, Side, Time, Tracking,
};

/// A complete game: two paddles, one ball, score and pause state
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub inputs: InputQueue,
    pub pointer: Pointer,
    pub pause: PauseState,
    pub rng: GameRng,
    pub left_paddle: Entity,
    pub right_paddle: Entity,
    pub ball: Entity,
}

impl Game {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();

        let left_paddle = create_paddle(&mut world, Side::Left, Tracking::Pointer, &config);
        let right_paddle = create_paddle(&mut world, Side::Right, Tracking::Ball, &config);

        let mut ball = Ball::from_config(&config);
        ball.reset(&mut rng);
        let ball = create_ball(&mut world, ball);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            pointer: Pointer::new(config.canvas_size() / 2.0),
            config,
            score: Score::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
            pause: PauseState::new(),
            rng,
            left_paddle,
            right_paddle,
            ball,
        }
    }

    /// Queue a discrete command for the next frame
    pub fn push_command(&mut self, command: Command) {
        self.inputs.push(command);
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer.set(pos);
    }

    pub fn is_paused(&self) -> bool {
        self.pause.paused
    }

    /// Run one rendered frame of `raw_dt` milliseconds.
    ///
    /// Draws the scene as it stands, then advances the simulation unless
    /// paused. Overlays go on top.
    pub fn frame(&mut self, raw_dt: f32, canvas: &mut impl Canvas) {
        self.events.clear();
        self.time.advance(raw_dt, self.config.max_frame_ms);

        ingest_inputs(
            &mut self.inputs,
            &self.config,
            &mut self.pause,
            &mut self.score,
            &mut self.events,
        );

        draw_scene(canvas, &self.world, &self.score, &self.config);

        if self.pause.paused {
            draw_pause_overlay(canvas, &self.config);
        } else {
            step(
                &mut self.world,
                &self.time,
                &self.config,
                &mut self.score,
                &mut self.events,
                &mut self.pointer,
                &mut self.rng,
            );
        }

        draw_debug_overlay(canvas, &self.world, &self.time, &self.config);
    }

    /// Copy of the ball component
    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    /// Copy of a paddle component
    pub fn paddle(&self, side: Side) -> Option<crate::Paddle> {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        self.world
            .get::<&crate::Paddle>(entity)
            .ok()
            .map(|paddle| *paddle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrawList;

    fn running_game() -> Game {
        let mut game = Game::new(Config::new(), GameRng::new(99));
        game.push_command(Command::TogglePause);
        game
    }

    #[test]
    fn test_new_game_is_paused_with_centered_ball() {
        let game = Game::new(Config::new(), GameRng::new(1));
        let ball = game.ball().unwrap();
        assert!(game.is_paused());
        assert_eq!(ball.pos, game.config.ball_spawn());
        assert_eq!(ball.vel.x.abs(), ball.speed);
    }

    #[test]
    fn test_paused_frame_does_not_move_entities() {
        let mut game = Game::new(Config::new(), GameRng::new(1));
        let mut canvas = DrawList::new();
        game.set_pointer(Vec2::new(0.0, 0.0));
        let before = (game.ball(), game.paddle(Side::Left));

        for _ in 0..60 {
            game.frame(16.0, &mut canvas);
        }

        assert_eq!((game.ball(), game.paddle(Side::Left)), before);
        assert!(canvas.texts().contains(&crate::PAUSE_PROMPT));
    }

    #[test]
    fn test_running_frames_move_the_ball() {
        let mut game = running_game();
        let mut canvas = DrawList::new();
        let start = game.ball().unwrap().pos;

        // Past the 450ms launch delay
        for _ in 0..40 {
            game.frame(16.0, &mut canvas);
        }

        assert!(!game.is_paused());
        assert_ne!(game.ball().unwrap().pos, start);
    }

    #[test]
    fn test_pointer_is_latched_only_while_running() {
        let mut game = Game::new(Config::new(), GameRng::new(1));
        let mut canvas = DrawList::new();
        game.set_pointer(Vec2::new(5.0, 5.0));

        game.frame(16.0, &mut canvas);
        assert_ne!(game.pointer.tracked, Vec2::new(5.0, 5.0));

        game.push_command(Command::TogglePause);
        game.frame(16.0, &mut canvas);
        assert_eq!(game.pointer.tracked, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_pause_prompt_hidden_while_running() {
        let mut game = running_game();
        let mut canvas = DrawList::new();

        game.frame(16.0, &mut canvas);

        assert!(!canvas.texts().contains(&crate::PAUSE_PROMPT));
        assert!(game.events.pause_toggled);
    }
}
