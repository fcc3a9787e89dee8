use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::Apple;
use crate::config::{GameConfig, APPLE_REWARD, INITIAL_SNAKE_LENGTH};
use crate::entity::Appearance;
use crate::error::Error;
use crate::grid::Rect;
use crate::input::GameInput;
use crate::snake::SnakeBody;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: SnakeBody,
    pub apple: Apple,
    pub score: u32,
    pub status: GameStatus,
    config: GameConfig,
    walls: [Rect; 4],
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, Error> {
        Self::new_with_seed(config, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, Error> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let walls = config.walls();
        let snake = spawn_snake(&config);
        let apple = Apple::spawn(
            &mut rng,
            config.cell_size,
            Appearance::Sprite(config.theme.apple_sprite()),
            config.playable_area(),
            &walls,
        );

        Ok(Self {
            snake,
            apple,
            score: 0,
            status: GameStatus::Playing,
            config,
            walls,
            rng,
        })
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// Eating resolves before the collision check: a tick may grow the
    /// snake, move the apple, and add points, and still end the game.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.snake.move_forward();

        if self.snake.check_eat(&self.apple) {
            self.snake.grow();
            self.apple
                .relocate(&mut self.rng, self.config.playable_area(), &self.walls);
            self.score += APPLE_REWARD;
        }

        if self.snake.check_collision(&self.walls) {
            self.status = GameStatus::GameOver;
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.change_direction(direction);
                }
            }
            GameInput::Confirm => {
                if self.status == GameStatus::GameOver {
                    self.reset();
                }
            }
            GameInput::Cancel | GameInput::Quit => {}
        }
    }

    /// Starts a new round in place: fresh snake, relocated apple, zero score.
    ///
    /// The walls and the random stream carry over from construction.
    pub fn reset(&mut self) {
        self.snake = spawn_snake(&self.config);
        self.apple
            .relocate(&mut self.rng, self.config.playable_area(), &self.walls);
        self.score = 0;
        self.status = GameStatus::Playing;
    }

    /// Returns the wall rectangles lining the window.
    #[must_use]
    pub fn walls(&self) -> &[Rect; 4] {
        &self.walls
    }

    /// Returns the configuration the state was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

fn spawn_snake(config: &GameConfig) -> SnakeBody {
    SnakeBody::new(
        config.snake_start(),
        config.cell_size,
        INITIAL_SNAKE_LENGTH,
        Appearance::Color(config.theme.snake_head),
        Appearance::Color(config.theme.snake_body),
    )
}
