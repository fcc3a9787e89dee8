use ratatui::style::Color;

use arcade_snake::apple::Apple;
use arcade_snake::config::GameConfig;
use arcade_snake::entity::Appearance;
use arcade_snake::game::{GameState, GameStatus};
use arcade_snake::grid::GridVec;
use arcade_snake::input::{Direction, GameInput};

#[test]
fn stepwise_eat_turn_die_and_restart() {
    let mut state = GameState::new_with_seed(GameConfig::default(), 42)
        .expect("default config must validate");
    state.apple = Apple::new(GridVec::new(110, 50), 10, Appearance::Color(Color::Red));

    // First tick: the head steps onto the apple.
    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 6);
    assert_eq!(state.snake.head_position(), GridVec::new(110, 50));

    // Steer up and ride toward the top wall at y = 0.
    state.apply_input(GameInput::Direction(Direction::Up));
    for expected_y in [40, 30, 20, 10] {
        state.tick();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.head_position(), GridVec::new(110, expected_y));
    }

    // The next step enters the wall strip.
    state.tick();
    assert_eq!(state.snake.head_position(), GridVec::new(110, 0));
    assert_eq!(state.status, GameStatus::GameOver);

    // Dead snakes ignore ticks and steering.
    state.tick();
    state.apply_input(GameInput::Direction(Direction::Left));
    assert_eq!(state.snake.head_position(), GridVec::new(110, 0));
    assert_eq!(state.snake.direction(), Direction::Up.step(10));

    // Confirm restarts in place with the spawn layout.
    state.apply_input(GameInput::Confirm);
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 5);
    assert_eq!(state.snake.head_position(), GridVec::new(100, 50));
    assert_eq!(state.snake.direction(), Direction::Right.step(10));

    let apple_bounds = state.apple.bounds();
    assert!(state
        .walls()
        .iter()
        .all(|wall| !apple_bounds.intersects(*wall)));
}
