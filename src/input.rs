use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grid::GridVec;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the displacement of one movement step at `cell_size`.
    #[must_use]
    pub fn step(self, cell_size: i32) -> GridVec {
        match self {
            Self::Up => GridVec::new(0, -cell_size),
            Self::Down => GridVec::new(0, cell_size),
            Self::Left => GridVec::new(-cell_size, 0),
            Self::Right => GridVec::new(cell_size, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    Cancel,
    Quit,
}

/// Decodes pending terminal events without blocking.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drains every queued terminal event into game inputs, in arrival order.
    ///
    /// Returns an empty vector when no input is pending. Key release and
    /// repeat events are skipped so each press registers exactly once.
    pub fn drain_events(&self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(input) = map_key_event(key) {
                    inputs.push(input);
                }
            }
        }

        Ok(inputs)
    }
}

fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ' | 'r' | 'R') => Some(GameInput::Confirm),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Cancel),
        _ => None,
    }
}
