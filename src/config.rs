use clap::ValueEnum;
use ratatui::style::Color;

use crate::entity::Sprite;
use crate::error::Error;
use crate::grid::{GridVec, Rect};

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 720;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 480;

/// Default edge length of one grid cell in logical pixels.
pub const DEFAULT_CELL_SIZE: i32 = 10;

/// Default simulation speed in ticks per second.
pub const DEFAULT_TICK_RATE: u32 = 15;

/// Highest supported simulation speed in ticks per second.
pub const MAX_TICK_RATE: u32 = 60;

/// Number of segments a fresh snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 5;

/// Points granted per eaten apple.
pub const APPLE_REWARD: u32 = 10;

/// Starting head cell, in grid cells from the top-left corner.
pub const SNAKE_START_CELL: GridVec = GridVec { x: 10, y: 5 };

/// Apple glyph.
pub const GLYPH_APPLE: &str = "●";

/// Solid fill glyph for color-painted cells.
pub const GLYPH_BLOCK: &str = "█";

/// A color palette applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Solid block color for the head segment.
    pub snake_head: Color,
    /// Solid block color for trailing segments.
    pub snake_body: Color,
    pub apple: Color,
    /// Background color for the playable area.
    pub play_bg: Color,
    pub wall: Color,
    pub hud_score: Color,
    pub game_over: Color,
}

impl Theme {
    /// Returns the apple sprite in this palette.
    #[must_use]
    pub const fn apple_sprite(&self) -> Sprite {
        Sprite {
            glyph: GLYPH_APPLE,
            color: self.apple,
        }
    }
}

/// Classic arcade palette: yellow head, green body, red apple.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::Yellow,
    snake_body: Color::Green,
    apple: Color::Red,
    play_bg: Color::Black,
    wall: Color::DarkGray,
    hud_score: Color::White,
    game_over: Color::Red,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    apple: Color::Yellow,
    play_bg: Color::Black,
    wall: Color::Blue,
    hud_score: Color::Cyan,
    game_over: Color::LightRed,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    apple: Color::LightGreen,
    play_bg: Color::Black,
    wall: Color::Magenta,
    hud_score: Color::Magenta,
    game_over: Color::LightMagenta,
};

/// Theme selection exposed on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum ThemeName {
    Classic,
    Ocean,
    Neon,
}

impl ThemeName {
    /// Returns the palette for this selection.
    #[must_use]
    pub const fn theme(self) -> &'static Theme {
        match self {
            Self::Classic => &THEME_CLASSIC,
            Self::Ocean => &THEME_OCEAN,
            Self::Neon => &THEME_NEON,
        }
    }
}

/// Validated gameplay configuration shared by the state and the renderer.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Window size in logical pixels. Both axes are cell aligned.
    pub window: GridVec,
    /// Edge length of one grid cell in logical pixels.
    pub cell_size: i32,
    /// Simulation speed in ticks per second.
    pub tick_rate: u32,
    pub theme: &'static Theme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: GridVec::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            cell_size: DEFAULT_CELL_SIZE,
            tick_rate: DEFAULT_TICK_RATE,
            theme: &THEME_CLASSIC,
        }
    }
}

impl GameConfig {
    /// Checks that the configuration can host a game.
    ///
    /// The window must be cell aligned and large enough to hold the walls,
    /// the starting snake, and at least one free apple cell.
    pub fn validate(&self) -> Result<(), Error> {
        if self.cell_size <= 0 {
            return Err(Error::InvalidCellSize(self.cell_size));
        }
        if self.tick_rate == 0 || self.tick_rate > MAX_TICK_RATE {
            return Err(Error::InvalidTickRate {
                tick_rate: self.tick_rate,
                max: MAX_TICK_RATE,
            });
        }
        if !self.window.is_cell_aligned(self.cell_size) {
            return Err(Error::MisalignedWindow {
                width: self.window.x,
                height: self.window.y,
                cell_size: self.cell_size,
            });
        }

        let min = self.min_window();
        if self.window.x < min.x || self.window.y < min.y {
            return Err(Error::WindowTooSmall {
                width: self.window.x,
                height: self.window.y,
                min_width: min.x,
                min_height: min.y,
                cell_size: self.cell_size,
            });
        }

        Ok(())
    }

    /// Returns the smallest window that fits the spawn layout inside the walls.
    #[must_use]
    pub fn min_window(&self) -> GridVec {
        GridVec::new(
            (SNAKE_START_CELL.x + 2) * self.cell_size,
            (SNAKE_START_CELL.y + 2) * self.cell_size,
        )
    }

    /// Returns the starting head position in logical pixels.
    #[must_use]
    pub fn snake_start(&self) -> GridVec {
        SNAKE_START_CELL * self.cell_size
    }

    /// Returns the whole window as a rectangle.
    #[must_use]
    pub fn window_rect(&self) -> Rect {
        Rect::new(GridVec::ZERO, self.window)
    }

    /// Returns the apple sampling area: the window deflated by one cell.
    #[must_use]
    pub fn playable_area(&self) -> Rect {
        self.window_rect().deflated(self.cell_size)
    }

    /// Returns the four wall strips lining the window edges.
    ///
    /// The top and left strips are anchored at the origin; the strips
    /// overlap in the corners.
    #[must_use]
    pub fn walls(&self) -> [Rect; 4] {
        let cell = self.cell_size;
        let window = self.window;
        [
            Rect::from_coords(0, 0, window.x, cell),
            Rect::from_coords(0, 0, cell, window.y),
            Rect::from_coords(window.x - cell, 0, cell, window.y),
            Rect::from_coords(0, window.y - cell, window.x, cell),
        ]
    }

    /// Returns the window size measured in grid cells.
    #[must_use]
    pub fn grid_size(&self) -> GridVec {
        GridVec::new(self.window.x / self.cell_size, self.window.y / self.cell_size)
    }
}
