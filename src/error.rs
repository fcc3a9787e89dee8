use std::io;

use thiserror::Error;

/// Fatal startup and environment failures.
///
/// Gameplay outcomes (collisions, rejected turns) are state transitions,
/// not errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(i32),

    #[error("tick rate must be between 1 and {max} ticks per second, got {tick_rate}")]
    InvalidTickRate { tick_rate: u32, max: u32 },

    #[error("window {width}x{height} is not aligned to the {cell_size} px cell grid")]
    MisalignedWindow {
        width: i32,
        height: i32,
        cell_size: i32,
    },

    #[error(
        "window {width}x{height} is too small, need at least {min_width}x{min_height} at cell size {cell_size}"
    )]
    WindowTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
        cell_size: i32,
    },
}
