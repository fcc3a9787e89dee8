use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use arcade_snake::config::{
    GameConfig, ThemeName, DEFAULT_CELL_SIZE, DEFAULT_TICK_RATE, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH,
};
use arcade_snake::error::Error;
use arcade_snake::game::GameState;
use arcade_snake::grid::GridVec;
use arcade_snake::input::{GameInput, InputHandler};
use arcade_snake::renderer;
use arcade_snake::terminal_runtime::{install_panic_hook, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid-based Snake arcade game for the terminal")]
struct Cli {
    /// Window width in logical pixels (multiple of the cell size).
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: i32,

    /// Window height in logical pixels (multiple of the cell size).
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: i32,

    /// Edge length of one grid cell in logical pixels.
    #[arg(long = "cell-size", default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: i32,

    /// Simulation speed in ticks per second.
    #[arg(long = "speed", default_value_t = DEFAULT_TICK_RATE)]
    speed: u32,

    /// Color theme.
    #[arg(long, value_enum, default_value = "classic")]
    theme: ThemeName,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        GameConfig {
            window: GridVec::new(self.width, self.height),
            cell_size: self.cell_size,
            tick_rate: self.speed,
            theme: self.theme.theme(),
        }
    }
}

fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: GameConfig) -> Result<(), Error> {
    // Validate before touching the terminal so errors reach a normal shell.
    let mut state = GameState::new(config)?;

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let input = InputHandler::new();
    let mut clock = FrameClock::new(config.tick_rate);

    loop {
        for event in input.drain_events()? {
            match event {
                GameInput::Cancel | GameInput::Quit => return Ok(()),
                other => state.apply_input(other),
            }
        }

        state.tick();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state))?;
        clock.wait_for_next_tick();
    }
}

/// Paces the loop at a fixed tick rate, resynchronizing after lag.
struct FrameClock {
    interval: Duration,
    next_tick: Instant,
}

impl FrameClock {
    fn new(tick_rate: u32) -> Self {
        let interval = Duration::from_secs(1) / tick_rate.max(1);
        Self {
            interval,
            next_tick: Instant::now() + interval,
        }
    }

    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        match self.next_tick.checked_duration_since(now) {
            Some(remaining) => {
                thread::sleep(remaining);
                self.next_tick += self.interval;
            }
            None => {
                // Ran long; skip the missed deadlines instead of replaying them.
                self.next_tick = now + self.interval;
            }
        }
    }
}
