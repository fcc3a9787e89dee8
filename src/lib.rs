//! Classic grid-based Snake: a deterministic simulation core under a thin
//! terminal presentation layer.
//!
//! The simulation ([`game`], [`snake`], [`apple`]) works in logical pixels on
//! a cell grid and never touches the terminal; rendering and input live in
//! [`renderer`], [`ui`], and [`input`].

pub mod apple;
pub mod config;
pub mod entity;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
