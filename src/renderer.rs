use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::GLYPH_BLOCK;
use crate::entity::{Appearance, Entity, Sprite};
use crate::game::{GameState, GameStatus};
use crate::grid;
use crate::grid::GridVec;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
///
/// One logical cell maps to one terminal cell; anything outside the visible
/// board is clipped per cell.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();
    let board = render_hud(frame, area, state);

    let config = state.config();
    let theme = config.theme;
    let cell_size = config.cell_size;

    let window = board_window_area(board, config.grid_size());
    frame.render_widget(Block::new().style(Style::new().bg(theme.play_bg)), window);

    for wall in state.walls() {
        fill_rect(frame, board, cell_size, *wall, theme.wall);
    }

    for segment in state.snake.segments() {
        render_entity(frame, board, cell_size, segment);
    }
    render_entity(frame, board, cell_size, &state.apple.entity());

    if state.status == GameStatus::GameOver {
        render_game_over_menu(frame, board, state.score, theme);
    }
}

fn render_entity(frame: &mut Frame<'_>, board: Rect, cell_size: i32, entity: &Entity) {
    match entity.appearance() {
        Appearance::Color(color) => fill_rect(frame, board, cell_size, entity.bounds(), color),
        Appearance::Sprite(sprite) => {
            blit_sprite(frame, board, cell_size, entity.bounds(), sprite);
        }
    }
}

fn fill_rect(frame: &mut Frame<'_>, board: Rect, cell_size: i32, rect: grid::Rect, color: Color) {
    paint_rect(frame, board, cell_size, rect, GLYPH_BLOCK, color);
}

fn blit_sprite(frame: &mut Frame<'_>, board: Rect, cell_size: i32, rect: grid::Rect, sprite: Sprite) {
    paint_rect(frame, board, cell_size, rect, sprite.glyph, sprite.color);
}

/// Paints every cell covered by a logical rectangle with one glyph.
fn paint_rect(
    frame: &mut Frame<'_>,
    board: Rect,
    cell_size: i32,
    rect: grid::Rect,
    glyph: &str,
    color: Color,
) {
    let style = Style::new().fg(color);
    let buffer = frame.buffer_mut();

    let mut y = rect.top();
    while y < rect.bottom() {
        let mut x = rect.left();
        while x < rect.right() {
            if let Some((col, row)) = cell_to_terminal(board, cell_size, GridVec::new(x, y)) {
                buffer.set_string(col, row, glyph, style);
            }
            x += cell_size;
        }
        y += cell_size;
    }
}

fn cell_to_terminal(board: Rect, cell_size: i32, position: GridVec) -> Option<(u16, u16)> {
    if position.x < 0 || position.y < 0 {
        return None;
    }

    let col = u16::try_from(position.x / cell_size).ok()?;
    let row = u16::try_from(position.y / cell_size).ok()?;

    let x = board.x.saturating_add(col);
    let y = board.y.saturating_add(row);
    if x >= board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}

fn board_window_area(board: Rect, grid_size: GridVec) -> Rect {
    let width = u16::try_from(grid_size.x).unwrap_or(u16::MAX).min(board.width);
    let height = u16::try_from(grid_size.y)
        .unwrap_or(u16::MAX)
        .min(board.height);

    Rect {
        x: board.x,
        y: board.y,
        width,
        height,
    }
}
