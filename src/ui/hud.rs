use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::GameState;

/// Renders the score line and returns the board area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [score_area, board] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let theme = state.config().theme;
    frame.render_widget(
        Paragraph::new(Line::from(format!("Score : {}", state.score)))
            .style(Style::new().fg(theme.hud_score)),
        score_area,
    );

    board
}
