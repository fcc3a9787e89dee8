use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;

/// Draws the game-over screen as a centered popup sized to its text.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let score_line = format!("Your Score is: {score}");
    let text = [
        "Game Over!",
        "",
        score_line.as_str(),
        "",
        "Press R or Space to play again",
        "[Q]/[Esc] Quit",
    ];

    let popup = centered_popup(area, &text);
    let lines: Vec<Line<'_>> = text.iter().map(|&line| Line::from(line)).collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.game_over))
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Centers a popup just large enough for `text` and a border, clamped to `area`.
fn centered_popup(area: Rect, text: &[&str]) -> Rect {
    let content_width = text.iter().map(|line| line.width()).max().unwrap_or(0);
    let width = to_u16(content_width + 4).min(area.width);
    let height = to_u16(text.len() + 2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
