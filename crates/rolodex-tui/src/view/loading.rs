use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;
use crate::view::spinner_char;

/// Render the loading screen: a centered spinner while the dataset is
/// being assigned.
pub fn render(f: &mut Frame, theme: &Theme, tick: usize) {
    let area = f.area();
    let popup = centered_rect(30, 1, area);

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_char(tick)),
            Style::default().fg(theme.accent),
        ),
        Span::styled("Loading directory...", Style::default().fg(theme.text)),
    ]);
    f.render_widget(Paragraph::new(line).centered(), popup);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
