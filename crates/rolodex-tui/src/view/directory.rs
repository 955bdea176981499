use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use rolodex_core::pager;

use crate::app::App;
use crate::theme::Theme;
use crate::view::truncate;

/// Render the directory screen: header, card list, pagination bar, footer.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(3),    // card list
        Constraint::Length(1), // pagination bar
        Constraint::Length(1), // footer / notice
    ])
    .split(area);

    render_header(f, chunks[0], app);
    render_cards(f, chunks[1], app);
    render_pagination(f, chunks[2], app);
    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(" Directory ", theme.header_style()),
        Span::styled(
            format!(" {} places", app.records.len()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if app.rejected > 0 {
        spans.push(Span::styled(
            format!("  ({} entries rejected)", app.rejected),
            Style::default().fg(theme.error),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let name_width = (area.width as usize).saturating_sub(8);

    let items: Vec<ListItem> = pager::page_rows(&app.records, app.page, pager::PAGE_SIZE)
        .map(|(index, record)| {
            let title = Line::from(vec![
                Span::styled(
                    format!(" {:>3} ", index),
                    Style::default().fg(theme.dim),
                ),
                Span::styled(
                    truncate(&record.name, name_width),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]);
            let subtitle = Line::from(vec![
                Span::raw("     "),
                Span::styled(
                    truncate(&record.location, name_width),
                    Style::default().fg(theme.dim),
                ),
            ]);
            ListItem::new(vec![title, subtitle, Line::from("")])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        )
        .highlight_style(theme.highlight_style());

    let mut state = ListState::default().with_selected(Some(app.cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_pagination(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(" \u{25C0} Prev ", theme.control_style(app.has_prev())),
        Span::styled(
            format!(" {} ", app.page_label()),
            Style::default().fg(theme.text),
        ),
        Span::styled(" Next \u{25B6} ", theme.control_style(app.has_next())),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    // An active notice takes the footer row over from the key hints.
    if let Some(notice) = &app.notice {
        let line = Line::from(Span::styled(
            format!(" {}", notice.text),
            theme.notice_style(&notice.kind),
        ));
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    let line = hint_line(
        &[
            ("\u{2191}\u{2193}", "select"),
            ("\u{2190}\u{2192}", "page"),
            ("Enter", "open"),
            ("?", "help"),
            ("q", "quit"),
        ],
        theme,
    );
    f.render_widget(Paragraph::new(line).style(theme.footer_style()), area);
}

fn hint_line<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 2 + 1);
    spans.push(Span::raw(" "));
    for (key, desc) in hints {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(":{desc}  "),
            Style::default().fg(theme.footer_fg),
        ));
    }
    Line::from(spans)
}
