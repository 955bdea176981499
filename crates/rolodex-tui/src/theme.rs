use ratatui::style::{Color, Modifier, Style};

use crate::model::notice::NoticeKind;

/// Color theme for the TUI.
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub accent: Color,
    pub ok: Color,
    pub error: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Default theme: cool greys with a blue accent.
    pub fn slate() -> Self {
        Self {
            header_fg: Color::Black,
            header_bg: Color::Rgb(110, 160, 220),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::Rgb(120, 130, 145),
            highlight_bg: Color::Rgb(35, 45, 65),
            accent: Color::Rgb(110, 160, 220),
            ok: Color::Rgb(0, 200, 80),
            error: Color::Rgb(255, 80, 80),
            footer_fg: Color::Rgb(120, 130, 145),
            footer_bg: Color::Reset,
        }
    }

    /// Warm alternative: amber accents on dark brown.
    pub fn amber() -> Self {
        Self {
            header_fg: Color::Black,
            header_bg: Color::Rgb(255, 180, 60),
            border: Color::Rgb(110, 80, 40),
            text: Color::Rgb(240, 230, 210),
            dim: Color::Rgb(150, 125, 95),
            highlight_bg: Color::Rgb(60, 45, 20),
            accent: Color::Rgb(255, 180, 60),
            ok: Color::Rgb(170, 210, 80),
            error: Color::Rgb(255, 95, 70),
            footer_fg: Color::Rgb(150, 125, 95),
            footer_bg: Color::Reset,
        }
    }

    /// Look up a theme by config/flag name. Unknown names fall back to slate.
    pub fn by_name(name: &str) -> Self {
        match name {
            "amber" => Self::amber(),
            _ => Self::slate(),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }

    /// Style for a pagination control, dimmed when the control is inactive.
    pub fn control_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.dim)
        }
    }

    pub fn notice_style(&self, kind: &NoticeKind) -> Style {
        match kind {
            NoticeKind::Info => Style::default().fg(self.ok),
            NoticeKind::Error => Style::default().fg(self.error),
        }
    }
}
