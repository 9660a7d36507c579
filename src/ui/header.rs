use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT_DARK, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Navigation bar listing every screen, active one highlighted.
pub struct NavBar;

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

impl NavBar {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: Screen) -> Paragraph<'static> {
        let mut spans = Vec::new();
        for (idx, screen) in Screen::ALL.iter().enumerate() {
            let label = format!(" {}:{} ", idx + 1, screen.title());
            let style = if *screen == active {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT_DARK)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(" vitrine "),
        )
    }
}
