use crate::ui::app::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, screen: Screen, area: Rect) -> Paragraph<'static> {
        let hints = match screen {
            Screen::Home => " 1-6: Screens │ Tab: Next screen │ Ctrl+Q: Quit",
            Screen::Catalog => " ↑/↓: Select │ Enter: Add to cart │ r: Retry │ Ctrl+Q: Quit",
            Screen::NewProduct => " Type to edit │ ↑/↓: Field │ Enter: Submit │ Esc: Home",
            Screen::Removals => " Enter: Delete product │ Esc: Home │ Ctrl+Q: Quit",
            Screen::Search => " Type to filter │ Backspace: Erase │ Esc: Home",
            Screen::Showcase => " n/→: Next product │ r: Retry │ Esc: Home │ Ctrl+Q: Quit",
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count, so the separators don't skew it.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
