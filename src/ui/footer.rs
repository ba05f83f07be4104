use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const KEY_HINTS: [(&str, &str); 3] = [
    ("Enter/Space", "Increment"),
    ("Tab", "Focus"),
    ("q", "Quit"),
];

/// Key hints on the left, crate version on the right.
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

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled(" ", dim)];
        for (idx, (key, action)) in KEY_HINTS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", separator));
            }
            spans.push(Span::styled(format!("{key}: {action}"), dim));
        }

        let version = format!("v{VERSION} ");
        // Widths in chars, the separator is multi-byte
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let inner_width = area.width.saturating_sub(2) as usize;
        let padding = inner_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, dim));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
