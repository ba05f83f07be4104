//! View tree for the counter display unit.

use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BUTTON_TEXT, COUNTER_VALUE, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::CounterState;

pub const INCREMENT_LABEL: &str = "Increment";

/// Declarative description of a rendered counter.
///
/// Built from state alone; the host turns it into a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub title: &'static str,
    pub value: u64,
    pub control: &'static str,
}

impl CounterView {
    pub fn new(title: &'static str, state: &CounterState) -> Self {
        Self {
            title,
            value: state.value(),
            control: INCREMENT_LABEL,
        }
    }

    /// Text of the counter label, e.g. `counter: 3`.
    pub fn counter_label(&self) -> String {
        format!("counter: {}", self.value)
    }

    pub fn widget(&self, focused: bool) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let mut button_style = Style::default().fg(BUTTON_TEXT).bg(ACTIVE_HIGHLIGHT);
        if focused {
            button_style = button_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let lines = vec![
            Line::from(Span::styled(self.title, title_style)),
            Line::from(""),
            Line::from(vec![
                Span::styled("counter: ", text_style),
                Span::styled(self.value.to_string(), Style::default().fg(COUNTER_VALUE)),
            ]),
            Line::from(""),
            Line::from(Span::styled(format!("[ {} ]", self.control), button_style)),
        ];

        let border = if focused { POPUP_BORDER } else { GLOBAL_BORDER };
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }
}
