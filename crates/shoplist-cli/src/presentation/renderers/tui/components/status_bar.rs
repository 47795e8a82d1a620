//! Status Bar View Component
//!
//! Renders the bottom status bar with item counts and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::View;

pub struct StatusBarView<'a> {
    view: View,
    shown: usize,
    message: &'a str,
    form_focused: bool,
}

impl<'a> StatusBarView<'a> {
    pub fn new(view: View, shown: usize, message: &'a str, form_focused: bool) -> Self {
        Self {
            view,
            shown,
            message,
            form_focused,
        }
    }

    fn help_spans(&self) -> Vec<Span<'static>> {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

        if self.form_focused {
            return vec![
                key("[Tab]"),
                Span::raw("next "),
                key("[Enter]"),
                Span::raw("add "),
                key("[Esc]"),
                Span::raw("back"),
            ];
        }

        let mut spans = vec![
            key("[t]"),
            Span::raw("oggle "),
            key("[d]"),
            Span::raw("elete "),
        ];
        if self.view.has_add_form() {
            spans.push(key("[a]"));
            spans.push(Span::raw("dd "));
        }
        spans.push(key("[q]"));
        spans.push(Span::raw("uit"));
        spans
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::styled(format!("Items: {} ", self.shown), Style::default()),
            Span::raw("| "),
            Span::styled(self.message, Style::default().fg(Color::Green)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        Paragraph::new(Line::from(self.help_spans())).render(chunks[1], buf);
    }
}
