//! Blocking notice dialog for errors.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// A message the user must acknowledge before doing anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

pub struct NoticeView<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeView<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl<'a> Widget for NoticeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.notice.message.chars().count() as u16 + 4).clamp(30, 70);
        let [row] = Layout::vertical([Constraint::Length(6)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        Clear.render(popup, buf);

        let text = vec![
            Line::from(self.notice.message.as_str()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
                Span::raw(" OK"),
            ]),
        ];

        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", self.notice.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(popup, buf);
    }
}
