//! Menu bar with one entry per view; the active view is highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

use crate::presentation::View;

pub struct MenuBarView {
    active: View,
}

impl MenuBarView {
    pub fn new(active: View) -> Self {
        Self { active }
    }
}

impl Widget for MenuBarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = View::ALL
            .iter()
            .map(|view| Line::from(format!("[F{}] {}", view.index() + 1, view.title())));

        Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|")
            .render(area, buf);
    }
}
