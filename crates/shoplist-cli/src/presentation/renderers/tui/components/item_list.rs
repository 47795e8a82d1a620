//! Item List Component
//!
//! Encapsulates list selection state and input handling for one view.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};

use crate::presentation::view_models::{ItemRowViewModel, LIST_HEADER};

const PAGE_SIZE: usize = 10;

/// Item list with encapsulated selection state
pub struct ItemListComponent {
    /// List state (scroll position, selection) - PRIVATE
    state: ListState,
}

impl ItemListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
        }
    }

    /// Handle navigation keys. Returns true when the key was consumed.
    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.next(data_len),
            KeyCode::Char('k') | KeyCode::Up => self.previous(),
            KeyCode::PageDown => self.page_down(data_len),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home => self.scroll_to_top(data_len),
            KeyCode::End => self.scroll_to_bottom(data_len),
            _ => return false,
        }
        true
    }

    /// Index of the selected row, clamped to the data.
    pub fn selected(&self, data_len: usize) -> Option<usize> {
        self.state.selected().filter(|_| data_len > 0).map(|i| i.min(data_len - 1))
    }

    /// Drop the selection; the next action needs a fresh choice.
    pub fn clear_selection(&mut self) {
        self.state.select(None);
    }

    /// Text of the selected row, as displayed.
    pub fn selected_line(&self, rows: &[ItemRowViewModel]) -> Option<String> {
        self.selected(rows.len()).map(|i| rows[i].line())
    }

    /// Render header, rows and scrollbar.
    ///
    /// Performs index safety check before rendering.
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        title: &str,
        rows: &[ItemRowViewModel],
        focused: bool,
    ) {
        // Index Safety: Clamp selection to data bounds
        match self.state.selected() {
            Some(_) if rows.is_empty() => self.state.select(None),
            Some(selected) if selected >= rows.len() => self.state.select(Some(rows.len() - 1)),
            _ => {}
        }

        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(format!(" {} ({}) ", title, rows.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);

        let header = Paragraph::new(LIST_HEADER).style(
            Style::default()
                .bg(Color::Gray)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(header, chunks[0]);

        if rows.is_empty() {
            let empty = Paragraph::new("No items.").style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, chunks[1]);
            return;
        }

        let list_items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let style = if row.to_purchase {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(row.line()).style(style)
            })
            .collect();

        let list = List::new(list_items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(list, chunks[1], &mut self.state);

        let mut scrollbar_state =
            ScrollbarState::new(rows.len()).position(self.state.selected().unwrap_or(0));
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }

    // Private state manipulation methods - Renderer doesn't know these

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) => (i + 1).min(data_len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }

    fn page_down(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) => (i + PAGE_SIZE).min(data_len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn page_up(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(PAGE_SIZE),
            None => 0,
        };
        self.state.select(Some(prev));
    }

    fn scroll_to_top(&mut self, data_len: usize) {
        if data_len > 0 {
            self.state.select(Some(0));
        }
    }

    fn scroll_to_bottom(&mut self, data_len: usize) {
        if data_len > 0 {
            self.state.select(Some(data_len - 1));
        }
    }
}

impl Default for ItemListComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut list = ItemListComponent::new();
        assert_eq!(list.selected(3), None);

        assert!(list.handle_input(key(KeyCode::Down), 3));
        assert_eq!(list.selected(3), Some(0));

        list.handle_input(key(KeyCode::End), 3);
        list.handle_input(key(KeyCode::Down), 3);
        assert_eq!(list.selected(3), Some(2));

        list.handle_input(key(KeyCode::PageUp), 3);
        assert_eq!(list.selected(3), Some(0));

        list.handle_input(key(KeyCode::Up), 3);
        assert_eq!(list.selected(3), Some(0));
    }

    #[test]
    fn test_selection_clamps_when_rows_shrink() {
        let mut list = ItemListComponent::new();
        list.handle_input(key(KeyCode::End), 5);

        assert_eq!(list.selected(5), Some(4));
        assert_eq!(list.selected(2), Some(1));
        assert_eq!(list.selected(0), None);
    }

    #[test]
    fn test_clear_selection() {
        let mut list = ItemListComponent::new();
        list.handle_input(key(KeyCode::Down), 3);
        list.clear_selection();

        assert_eq!(list.selected(3), None);
    }

    #[test]
    fn test_unrelated_keys_are_not_consumed() {
        let mut list = ItemListComponent::new();
        assert!(!list.handle_input(key(KeyCode::Char('x')), 3));
    }
}
