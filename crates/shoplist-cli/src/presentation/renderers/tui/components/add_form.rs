//! Add Item Form Component
//!
//! Three single-line text fields: description, quantity and optional barcode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const LABELS: [&str; 3] = ["Description:", "Quantity:", "Barcode (optional):"];
const LABEL_WIDTH: u16 = 21;

/// Actions that the form can emit to its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Enter pressed: validate and add the item
    Submit,
    /// Esc pressed: give focus back to the list
    Leave,
}

/// Values currently typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    pub description: String,
    pub quantity: String,
    pub barcode: String,
}

#[derive(Default)]
pub struct AddItemForm {
    fields: [String; 3],
    active: usize,
}

impl AddItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> FormValues {
        FormValues {
            description: self.fields[0].clone(),
            quantity: self.fields[1].clone(),
            barcode: self.fields[2].clone(),
        }
    }

    /// Empty every field and move back to the first one.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active = 0;
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<FormAction> {
        match key.code {
            KeyCode::Enter => return Some(FormAction::Submit),
            KeyCode::Esc => return Some(FormAction::Leave),
            KeyCode::Tab | KeyCode::Down => self.active = (self.active + 1) % LABELS.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.active = (self.active + LABELS.len() - 1) % LABELS.len()
            }
            KeyCode::Backspace => {
                self.fields[self.active].pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.fields[self.active].push(c);
            }
            _ => {}
        }
        None
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(" Add New Item ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1); 3]).split(inner);

        for (index, (label, value)) in LABELS.iter().zip(&self.fields).enumerate() {
            let active = focused && index == self.active;
            let value_style = if active {
                Style::default().add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", label, width = LABEL_WIDTH as usize - 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(value.as_str(), value_style),
            ]);
            f.render_widget(Paragraph::new(line), rows[index]);

            if active {
                let cursor_x = rows[index].x + LABEL_WIDTH + value.chars().count() as u16;
                f.set_cursor_position(Position::new(
                    cursor_x.min(rows[index].right().saturating_sub(1)),
                    rows[index].y,
                ));
            }
        }
    }
}
