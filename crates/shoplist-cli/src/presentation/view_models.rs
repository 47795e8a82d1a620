//! Row view models
//!
//! A row is the fixed-width text shown for one item. Selection-based actions
//! resolve back to the item id by parsing that text, so `parse_id` must accept
//! everything `line` produces.

use shoplist_store::Item;

/// Header shown above every item list.
pub const LIST_HEADER: &str = "ID | Quantity | Description           | Status";

/// Width of the description column.
pub const DESCRIPTION_WIDTH: usize = 20;

pub const STATUS_TO_PURCHASE: &str = "To Purchase";
pub const STATUS_NOT_TO_PURCHASE: &str = "Not to Purchase";

pub fn status_label(to_purchase: bool) -> &'static str {
    if to_purchase {
        STATUS_TO_PURCHASE
    } else {
        STATUS_NOT_TO_PURCHASE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowViewModel {
    pub id: i64,
    pub quantity: i64,
    pub description: String,
    pub to_purchase: bool,
}

impl From<&Item> for ItemRowViewModel {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            quantity: item.quantity,
            description: item.description.clone(),
            to_purchase: item.to_purchase,
        }
    }
}

impl ItemRowViewModel {
    /// Id, quantity and description columns, without the trailing status.
    pub fn columns(&self) -> String {
        format!(
            "{:>2} | {:>8} | {:<width$}",
            self.id,
            self.quantity,
            truncate_text(&self.description, DESCRIPTION_WIDTH),
            width = DESCRIPTION_WIDTH
        )
    }

    pub fn status(&self) -> &'static str {
        status_label(self.to_purchase)
    }

    /// The full row as displayed in the list.
    pub fn line(&self) -> String {
        format!("{} | {}", self.columns(), self.status())
    }

    /// Recover the item id from a rendered row.
    pub fn parse_id(line: &str) -> Option<i64> {
        line.split('|').next()?.trim().parse().ok()
    }
}

fn truncate_text(text: &str, max_len: usize) -> String {
    // Descriptions may contain line breaks pasted from elsewhere
    let single_line: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if single_line.chars().count() <= max_len {
        single_line
    } else {
        let truncated: String = single_line.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
