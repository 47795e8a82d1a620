//! List presenter
//!
//! Owns the item store and the current view. Every user action goes through
//! here: validate, call the store, then re-fetch the active view so callers
//! only ever render what the store returned.

use shoplist_store::{Database, Error as StoreError, FieldUpdate, Item, ItemField, NewItem};
use thiserror::Error;

use super::view_models::ItemRowViewModel;

/// The two mutually exclusive list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    ToPurchase,
    AllItems,
}

impl View {
    pub const ALL: [View; 2] = [View::ToPurchase, View::AllItems];

    /// Menu label for this view.
    pub fn title(self) -> &'static str {
        match self {
            View::ToPurchase => "Items to Purchase",
            View::AllItems => "Show Database Items",
        }
    }

    /// Only the all-items view carries the add-item form.
    pub fn has_add_form(self) -> bool {
        matches!(self, View::AllItems)
    }

    pub fn index(self) -> usize {
        match self {
            View::ToPurchase => 0,
            View::AllItems => 1,
        }
    }
}

/// Failure of a user action, ready to be shown to the user.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Input rejected before touching the store
    #[error("{0}")]
    Validation(String),

    #[error("An item with barcode '{0}' already exists.")]
    DuplicateBarcode(String),

    #[error("{0}")]
    Store(#[from] StoreError),
}

pub type ActionResult<T> = std::result::Result<T, ActionError>;

pub struct ListPresenter {
    store: Database,
    view: View,
    items: Vec<Item>,
    rows: Vec<ItemRowViewModel>,
}

impl ListPresenter {
    /// Start in the to-purchase view.
    pub fn new(store: Database) -> ActionResult<Self> {
        let mut presenter = Self {
            store,
            view: View::default(),
            items: Vec::new(),
            rows: Vec::new(),
        };
        presenter.refresh()?;
        Ok(presenter)
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Items of the active view, as last fetched.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn rows(&self) -> &[ItemRowViewModel] {
        &self.rows
    }

    pub fn store(&self) -> &Database {
        &self.store
    }

    pub fn show_to_purchase(&mut self) -> ActionResult<()> {
        self.show(View::ToPurchase)
    }

    pub fn show_all(&mut self) -> ActionResult<()> {
        self.show(View::AllItems)
    }

    pub fn show(&mut self, view: View) -> ActionResult<()> {
        self.view = view;
        self.refresh()
    }

    /// Re-fetch the active view from the store.
    pub fn refresh(&mut self) -> ActionResult<()> {
        self.items = match self.view {
            View::ToPurchase => self.store.get_to_purchase()?,
            View::AllItems => self.store.get_all()?,
        };
        self.rows = self.items.iter().map(ItemRowViewModel::from).collect();
        Ok(())
    }

    /// Validate form input and create a new item flagged for purchase.
    pub fn add_item(
        &mut self,
        description: &str,
        quantity: &str,
        barcode: &str,
    ) -> ActionResult<i64> {
        if description.is_empty() || quantity.trim().is_empty() {
            return Err(ActionError::Validation(
                "Description and Quantity are required.".to_string(),
            ));
        }

        let quantity: i64 = quantity
            .trim()
            .parse()
            .map_err(|_| ActionError::Validation("Quantity must be a number.".to_string()))?;

        let barcode = barcode.trim();
        let new_item = NewItem::new(description, quantity)
            .with_barcode((!barcode.is_empty()).then(|| barcode.to_string()));

        let id = match self.store.create(&new_item) {
            Ok(id) => id,
            Err(StoreError::ConstraintViolation(_)) => {
                return Err(ActionError::DuplicateBarcode(barcode.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(id, description, quantity, "added item");
        self.refresh()?;
        Ok(id)
    }

    /// Delete the item shown on the selected row.
    pub fn delete_selected(&mut self, selected: Option<&str>) -> ActionResult<i64> {
        let id = selected_id(selected, "Please select an item to delete.")?;
        self.delete_by_id(id)?;
        Ok(id)
    }

    pub fn delete_by_id(&mut self, id: i64) -> ActionResult<()> {
        self.store.delete(id)?;
        tracing::info!(id, "deleted item");
        self.refresh()
    }

    /// Flip the to-purchase flag of the item on the selected row.
    pub fn toggle_selected(&mut self, selected: Option<&str>) -> ActionResult<Item> {
        let id = selected_id(
            selected,
            "Please select an item to toggle purchase status.",
        )?;
        self.toggle_by_id(id)
    }

    /// Returns the item as stored after the toggle.
    pub fn toggle_by_id(&mut self, id: i64) -> ActionResult<Item> {
        let current = self.store.get_by_id(id)?.ok_or(StoreError::NotFound(id))?;
        let to_purchase = !current.to_purchase;

        self.store
            .update_partial(id, &[FieldUpdate::ToPurchase(to_purchase)])?;
        tracing::info!(id, to_purchase, "toggled item");

        self.refresh()?;
        Ok(Item {
            to_purchase,
            ..current
        })
    }

    /// Update one field addressed by its column name.
    pub fn update_field(&mut self, id: i64, field: &str, value: &str) -> ActionResult<ItemField> {
        let field: ItemField = field.parse()?;
        let update = field.parse_value(value)?;

        match self.store.update_partial(id, &[update]) {
            Ok(()) => {}
            Err(StoreError::ConstraintViolation(_)) => {
                return Err(ActionError::DuplicateBarcode(value.trim().to_string()));
            }
            Err(err) => return Err(err.into()),
        }
        tracing::info!(id, %field, "updated item field");

        self.refresh()?;
        Ok(field)
    }

    /// Release the store.
    pub fn close(self) -> shoplist_store::Result<()> {
        self.store.close()
    }
}

fn selected_id(selected: Option<&str>, missing: &str) -> ActionResult<i64> {
    let line = selected.ok_or_else(|| ActionError::Validation(missing.to_string()))?;
    ItemRowViewModel::parse_id(line).ok_or_else(|| {
        ActionError::Validation(format!("Could not read the item id from '{}'.", line.trim()))
    })
}
