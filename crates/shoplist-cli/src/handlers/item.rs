use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::status_label;
use crate::presentation::ListPresenter;
use anyhow::{Result, anyhow};
use serde_json::json;
use shoplist_store::Item;

pub fn add(
    presenter: &mut ListPresenter,
    description: &str,
    quantity: &str,
    barcode: &str,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let id = presenter.add_item(description, quantity, barcode)?;
    let item = fetch(presenter, id)?;

    let mut out = std::io::stdout().lock();
    renderer.render_outcome(
        &mut out,
        &format!("Added item {}: {}", id, item.description),
        &item,
    )
}

pub fn toggle(presenter: &mut ListPresenter, id: i64, renderer: &ConsoleRenderer) -> Result<()> {
    let item = presenter.toggle_by_id(id)?;

    let mut out = std::io::stdout().lock();
    renderer.render_outcome(
        &mut out,
        &format!("Item {}: {}", id, status_label(item.to_purchase)),
        &item,
    )
}

pub fn delete(presenter: &mut ListPresenter, id: i64, renderer: &ConsoleRenderer) -> Result<()> {
    presenter.delete_by_id(id)?;

    let mut out = std::io::stdout().lock();
    renderer.render_outcome(
        &mut out,
        &format!("Deleted item {}", id),
        &json!({ "deleted": id }),
    )
}

pub fn set(
    presenter: &mut ListPresenter,
    id: i64,
    field: &str,
    value: &str,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let field = presenter.update_field(id, field, value)?;
    let item = fetch(presenter, id)?;

    let mut out = std::io::stdout().lock();
    renderer.render_outcome(&mut out, &format!("Updated item {}: {}", id, field), &item)
}

fn fetch(presenter: &ListPresenter, id: i64) -> Result<Item> {
    presenter
        .store()
        .get_by_id(id)?
        .ok_or_else(|| anyhow!("Item not found: {}", id))
}
