use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    Error, Result,
    records::{FieldUpdate, Item, ItemField, NewItem},
};

const ITEM_COLUMNS: &str = "id, quantity, description, barcode, last_price, to_purchase";

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        quantity: row.get(1)?,
        description: row.get(2)?,
        barcode: row.get(3)?,
        last_price: row.get(4)?,
        to_purchase: row.get(5)?,
    })
}

pub fn insert(conn: &Connection, item: &NewItem) -> Result<i64> {
    let barcode = item.barcode.as_deref().filter(|code| !code.is_empty());

    conn.execute(
        r#"
        INSERT INTO items (quantity, description, barcode, last_price, to_purchase)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            item.quantity,
            &item.description,
            barcode,
            item.last_price,
            item.to_purchase
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn get_by_id(conn: &Connection, item_id: i64) -> Result<Option<Item>> {
    let item = conn
        .query_row(
            &format!("SELECT {} FROM items WHERE id = ?1", ITEM_COLUMNS),
            [item_id],
            row_to_item,
        )
        .optional()?;

    Ok(item)
}

pub fn list(conn: &Connection, to_purchase_only: bool) -> Result<Vec<Item>> {
    let where_clause = if to_purchase_only {
        "WHERE to_purchase = 1"
    } else {
        ""
    };

    let query = format!(
        r#"
        SELECT {}
        FROM items
        {}
        ORDER BY id ASC
        "#,
        ITEM_COLUMNS, where_clause
    );

    let mut stmt = conn.prepare(&query)?;
    let items = stmt
        .query_map([], row_to_item)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(items)
}

pub fn update_partial(conn: &Connection, item_id: i64, updates: &[FieldUpdate]) -> Result<()> {
    if updates.is_empty() {
        return Err(Error::EmptyUpdate);
    }

    // Later assignments to the same field win
    let mut assignments: Vec<&FieldUpdate> = Vec::with_capacity(updates.len());
    for update in updates {
        match assignments
            .iter()
            .position(|existing| existing.field() == update.field())
        {
            Some(index) => assignments[index] = update,
            None => assignments.push(update),
        }
    }

    // Column names come from ItemField, never from caller text
    let set_clause = assignments
        .iter()
        .enumerate()
        .map(|(i, update)| format!("{} = ?{}", update.field().column(), i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    let query = format!(
        "UPDATE items SET {} WHERE id = ?{}",
        set_clause,
        assignments.len() + 1
    );

    let values = assignments
        .iter()
        .map(|update| update.to_sql())
        .chain(std::iter::once(
            Box::new(item_id) as Box<dyn rusqlite::ToSql + '_>
        ));

    let changed = conn.execute(&query, rusqlite::params_from_iter(values))?;
    if changed == 0 {
        return Err(Error::NotFound(item_id));
    }

    Ok(())
}

pub fn delete(conn: &Connection, item_id: i64) -> Result<bool> {
    let changed = conn.execute("DELETE FROM items WHERE id = ?1", [item_id])?;
    Ok(changed > 0)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// First updatable field whose column is absent from the current table.
///
/// Guards files created by other tools that share the table name.
pub fn missing_column(conn: &Connection) -> Result<Option<ItemField>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('items')")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(ItemField::ALL
        .into_iter()
        .find(|field| !names.iter().any(|name| name == field.column())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    #[test]
    fn test_update_last_assignment_wins() -> Result<()> {
        let db = Database::open_in_memory()?;
        let id = db.create(&NewItem::new("Milk", 1))?;

        db.update_partial(
            id,
            &[
                FieldUpdate::Quantity(2),
                FieldUpdate::ToPurchase(false),
                FieldUpdate::Quantity(5),
            ],
        )?;

        let item = db.get_by_id(id)?.expect("item exists");
        assert_eq!(item.quantity, 5);
        assert!(!item.to_purchase);
        assert_eq!(item.description, "Milk");

        Ok(())
    }

    #[test]
    fn test_update_missing_id_is_not_found() -> Result<()> {
        let db = Database::open_in_memory()?;

        match db.update_partial(42, &[FieldUpdate::ToPurchase(false)]) {
            Err(Error::NotFound(id)) => assert_eq!(id, 42),
            other => panic!("expected not found, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn test_update_requires_fields() -> Result<()> {
        let db = Database::open_in_memory()?;
        let id = db.create(&NewItem::new("Milk", 1))?;

        assert!(matches!(db.update_partial(id, &[]), Err(Error::EmptyUpdate)));

        Ok(())
    }

    #[test]
    fn test_update_clears_optional_fields() -> Result<()> {
        let db = Database::open_in_memory()?;
        let mut new_item = NewItem::new("Coffee", 1).with_barcode(Some("123".to_string()));
        new_item.last_price = Some(7.5);
        let id = db.create(&new_item)?;

        db.update_partial(id, &[FieldUpdate::Barcode(None), FieldUpdate::LastPrice(None)])?;

        let item = db.get_by_id(id)?.expect("item exists");
        assert_eq!(item.barcode, None);
        assert_eq!(item.last_price, None);

        Ok(())
    }

    #[test]
    fn test_all_fields_exist_in_schema() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        crate::schema::init_schema(&conn)?;

        assert_eq!(missing_column(&conn)?, None);

        Ok(())
    }

    #[test]
    fn test_missing_column_is_reported() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "CREATE TABLE items (id INTEGER PRIMARY KEY, quantity INTEGER, description TEXT)",
        )?;

        assert_eq!(missing_column(&conn)?, Some(ItemField::Barcode));

        Ok(())
    }
}
