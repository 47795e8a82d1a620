use rusqlite::Connection;
use std::path::Path;

use crate::{
    Error, Result, queries,
    records::{FieldUpdate, Item, NewItem},
    schema,
};

/// File name used when no database path is configured.
pub const DEFAULT_DB_NAME: &str = "shopping_list.db";

/// Owner of the single SQLite connection.
///
/// Every mutation runs in autocommit mode, so it is durable once the call
/// returns. The connection is released exactly once: by [`Database::close`],
/// or by drop when the owner unwinds early.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating when absent) the database file and its schema.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        tracing::debug!(path = %db_path.display(), "opened item store");
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        schema::init_schema(&conn)?;

        if let Some(field) = queries::item::missing_column(&conn)? {
            return Err(Error::Database(rusqlite::Error::InvalidColumnName(format!(
                "no such column: items.{}",
                field.column()
            ))));
        }

        Ok(Self { conn })
    }

    /// Persist a new item and return its assigned id.
    ///
    /// Fails with [`Error::ConstraintViolation`] when the barcode is taken.
    pub fn create(&self, item: &NewItem) -> Result<i64> {
        let id = queries::item::insert(&self.conn, item)?;
        tracing::debug!(id, description = %item.description, "created item");
        Ok(id)
    }

    pub fn get_all(&self) -> Result<Vec<Item>> {
        queries::item::list(&self.conn, false)
    }

    pub fn get_to_purchase(&self) -> Result<Vec<Item>> {
        queries::item::list(&self.conn, true)
    }

    /// Look up an item; absence is `Ok(None)`.
    pub fn get_by_id(&self, item_id: i64) -> Result<Option<Item>> {
        queries::item::get_by_id(&self.conn, item_id)
    }

    /// Apply only the given fields to an existing item.
    pub fn update_partial(&self, item_id: i64, updates: &[FieldUpdate]) -> Result<()> {
        queries::item::update_partial(&self.conn, item_id, updates)?;
        tracing::debug!(
            id = item_id,
            fields = ?updates.iter().map(FieldUpdate::field).collect::<Vec<_>>(),
            "updated item"
        );
        Ok(())
    }

    /// Remove an item. Deleting a missing id is not an error.
    pub fn delete(&self, item_id: i64) -> Result<()> {
        let removed = queries::item::delete(&self.conn, item_id)?;
        tracing::debug!(id = item_id, removed, "deleted item");
        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        queries::item::count(&self.conn)
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| Error::from(err))?;
        tracing::debug!("closed item store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_initialization() -> Result<()> {
        let db = Database::open_in_memory()?;

        assert_eq!(db.get_all()?.len(), 0);
        assert_eq!(db.count()?, 0);

        Ok(())
    }

    #[test]
    fn test_create_assigns_ids() -> Result<()> {
        let db = Database::open_in_memory()?;

        let first = db.create(&NewItem::new("Bread", 2))?;
        let second = db.create(&NewItem::new("Milk", 1))?;

        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let bread = db.get_by_id(first)?.expect("bread exists");
        assert_eq!(bread.description, "Bread");
        assert_eq!(bread.quantity, 2);
        assert!(bread.to_purchase);
        assert_eq!(bread.barcode, None);
        assert_eq!(bread.last_price, None);

        Ok(())
    }

    #[test]
    fn test_get_by_id_absent() -> Result<()> {
        let db = Database::open_in_memory()?;
        assert_eq!(db.get_by_id(99)?, None);
        Ok(())
    }

    #[test]
    fn test_ids_not_reused_after_delete() -> Result<()> {
        let db = Database::open_in_memory()?;

        let first = db.create(&NewItem::new("Bread", 2))?;
        db.delete(first)?;
        let second = db.create(&NewItem::new("Milk", 1))?;

        assert_ne!(first, second);

        Ok(())
    }

    #[test]
    fn test_empty_barcodes_do_not_collide() -> Result<()> {
        let db = Database::open_in_memory()?;

        let mut first = NewItem::new("Apples", 3);
        first.barcode = Some(String::new());
        let mut second = NewItem::new("Pears", 4);
        second.barcode = Some(String::new());

        db.create(&first)?;
        db.create(&second)?;

        assert_eq!(db.count()?, 2);
        assert!(db.get_all()?.iter().all(|item| item.barcode.is_none()));

        Ok(())
    }

    #[test]
    fn test_close_releases_connection() -> Result<()> {
        let db = Database::open_in_memory()?;
        db.create(&NewItem::new("Bread", 2))?;
        db.close()
    }
}
