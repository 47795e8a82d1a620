use rusqlite::Connection;

use crate::{Error, Result};

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version > SCHEMA_VERSION {
        return Err(Error::UnsupportedSchema {
            found: current_version,
            supported: SCHEMA_VERSION,
        });
    }

    // Version 0 covers both a fresh file and an unstamped file that already
    // holds an items table; CREATE IF NOT EXISTS leaves the latter's rows alone.
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            quantity INTEGER,
            description TEXT,
            barcode TEXT UNIQUE,
            last_price REAL,
            to_purchase BOOLEAN
        );

        CREATE INDEX IF NOT EXISTS idx_items_to_purchase ON items(to_purchase);
        "#,
    )?;

    if current_version != SCHEMA_VERSION {
        conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))?;
    }

    Ok(())
}
