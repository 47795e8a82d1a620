// SQLite item store
// One table, one connection, owned by whoever opened it

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::{DEFAULT_DB_NAME, Database};
pub use error::{Error, Result};
pub use records::{FieldUpdate, Item, ItemField, NewItem};
pub use schema::SCHEMA_VERSION;
