use rusqlite::Connection;
use std::path::Path;

use crate::errors::ExportError;

const SQL_SCHEMA: &str = include_str!("../../sql/schema.sql");

/// SQLite handle used as an export target.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> Result<Self, ExportError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&mut self, f: F) -> Result<T, ExportError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ExportError>,
    {
        f(&mut self.conn)
    }
}

/// Creates the export tables if they are missing.
pub fn init_db(db: &mut Database) -> Result<(), ExportError> {
    db.with_conn(|conn| {
        conn.execute_batch(SQL_SCHEMA)?;
        Ok(())
    })?;

    tracing::debug!("export schema ready");
    Ok(())
}
