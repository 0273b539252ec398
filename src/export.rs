// src/export.rs

use crate::db::{init_db, save_snapshot, Database};
use crate::errors::ExportError;
use crate::repository::Snapshot;
use crate::spreadsheets::export_listings_xlsx;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Somewhere a snapshot can be written to. The core never reads it back.
pub trait ListingSink {
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ExportError>;
}

/// One `describe()` line per listing, newline terminated.
pub struct TextFileSink {
    path: PathBuf,
}

impl TextFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSink for TextFileSink {
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ExportError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        for line in snapshot.describe_lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        info!(path = %self.path.display(), listings = snapshot.len(), "text export written");
        Ok(())
    }
}

pub struct XlsxSink {
    path: PathBuf,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSink for XlsxSink {
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ExportError> {
        let buffer = export_listings_xlsx(snapshot)?;
        std::fs::write(&self.path, buffer)?;

        info!(path = %self.path.display(), listings = snapshot.len(), "xlsx export written");
        Ok(())
    }
}

pub struct SqliteSink {
    db: Database,
}

impl SqliteSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        Self::with_database(Database::open(path)?)
    }

    pub fn with_database(mut db: Database) -> Result<Self, ExportError> {
        init_db(&mut db)?;
        Ok(Self { db })
    }

    pub fn database(&mut self) -> &mut Database {
        &mut self.db
    }
}

impl ListingSink for SqliteSink {
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ExportError> {
        let written = save_snapshot(&mut self.db, snapshot)?;
        info!(listings = written, "sqlite export written");
        Ok(())
    }
}
