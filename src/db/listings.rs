use crate::db::connection::Database;
use crate::domain::ListingKind;
use crate::errors::ExportError;
use crate::repository::Snapshot;
use chrono::NaiveDateTime;
use rusqlite::params;

/// A row read back from the `listings` export table.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedListing {
    pub position: i64,
    pub kind: String,
    pub address: String,
    pub price: i64,
    pub status: String,
    pub listed_at: NaiveDateTime,
    pub bedrooms: Option<i64>,
    pub business_type: Option<String>,
}

/// Replaces the table content with `snapshot`, in one transaction.
pub fn save_snapshot(db: &mut Database, snapshot: &Snapshot) -> Result<usize, ExportError> {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM listings", [])?;

        for (position, listing) in snapshot.iter().enumerate() {
            let (kind, bedrooms, business_type) = match listing.kind() {
                ListingKind::Residential { bedrooms } => {
                    ("residential", Some(i64::from(*bedrooms)), None)
                }
                ListingKind::Commercial { business_type } => {
                    ("commercial", None, Some(business_type.as_str()))
                }
            };
            let raw_json = serde_json::to_string(listing)?;

            tx.execute(
                r#"
                INSERT INTO listings (
                    position, kind, address, price, status, listed_at,
                    bedrooms, business_type, snapshot_at, raw_json
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                "#,
                params![
                    position as i64,
                    kind,
                    listing.address(),
                    listing.price(),
                    listing.status().as_str(),
                    listing.listed_at(),
                    bedrooms,
                    business_type,
                    snapshot.taken_at(),
                    raw_json
                ],
            )?;
        }

        tx.commit()?;
        Ok(snapshot.len())
    })
}

/// Exported rows in their original snapshot order.
pub fn get_exported_listings(db: &mut Database) -> Result<Vec<ExportedListing>, ExportError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            r#"
            SELECT
                position,       -- 0
                kind,           -- 1
                address,        -- 2
                price,          -- 3
                status,         -- 4
                listed_at,      -- 5
                bedrooms,       -- 6
                business_type   -- 7
            FROM listings
            ORDER BY position
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ExportedListing {
                position: row.get(0)?,
                kind: row.get(1)?,
                address: row.get(2)?,
                price: row.get(3)?,
                status: row.get(4)?,
                listed_at: row.get(5)?,
                bedrooms: row.get(6)?,
                business_type: row.get(7)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}
