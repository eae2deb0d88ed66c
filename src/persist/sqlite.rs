//! SQLite-backed contact store.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    contact::{ContactDraft, ContactRecord},
    types::ContactId,
};

use super::{ContactStore, StoreResult};

const SELECT_COLUMNS: &str = "SELECT id, callsign, frequency, mode, date, time FROM logs";

/// SQLite implementation of [`crate::persist::ContactStore`].
pub struct SqliteContactStore {
    conn: Connection,
}

impl SqliteContactStore {
    /// Opens or creates a log database at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        log::debug!("opening contact log at {}", path.display());
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory log database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> StoreResult<Self> {
        let mut store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Looks up a single record.
    pub fn get(&self, id: ContactId) -> StoreResult<Option<ContactRecord>> {
        let rec = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                record_from_row,
            )
            .optional()?;
        Ok(rec)
    }

    /// Number of rows in the log.
    pub fn record_count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl ContactStore for SqliteContactStore {
    fn initialize(&mut self) -> StoreResult<()> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    fn add(&mut self, draft: &ContactDraft) -> StoreResult<ContactId> {
        self.conn.execute(
            "INSERT INTO logs (callsign, frequency, mode, date, time) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                draft.callsign,
                draft.frequency,
                draft.mode,
                draft.date,
                draft.time
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        log::debug!("inserted contact {id} ({})", draft.callsign);
        Ok(id)
    }

    fn update(&mut self, id: ContactId, draft: &ContactDraft) -> StoreResult<usize> {
        let changed = self.conn.execute(
            "UPDATE logs SET callsign = ?1, frequency = ?2, mode = ?3, date = ?4, time = ?5 WHERE id = ?6",
            params![
                draft.callsign,
                draft.frequency,
                draft.mode,
                draft.date,
                draft.time,
                id
            ],
        )?;
        if changed == 0 {
            log::warn!("update of contact {id} matched no rows");
        } else {
            log::debug!("updated contact {id}");
        }
        Ok(changed)
    }

    fn delete(&mut self, id: ContactId) -> StoreResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM logs WHERE id = ?1", params![id])?;
        if removed == 0 {
            log::warn!("delete of contact {id} matched no rows");
        } else {
            log::debug!("deleted contact {id}");
        }
        Ok(removed)
    }

    fn list_all(&self) -> StoreResult<Vec<ContactRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY id DESC"))?;
        let rows = stmt.query_map([], record_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

// Only `callsign` is NOT NULL; other writers may leave the rest unset.
fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ContactRecord> {
    let text = |idx: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
    };
    Ok(ContactRecord {
        id: row.get(0)?,
        callsign: row.get(1)?,
        frequency: text(2)?,
        mode: text(3)?,
        date: text(4)?,
        time: text(5)?,
    })
}
