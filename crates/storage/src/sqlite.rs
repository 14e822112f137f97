//! SQLite storage implementation

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use newsticker_core::{TICKER_KEY, TickerState};
use rusqlite::{Connection, OptionalExtension, params};

use crate::migrations;
use crate::{StorageError, TickerStore};

/// Durable ticker store over a SQLite database file.
///
/// The singleton record lives in the `settings` table under the fixed
/// `breaking_ticker` key, mirroring how the rest of the platform stores
/// site-wide switches.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

fn lock_conn<T>(mutex: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e: PoisonError<_>| StorageError::Poisoned(e.to_string()))
}

impl SqliteStore {
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)?;
        let store = Self { conn: Arc::new(Mutex::new(conn)) };

        let conn = lock_conn(&store.conn)?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        Ok(store)
    }

    /// In-memory SQLite database, used by the test suite.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }
}

impl TickerStore for SqliteStore {
    fn find(&self) -> Result<Option<TickerState>, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let row = conn
            .query_row(
                r#"SELECT texts, enabled, updated_at, updated_by
                   FROM settings WHERE key = ?1"#,
                params![TICKER_KEY],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, bool>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, Option<String>>(3)?,
                    ))
                },
            )
            .optional()?;

        let Some((texts_json, enabled, updated_at_str, updated_by)) = row else {
            return Ok(None);
        };

        let texts: Vec<String> = serde_json::from_str(&texts_json)?;
        let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|e| StorageError::DataCorruption {
                context: format!("updated_at is not RFC 3339: {updated_at_str}"),
                source: Box::new(e),
            })?
            .with_timezone(&Utc);

        Ok(Some(TickerState { texts, enabled, updated_at, updated_by }))
    }

    fn upsert(&self, state: &TickerState) -> Result<(), StorageError> {
        let conn = lock_conn(&self.conn)?;
        conn.execute(
            r#"INSERT OR REPLACE INTO settings (key, texts, enabled, updated_at, updated_by)
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
            params![
                TICKER_KEY,
                serde_json::to_string(&state.texts)?,
                state.enabled,
                state.updated_at.with_timezone(&Utc).to_rfc3339(),
                state.updated_by,
            ],
        )?;
        Ok(())
    }
}
