// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Local durable storage.
//!
//! This module keeps single-device state in a SQLite database laid out as a
//! plain key/value store: each key holds one text value, typically a JSON
//! document. Values are versioned through their key names rather than
//! through the schema.
//!
//! # Tables
//!
//! * `local_storage` - One row per key.

pub(crate) mod watchlist;

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

/// Opens the storage database at `path` and configures it.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging so a crash mid-write never
///   leaves a half written value.
/// * **Schema**: Executes [`create_schema`] to ensure the table exists.
///
/// # Errors
///
/// Returns an error if:
/// * The database file cannot be opened.
/// * The journal mode cannot be switched to WAL.
/// * The schema initialization fails.
pub(crate) fn init_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open storage at {}", path.display()))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

    create_schema(&conn)?;

    Ok(conn)
}

/// Opens a throwaway in-memory store with the same schema.
#[cfg(test)]
pub(crate) fn init_memory_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;

    Ok(conn)
}

fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
    )
    .context("Failed to create schema")
}

/// Reads the value stored under `key`, if any.
pub(crate) fn get_item(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM local_storage WHERE key = ?")?;
    let value = stmt
        .query_row([key], |row| row.get(0))
        .optional()
        .with_context(|| format!("Failed to read '{}'", key))?;

    Ok(value)
}

/// Stores `value` under `key`, replacing any previous value.
pub(crate) fn set_item(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
         ON CONFLICT (key) DO UPDATE SET value = excluded.value",
    )?;
    stmt.execute(params![key, value])
        .with_context(|| format!("Failed to write '{}'", key))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let conn = init_memory_db().unwrap();
        assert_eq!(get_item(&conn, "watchlist_v1").unwrap(), None);
    }

    #[test]
    fn set_item_overwrites_previous_value() {
        let conn = init_memory_db().unwrap();

        set_item(&conn, "watchlist_v1", "[]").unwrap();
        set_item(&conn, "watchlist_v1", r#"[{"id":1}]"#).unwrap();

        assert_eq!(
            get_item(&conn, "watchlist_v1").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM local_storage", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }
}
