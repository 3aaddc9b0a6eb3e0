//! Note database operations

use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, Result as SqliteResult, Row};

use crate::models::{Note, SaveNoteRequest};
use super::super::Database;

const NOTE_COLUMNS: &str = "id, title, content, created_at, updated_at";

impl Database {
    /// List every note, ordered by id
    pub fn list_notes(&self) -> SqliteResult<Vec<Note>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM notes ORDER BY id", NOTE_COLUMNS))?;
        let rows = stmt.query_map([], row_to_note)?;
        rows.collect()
    }

    /// Save a note: replace title/content if `id` names an existing note, insert otherwise
    pub fn save_note(&self, request: &SaveNoteRequest) -> SqliteResult<Note> {
        let conn = self.conn()?;
        let now = Utc::now().to_rfc3339();

        if let Some(id) = request.id {
            let updated = conn.execute(
                "UPDATE notes SET title = ?1, content = ?2, updated_at = ?3 WHERE id = ?4",
                rusqlite::params![request.title, request.content, &now, id],
            )?;
            if updated > 0 {
                log::debug!("[NOTES] Updated note {}", id);
                return fetch_note(&conn, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows);
            }
            log::debug!("[NOTES] No note with id {}, inserting a new one", id);
        }

        conn.execute(
            "INSERT INTO notes (title, content, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
            rusqlite::params![request.title, request.content, &now],
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("[NOTES] Created note {}", id);

        fetch_note(&conn, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
    }

    /// Get a note by id
    pub fn get_note(&self, id: i64) -> SqliteResult<Option<Note>> {
        let conn = self.conn()?;
        fetch_note(&conn, id)
    }

    /// Check whether a note with this id exists
    pub fn note_exists(&self, id: i64) -> SqliteResult<bool> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM notes WHERE id = ?1",
            [id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Delete a note. Returns false if nothing was deleted.
    pub fn delete_note(&self, id: i64) -> SqliteResult<bool> {
        let conn = self.conn()?;
        let rows_affected = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        Ok(rows_affected > 0)
    }

    pub fn count_notes(&self) -> SqliteResult<i64> {
        let conn = self.conn()?;
        conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
    }
}

fn fetch_note(conn: &rusqlite::Connection, id: i64) -> SqliteResult<Option<Note>> {
    conn.query_row(
        &format!("SELECT {} FROM notes WHERE id = ?1", NOTE_COLUMNS),
        [id],
        row_to_note,
    )
    .optional()
}

fn row_to_note(row: &Row) -> SqliteResult<Note> {
    let created_at_str: String = row.get(3)?;
    let updated_at_str: String = row.get(4)?;

    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created_at: parse_timestamp(3, &created_at_str)?,
        updated_at: parse_timestamp(4, &updated_at_str)?,
    })
}

fn parse_timestamp(column: usize, value: &str) -> SqliteResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
