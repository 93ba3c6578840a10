use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::{PickerError, PickerResult};

pub fn get(conn: &Connection, key: &str) -> PickerResult<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM slots WHERE key = ?1")?;

    match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn set(conn: &Connection, key: &str, value: &str) -> PickerResult<()> {
    conn.execute(
        "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn clear(conn: &Connection, key: &str) -> PickerResult<()> {
    conn.execute("DELETE FROM slots WHERE key = ?1", params![key])?;
    Ok(())
}

/// When the slot was last written, if it exists.
pub fn updated_at(conn: &Connection, key: &str) -> PickerResult<Option<DateTime<Utc>>> {
    let mut stmt = conn.prepare("SELECT updated_at FROM slots WHERE key = ?1")?;

    let raw = match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
        Ok(raw) => raw,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|e| PickerError::Other(format!("Invalid timestamp '{}': {}", raw, e)))
}
