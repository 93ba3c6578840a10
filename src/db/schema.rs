use rusqlite::Connection;

use crate::error::PickerResult;

/// Initialize the database schema. Creates the slot table if it doesn't exist.
pub fn initialize(conn: &Connection) -> PickerResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS slots (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
