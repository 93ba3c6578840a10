use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::db::{schema, slot_repo};
use crate::error::PickerResult;

/// Durable key-value slots. Injected wherever results are persisted so an
/// in-memory fake can stand in during tests.
pub trait SlotStorage {
    fn get(&self, key: &str) -> PickerResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PickerResult<()>;
    fn clear(&self, key: &str) -> PickerResult<()>;
}

/// Slots kept in a SQLite database.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn open(path: &Path) -> PickerResult<Self> {
        let conn = Connection::open(path)?;
        Self::new(conn)
    }

    pub fn new(conn: Connection) -> PickerResult<Self> {
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn updated_at(&self, key: &str) -> PickerResult<Option<DateTime<Utc>>> {
        slot_repo::updated_at(&self.conn, key)
    }
}

impl SlotStorage for SqliteStorage {
    fn get(&self, key: &str) -> PickerResult<Option<String>> {
        slot_repo::get(&self.conn, key)
    }

    fn set(&self, key: &str, value: &str) -> PickerResult<()> {
        slot_repo::set(&self.conn, key, value)
    }

    fn clear(&self, key: &str) -> PickerResult<()> {
        slot_repo::clear(&self.conn, key)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn get(&self, key: &str) -> PickerResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PickerResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> PickerResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn get(&self, key: &str) -> PickerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PickerResult<()> {
        (**self).set(key, value)
    }

    fn clear(&self, key: &str) -> PickerResult<()> {
        (**self).clear(key)
    }
}
