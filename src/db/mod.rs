pub mod schema;
pub mod slot_repo;
pub mod storage;
pub mod snapshot_repo;

pub use snapshot_repo::{SnapshotStore, DEFAULT_SLOT};
pub use storage::{MemoryStorage, SlotStorage, SqliteStorage};
