//! Repository Layer
//!
//! Data access: the key-value storage capability, its backends, and the
//! menu data store built on top.

mod memory;
mod menu_store;
mod seed;
mod sqlite;
mod storage;
mod transfer;


pub use memory::MemoryStorage;
pub use menu_store::{MenuStore, SeedPolicy, StoreEvent};
pub use seed::sample_menu_items;
pub use sqlite::SqliteStorage;
pub use storage::{Storage, KEY_MENU_ITEMS, KEY_NEXT_ITEM_ID, KEY_SUGGESTIONS};
pub use transfer::{DataTransfer, ExportDocument, EXPORT_FILE_NAME};
