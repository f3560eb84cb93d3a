//! Campus Eats Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Storage capability and the menu data store
//! - media: Image upload validation and encoding
//!
//! The rendering layer is an external collaborator: it reads snapshots
//! through the store's accessors, calls mutation operations in response
//! to user actions, and re-renders when the store signals a change.

pub mod domain;
pub mod media;
pub mod repository;

pub use domain::{
    Category, DomainError, DomainResult, MenuItem, NewSuggestion, Review, Suggestion, Vote,
};
pub use repository::{
    DataTransfer, ExportDocument, MemoryStorage, MenuStore, SeedPolicy, SqliteStorage, Storage,
    StoreEvent, EXPORT_FILE_NAME,
};
