//! Storage Layer - Key-Value Capability
//!
//! The store depends on an injected key-value capability rather than an
//! ambient singleton, so tests can run isolated instances in parallel.
//! Values are JSON text; absence of a key reads as `None`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Slot holding the serialized menu-item collection
pub const KEY_MENU_ITEMS: &str = "menuItems";
/// Slot holding the serialized suggestion collection
pub const KEY_SUGGESTIONS: &str = "suggestions";
/// Informational next-id counter; written at seed time, never read back
pub const KEY_NEXT_ITEM_ID: &str = "nextItemId";

/// String-keyed key-value storage
///
/// All operations are async to support various backends.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the value under `key`, if any
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete `key` if present
    async fn remove(&self, key: &str) -> DomainResult<()>;
}

#[async_trait]
impl<S: Storage + ?Sized> Storage for Arc<S> {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        (**self).remove(key).await
    }
}
