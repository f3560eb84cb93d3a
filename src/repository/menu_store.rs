//! Menu Store - Core Operations
//!
//! Sole authority over the persisted menu and suggestion collections.
//! Every mutation persists before returning and then emits a change
//! event, so callers never observe the in-memory view and the persisted
//! documents out of step. Export/import live in the transfer module.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::domain::{
    Category, DomainError, DomainResult, Entity, MenuItem, NewSuggestion, Review, Suggestion, Vote,
};

use super::seed;
use super::storage::{Storage, KEY_MENU_ITEMS, KEY_NEXT_ITEM_ID, KEY_SUGGESTIONS};

/// Startup seeding behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Seed the sample catalog only when no menu-item slot exists
    #[default]
    IfMissing,
    /// Wipe and re-seed on every open (demo reset)
    Always,
}

/// Change notification emitted after each successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    MenuItemsChanged,
    SuggestionsChanged,
}

/// The menu data store
pub struct MenuStore<S: Storage> {
    storage: S,
    events: broadcast::Sender<StoreEvent>,
}

impl<S: Storage> MenuStore<S> {
    /// Open the store over `storage`, seeding per `policy`
    pub async fn open(storage: S, policy: SeedPolicy) -> DomainResult<Self> {
        let (events, _) = broadcast::channel(16);
        let store = Self { storage, events };

        match policy {
            SeedPolicy::Always => {
                log::info!("re-seeding sample catalog on open");
                store.seed().await?;
            }
            SeedPolicy::IfMissing => {
                if store.storage.get(KEY_MENU_ITEMS).await?.is_none() {
                    log::info!("seeding sample catalog on first run");
                    store.seed().await?;
                }
            }
        }

        Ok(store)
    }

    /// Subscribe to change notifications
    ///
    /// The rendering layer re-renders on each event.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn notify(&self, event: StoreEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    async fn seed(&self) -> DomainResult<()> {
        let items = seed::sample_menu_items();
        self.save_menu_items(&items).await?;
        self.save_suggestions(&[]).await?;

        let next_id = items.iter().map(|item| item.id()).max().unwrap_or(0) + 1;
        self.storage
            .set(KEY_NEXT_ITEM_ID, &next_id.to_string())
            .await
    }

    /// Current menu-item collection; an absent slot reads as empty
    pub async fn menu_items(&self) -> DomainResult<Vec<MenuItem>> {
        self.read_collection(KEY_MENU_ITEMS).await
    }

    /// Current suggestion collection; an absent slot reads as empty
    pub async fn suggestions(&self) -> DomainResult<Vec<Suggestion>> {
        self.read_collection(KEY_SUGGESTIONS).await
    }

    /// Items in `category`, in catalog order
    pub async fn menu_items_by_category(&self, category: &Category) -> DomainResult<Vec<MenuItem>> {
        let items = self.menu_items().await?;
        Ok(items
            .into_iter()
            .filter(|item| &item.category == category)
            .collect())
    }

    /// Every review across the catalog, paired with its item
    pub async fn all_reviews(&self) -> DomainResult<Vec<(MenuItem, Review)>> {
        let mut reviews = Vec::new();
        for item in self.menu_items().await? {
            for review in &item.reviews {
                reviews.push((item.clone(), review.clone()));
            }
        }
        Ok(reviews)
    }

    /// Overwrite the persisted menu-item collection
    pub async fn save_menu_items(&self, items: &[MenuItem]) -> DomainResult<()> {
        self.write_collection(KEY_MENU_ITEMS, items).await?;
        self.notify(StoreEvent::MenuItemsChanged);
        Ok(())
    }

    /// Overwrite the persisted suggestion collection
    pub async fn save_suggestions(&self, suggestions: &[Suggestion]) -> DomainResult<()> {
        self.write_collection(KEY_SUGGESTIONS, suggestions).await?;
        self.notify(StoreEvent::SuggestionsChanged);
        Ok(())
    }

    /// Append a new suggestion
    ///
    /// The id is the submission timestamp in milliseconds, bumped past
    /// the last suggestion's id so two submissions in the same
    /// millisecond stay unique.
    pub async fn add_suggestion(&self, input: NewSuggestion) -> DomainResult<Suggestion> {
        input.validate()?;

        let mut suggestions = self.suggestions().await?;
        let now = Utc::now();
        let mut id = now.timestamp_millis();
        if let Some(last) = suggestions.last() {
            if id <= last.id() {
                id = last.id() + 1;
            }
        }

        let suggestion = Suggestion {
            id,
            kind: input.kind,
            title: input.title,
            details: input.details,
            image: input.image,
            date: now,
        };
        suggestions.push(suggestion.clone());
        self.save_suggestions(&suggestions).await?;

        Ok(suggestion)
    }

    /// Apply a vote to the item with `item_id`
    ///
    /// The counter is unbounded in both directions. Unknown ids are a
    /// silent no-op.
    pub async fn update_votes(&self, item_id: u64, vote: Vote) -> DomainResult<()> {
        let mut items = self.menu_items().await?;

        if let Some(item) = items.iter_mut().find(|item| item.id() == item_id) {
            item.votes += vote.delta();
        } else {
            log::debug!("vote against unknown item {}", item_id);
            return Ok(());
        }

        self.save_menu_items(&items).await
    }

    /// Append a review to the item with `item_id`
    ///
    /// Unknown ids are a silent no-op.
    pub async fn add_review(&self, item_id: u64, user: &str, comment: &str) -> DomainResult<()> {
        let mut items = self.menu_items().await?;

        if let Some(item) = items.iter_mut().find(|item| item.id() == item_id) {
            item.reviews.push(Review::new(user, comment));
        } else {
            log::debug!("review against unknown item {}", item_id);
            return Ok(());
        }

        self.save_menu_items(&items).await
    }

    /// Delete both collections and restore the sample catalog
    ///
    /// Destructive; callers must obtain explicit confirmation first.
    pub async fn clear_all(&self) -> DomainResult<()> {
        self.storage.remove(KEY_MENU_ITEMS).await?;
        self.storage.remove(KEY_SUGGESTIONS).await?;

        log::info!("cleared all data, restoring sample catalog");
        self.seed().await
    }

    async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Vec<T>> {
        match self.storage.get(key).await? {
            Some(text) => serde_json::from_str(&text)
                .map_err(|e| DomainError::Internal(format!("corrupt {} document: {}", key, e))),
            None => Ok(Vec::new()),
        }
    }

    async fn write_collection<T: Serialize + Sync>(
        &self,
        key: &str,
        values: &[T],
    ) -> DomainResult<()> {
        let text =
            serde_json::to_string(values).map_err(|e| DomainError::Internal(e.to_string()))?;
        self.storage.set(key, &text).await
    }
}
