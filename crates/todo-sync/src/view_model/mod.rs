//! Collection View-Model
//!
//! Keeps the local collection consistent with the remote authority.
//!
//! Writes are confirmed, never optimistic: the state only changes once the
//! gateway answers, and a failed call leaves the collection and the draft
//! exactly as they were. Failures are logged and swallowed here; nothing
//! reaches the presentation layer.
//!
//! Operations take `&self`, so several may be in flight at once. Each one
//! patches the state as it stands when its own response lands. Mutations of
//! the same item are not serialized: the response that lands last wins.

use crate::domain::{CompletionPatch, Draft, Item, ItemId};
use crate::focus::focus_target;
use crate::gateway::RemoteGateway;
use crate::partition::partition;
use crate::store::{CollectionState, StateCell};


#[derive(Debug, Clone)]
pub struct CollectionViewModel<G, S> {
    gateway: G,
    state: S,
}

impl<G, S> CollectionViewModel<G, S>
where
    G: RemoteGateway,
    S: StateCell,
{
    pub fn new(gateway: G, state: S) -> Self {
        Self { gateway, state }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    // ========================
    // Remote operations
    // ========================

    /// Replace the whole collection with the server's list.
    pub async fn load(&self) {
        match self.gateway.list().await {
            Ok(items) => {
                log::info!("[vm] loaded {} items", items.len());
                self.state.write(|s| s.replace_all(items));
            }
            Err(e) => log::error!("[vm] error fetching todos: {}", e),
        }
    }

    /// Create a new item, or replace the one being edited.
    ///
    /// The draft is expected to have passed `Draft::validate` already.
    pub async fn submit(&self, draft: Draft) {
        match self.state.read(CollectionState::editing_id) {
            Some(id) => self.submit_edit(id, draft).await,
            None => self.submit_new(draft).await,
        }
    }

    async fn submit_new(&self, draft: Draft) {
        match self.gateway.create(&draft).await {
            Ok(item) => {
                log::info!("[vm] created item {}", item.id);
                self.state.write(|s| {
                    s.append(item);
                    s.clear_draft();
                });
            }
            Err(e) => log::error!("[vm] error adding todo: {}", e),
        }
    }

    async fn submit_edit(&self, id: ItemId, draft: Draft) {
        match self.gateway.replace(id, &draft).await {
            Ok(item) => {
                let replaced = self.state.write(|s| {
                    let replaced = s.replace_item(id, item);
                    s.clear_edit();
                    replaced
                });
                if replaced {
                    log::info!("[vm] updated item {}", id);
                } else {
                    log::warn!("[vm] item {} left the collection before its update landed", id);
                }
            }
            Err(e) => log::error!("[vm] error updating todo {}: {}", id, e),
        }
    }

    /// Flip the completion flag of an existing item.
    pub async fn toggle_completion(&self, id: ItemId) {
        let Some(current) = self.state.read(|s| s.find(id).map(|item| item.completed)) else {
            log::warn!("[vm] toggle requested for unknown item {}", id);
            return;
        };

        let patch = CompletionPatch { completed: !current };
        match self.gateway.patch(id, patch).await {
            Ok(item) => {
                if self.state.write(|s| s.replace_item(id, item)) {
                    log::info!("[vm] item {} completed={}", id, patch.completed);
                } else {
                    log::warn!("[vm] item {} left the collection before its toggle landed", id);
                }
            }
            Err(e) => log::error!("[vm] error toggling todo {}: {}", id, e),
        }
    }

    pub async fn delete(&self, id: ItemId) {
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.state.write(|s| s.remove_item(id));
                log::info!("[vm] deleted item {}", id);
            }
            Err(e) => log::error!("[vm] error deleting todo {}: {}", id, e),
        }
    }

    // ========================
    // Local operations
    // ========================

    /// Load an item into the draft and mark it as being edited.
    pub fn begin_edit(&self, item: &Item) {
        self.state.write(|s| s.start_edit(item.clone()));
    }

    pub fn cancel_edit(&self) {
        self.state.write(CollectionState::clear_edit);
    }

    /// Form binding: keep the draft in step with the inputs.
    pub fn update_draft(&self, draft: Draft) {
        self.state.write(|s| s.set_draft(draft));
    }

    // ========================
    // Derived views
    // ========================

    /// Owned (active, completed) columns
    pub fn columns(&self) -> (Vec<Item>, Vec<Item>) {
        self.state.read(|s| partition(s.items()).into_owned())
    }

    pub fn focus_target(&self) -> Option<ItemId> {
        self.state.read(focus_target)
    }
}
