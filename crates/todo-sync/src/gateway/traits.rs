//! Remote Gateway - Core Trait
//!
//! The remote service is the single authority over the collection:
//! every mutation returns the confirmed entity (or nothing, for delete).

use async_trait::async_trait;

use crate::domain::{CompletionPatch, Draft, Item, ItemId};
use crate::error::SyncResult;

/// CRUD operations against a named resource collection
///
/// Futures are not `Send`: the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait RemoteGateway {
    /// Fetch the whole collection, in server order
    async fn list(&self) -> SyncResult<Vec<Item>>;

    /// Create an item; the service assigns the id
    async fn create(&self, draft: &Draft) -> SyncResult<Item>;

    /// Full replacement of title and description
    async fn replace(&self, id: ItemId, draft: &Draft) -> SyncResult<Item>;

    /// Partial update of the completion flag
    async fn patch(&self, id: ItemId, patch: CompletionPatch) -> SyncResult<Item>;

    /// Delete an item
    async fn delete(&self, id: ItemId) -> SyncResult<()>;
}
