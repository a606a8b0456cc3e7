//! Local Store
//!
//! Explicit state container mirroring the last confirmed server state,
//! plus the form draft and the single "being edited" slot.
//!
//! Fields are private and the mutators are crate-private: only the
//! view-model operations change a `CollectionState`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{Draft, Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionState {
    items: Vec<Item>,
    draft: Draft,
    editing: Option<Item>,
}

impl CollectionState {
    /// Items in collection order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The item the draft will replace on submit, if any
    pub fn editing(&self) -> Option<&Item> {
        self.editing.as_ref()
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        self.editing.as_ref().map(|item| item.id)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================
    // Mutators
    // ========================

    pub(crate) fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub(crate) fn append(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Replace the entry whose id is `id` in place. Returns false if absent.
    pub(crate) fn replace_item(&mut self, id: ItemId, updated: Item) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the given id. Returns false if absent.
    pub(crate) fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub(crate) fn set_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    pub(crate) fn start_edit(&mut self, item: Item) {
        self.draft = Draft::from_item(&item);
        self.editing = Some(item);
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft = Draft::default();
    }

    pub(crate) fn clear_edit(&mut self) {
        self.draft = Draft::default();
        self.editing = None;
    }
}

/// Shared handle to a `CollectionState`
///
/// Implemented by whatever owns the state: a plain `Rc<RefCell<_>>`
/// natively, a reactive store in the UI. Closures must not hold the
/// borrow across an `.await`.
pub trait StateCell {
    fn read<R>(&self, f: impl FnOnce(&CollectionState) -> R) -> R;

    fn write<R>(&self, f: impl FnOnce(&mut CollectionState) -> R) -> R;
}

impl StateCell for Rc<RefCell<CollectionState>> {
    fn read<R>(&self, f: impl FnOnce(&CollectionState) -> R) -> R {
        f(&self.borrow())
    }

    fn write<R>(&self, f: impl FnOnce(&mut CollectionState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
