//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The collection itself is only ever written by the view-model.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{CollectionState, StateCell};

/// Reactive root of the board
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Items, draft and edit slot
    pub collection: CollectionState,
}

/// Copyable handle the view-model writes through
#[derive(Clone, Copy)]
pub struct BoardStore(Store<BoardState>);

impl BoardStore {
    pub fn new() -> Self {
        Self(Store::new(BoardState::default()))
    }
}

impl StateCell for BoardStore {
    fn read<R>(&self, f: impl FnOnce(&CollectionState) -> R) -> R {
        f(&self.0.collection().read())
    }

    fn write<R>(&self, f: impl FnOnce(&mut CollectionState) -> R) -> R {
        f(&mut self.0.collection().write())
    }
}
