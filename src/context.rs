//! Board Context
//!
//! Store and view-model shared with every component via Leptos Context API.

use leptos::prelude::*;
use todo_sync::{CollectionViewModel, HttpGateway};

use crate::store::BoardStore;

pub type BoardViewModel = CollectionViewModel<HttpGateway, BoardStore>;

#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Reactive state; read it to subscribe
    pub store: BoardStore,
    view_model: StoredValue<BoardViewModel>,
}

impl BoardContext {
    pub fn new(store: BoardStore, view_model: BoardViewModel) -> Self {
        Self {
            store,
            view_model: StoredValue::new(view_model),
        }
    }

    /// Owned view-model for moving into a spawned task
    pub fn view_model(&self) -> BoardViewModel {
        self.view_model.get_value()
    }

    /// Run a local (synchronous) view-model operation
    pub fn with_view_model<R>(&self, f: impl FnOnce(&BoardViewModel) -> R) -> R {
        self.view_model.with_value(f)
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
