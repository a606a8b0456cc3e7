//! Focus Tracker
//!
//! Which item the presentation layer should scroll into view.

use crate::domain::ItemId;
use crate::store::CollectionState;

/// The item being edited, otherwise the last item of the collection.
pub fn focus_target(state: &CollectionState) -> Option<ItemId> {
    state
        .editing_id()
        .or_else(|| state.items().last().map(|item| item.id))
}
