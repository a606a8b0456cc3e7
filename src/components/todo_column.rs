//! Todo Column Component
//!
//! One of the two partitions of the board.

use leptos::prelude::*;
use todo_sync::{partition, Item, StateCell};

use super::TodoCard;
use crate::context::use_board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Active,
    Completed,
}

impl Column {
    pub fn title(self) -> &'static str {
        match self {
            Column::Active => "Tasks",
            Column::Completed => "Completed Tasks",
        }
    }

    /// This column's share of the collection, in collection order
    pub fn select(self, items: &[Item]) -> Vec<Item> {
        let parts = partition(items);
        let picked = match self {
            Column::Active => parts.active,
            Column::Completed => parts.completed,
        };
        picked.into_iter().cloned().collect()
    }
}

#[component]
pub fn TodoColumn(column: Column) -> impl IntoView {
    let store = use_board().store;
    let items = move || store.read(|s| column.select(s.items()));

    view! {
        <div class="todo-column">
            <h2 class="column-title">{column.title()}</h2>
            <div class="divider"></div>
            {move || {
                items()
                    .into_iter()
                    .map(|item| view! { <TodoCard item=item /> })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_picks_matching_items() {
        let items = vec![
            Item::new(1, "A", "a"),
            Item::new(2, "B", "b").with_completed(true),
            Item::new(3, "C", "c"),
        ];

        let active: Vec<u64> = Column::Active.select(&items).iter().map(|i| i.id.0).collect();
        let completed: Vec<u64> = Column::Completed.select(&items).iter().map(|i| i.id.0).collect();

        assert_eq!(active, vec![1, 3]);
        assert_eq!(completed, vec![2]);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Column::Active.title(), "Tasks");
        assert_eq!(Column::Completed.title(), "Completed Tasks");
    }
}
