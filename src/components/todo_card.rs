//! Todo Card Component
//!
//! A single todo with Edit, Delete and completion toggle actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{Item, ItemId, StateCell};

use crate::context::use_board;

/// DOM id of a card, used to scroll it into view
pub fn card_dom_id(id: ItemId) -> String {
    format!("todo-{}", id)
}

fn toggle_label(completed: bool) -> &'static str {
    if completed {
        "Mark as not Completed"
    } else {
        "Mark as Completed"
    }
}

#[component]
pub fn TodoCard(item: Item) -> impl IntoView {
    let ctx = use_board();
    let store = ctx.store;

    let id = item.id;
    let title = item.title.clone();
    let label = toggle_label(item.completed);

    view! {
        <div
            id=card_dom_id(id)
            class=move || {
                if store.read(|s| s.editing_id()) == Some(id) {
                    "todo-card editing"
                } else {
                    "todo-card"
                }
            }
        >
            <div class="card-body">
                <h2 class="card-title">{title}</h2>
                <div class="card-actions">
                    <button
                        class="btn"
                        on:click=move |_| ctx.with_view_model(|vm| vm.begin_edit(&item))
                    >
                        "Edit"
                    </button>
                    <button class="btn" on:click=move |_| {
                        let vm = ctx.view_model();
                        spawn_local(async move {
                            vm.delete(id).await;
                        });
                    }>
                        "Delete"
                    </button>
                    <button class="btn" on:click=move |_| {
                        let vm = ctx.view_model();
                        spawn_local(async move {
                            vm.toggle_completion(id).await;
                        });
                    }>
                        {label}
                    </button>
                </div>
            </div>
        </div>
    }
}
