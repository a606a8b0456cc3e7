//! Todo Form Component
//!
//! Title + description inputs. Creates a new todo, or saves the one
//! being edited.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{CollectionState, Draft, StateCell};

use crate::context::use_board;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_board();
    let store = ctx.store;

    let editing = move || store.read(CollectionState::is_editing);

    // Copy the current draft, apply one field change, hand it back
    let edit_draft = move |change: fn(&mut Draft, String), value: String| {
        let mut draft = store.read(|s| s.draft().clone());
        change(&mut draft, value);
        ctx.with_view_model(|vm| vm.update_draft(draft));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = store.read(|s| s.draft().clone());
        if let Err(e) = draft.validate() {
            log::warn!("[FORM] not submitting: {}", e);
            return;
        }
        let vm = ctx.view_model();
        spawn_local(async move {
            vm.submit(draft).await;
        });
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                class="input"
                placeholder="Task"
                required
                prop:value=move || store.read(|s| s.draft().title.clone())
                on:input=move |ev| edit_draft(|d, v| d.title = v, event_target_value(&ev))
            />
            <input
                type="text"
                class="input"
                placeholder="Description"
                required
                prop:value=move || store.read(|s| s.draft().description.clone())
                on:input=move |ev| edit_draft(|d, v| d.description = v, event_target_value(&ev))
            />
            <button class="btn" type="submit">
                {move || if editing() { "Edit Todo" } else { "Add Todo" }}
            </button>
            <Show when=editing>
                <button
                    class="btn"
                    type="button"
                    on:click=move |_| ctx.with_view_model(|vm| vm.cancel_edit())
                >
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
