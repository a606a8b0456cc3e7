//! Todo Board App
//!
//! Form on top, "Tasks" and "Completed Tasks" columns below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{
    focus_target, CollectionViewModel, GatewayConfig, HttpGateway, Item, ItemId, StateCell,
};

use crate::components::{card_dom_id, Column, TodoColumn, TodoForm};
use crate::context::BoardContext;
use crate::store::BoardStore;

#[component]
pub fn App() -> impl IntoView {
    let store = BoardStore::new();

    let config = GatewayConfig::from_build_env();
    let gateway = match HttpGateway::new(config) {
        Ok(gateway) => gateway,
        Err(e) => {
            log::error!("[APP] invalid gateway config: {}", e);
            return view! { <p class="config-error">{e.to_string()}</p> }.into_any();
        }
    };
    log::info!("[APP] using {}", gateway.config().collection_url());

    let ctx = BoardContext::new(store, CollectionViewModel::new(gateway, store));
    provide_context(ctx);

    // Initial fetch, once per mount
    Effect::new(move |_| {
        let vm = ctx.view_model();
        spawn_local(async move {
            vm.load().await;
        });
    });

    // Re-evaluated on item changes only, not on draft keystrokes
    let attention = Memo::new(move |_| store.read(|s| (focus_target(s), s.items().to_vec())));
    Effect::new(move |_| {
        let (target, _items): (Option<ItemId>, Vec<Item>) = attention.get();
        if let Some(id) = target {
            scroll_card_into_view(id);
        }
    });

    view! {
        <div class="container">
            <h1 class="board-title">"Todo List"</h1>

            <TodoForm />

            <div class="board-columns">
                <TodoColumn column=Column::Active />
                <TodoColumn column=Column::Completed />
            </div>
        </div>
    }
    .into_any()
}

fn scroll_card_into_view(id: ItemId) {
    let Some(element) = document().get_element_by_id(&card_dom_id(id)) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
