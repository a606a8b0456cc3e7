//! Todo Board Frontend Entry Point

mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

/// Verbose in debug builds, `Info` in release
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log_level());
    mount_to_body(App);
}
