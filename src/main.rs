mod app;
mod catalog;
mod config;
mod converter;
mod dom;
mod error;
mod fetch;
mod mutter;
mod outline;
mod pages;
mod progress;
mod quote;
mod reader;
mod render;
mod search;
mod shelf;
mod todo;
mod ui_state;

use app::*;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        view! { <App/> }
    })
}
