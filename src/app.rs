use leptos::task::spawn_local;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::config::{SiteConfig, CONFIG_URL};
use crate::dom;
use crate::fetch;
use crate::pages::{DashboardPage, HomePage, MutterPage, NotesPage, Page};
use crate::ui_state::UiState;

#[component]
pub fn App() -> impl IntoView {
    let (config, set_config) = signal(None::<SiteConfig>);

    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = match fetch::fetch_document(CONFIG_URL, None).await {
                Ok(text) => SiteConfig::from_json(&text),
                Err(err) => {
                    leptos::logging::log!("using default site config: {err}");
                    SiteConfig::default()
                }
            };
            set_config.set(Some(loaded));
        });
    });

    view! {
        {move || match config.get() {
            Some(config) => view! { <Shell config=config/> }.into_any(),
            None => view! { <div class="boot-splash">"🐸"</div> }.into_any(),
        }}
    }
}

#[component]
fn Shell(config: SiteConfig) -> impl IntoView {
    let ui = UiState::provide(config.page_header_threshold);
    let config = StoredValue::new(config);
    let (page, set_page) = signal(Page::Home);

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        if let Some(metrics) = dom::window_scroll_metrics() {
            ui.record_scroll(metrics);
        }
    });
    let _ = window().add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();

    // Transparent header only while the hero image is on screen.
    let over_hero = move || page.get() == Page::Home && !ui.is_scrolled();

    let nav = move || {
        Page::ALL
            .into_iter()
            .map(|target| {
                let is_active = move || page.get() == target;
                view! {
                    <button
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                        on:click=move |_| {
                            set_page.set(target);
                            window().scroll_to_with_x_and_y(0.0, 0.0);
                        }
                    >
                        {target.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let current_page = move || {
        let config = config.get_value();
        match page.get() {
            Page::Home => view! { <HomePage config=config/> }.into_any(),
            Page::Notes => view! { <NotesPage config=config/> }.into_any(),
            Page::Mutter => view! { <MutterPage config=config/> }.into_any(),
            Page::Dashboard => view! { <DashboardPage/> }.into_any(),
        }
    };

    view! {
        <div class="app-layout" style="min-height: 100vh; display: flex; flex-direction: column;">
            <header class={move || if over_hero() { "site-header over-hero" } else { "site-header" }}>
                <div class="site-logo" on:click=move |_| set_page.set(Page::Home)>
                    {move || if over_hero() { "Jelly-Frog" } else { "🐸" }}
                </div>
                <nav class="site-nav">{nav}</nav>
            </header>
            <main class="site-main" style="flex: 1;">{current_page}</main>
            <footer class="site-footer">"Jelly-Frog · static notes and tools"</footer>
        </div>
    }
}
