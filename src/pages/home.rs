use leptos::task::spawn_local;

use leptos::prelude::*;

use super::skeleton;
use crate::config::SiteConfig;
use crate::converter::{BaseFields, Radix};
use crate::dom;
use crate::fetch;
use crate::quote::Quote;
use crate::search::{find_engine, ENGINES};
use crate::shelf::{Shelf, Tool};
use crate::todo::TodoList;
use crate::ui_state::UiState;

#[component]
fn SearchBox(default_engine: String) -> impl IntoView {
    let (engine, set_engine) = signal(find_engine(&default_engine));
    let (query, set_query) = signal(String::new());

    let submit = move || {
        if let Some(url) = engine.get_untracked().url_for(&query.get_untracked()) {
            dom::open_in_new_tab(&url);
        }
    };

    view! {
        <div class="search-box">
            <h2 class="search-title">"Explore the sea of knowledge"</h2>
            <div class="search-row" style="display: flex; gap: 0.5rem;">
                <select
                    class="search-engine"
                    on:change=move |ev| set_engine.set(find_engine(&event_target_value(&ev)))
                >
                    {ENGINES
                        .iter()
                        .map(|candidate| {
                            let name = candidate.name;
                            view! {
                                <option value=name selected={move || engine.get().name == name}>
                                    {name}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="search-input"
                    type="text"
                    style="flex: 1;"
                    placeholder=move || format!("Search with {}...", engine.get().name)
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button class="search-button" on:click=move |_| submit()>"Search"</button>
            </div>
        </div>
    }
}

#[component]
fn BaseConverter() -> impl IntoView {
    let fields = RwSignal::new(BaseFields::default());

    view! {
        <div class="converter-grid" style="display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem;">
            {Radix::ALL
                .into_iter()
                .map(|radix| {
                    view! {
                        <label class="converter-field" style="display: flex; flex-direction: column; gap: 0.25rem;">
                            <span>{radix.label()}</span>
                            <input
                                type="text"
                                placeholder=radix.placeholder()
                                prop:value=move || fields.with(|f| f.get(radix).to_string())
                                on:input=move |ev| {
                                    let input = event_target_value(&ev);
                                    fields.update(|f| f.edit(radix, &input));
                                }
                            />
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn TodoWidget() -> impl IntoView {
    let todos = RwSignal::new(TodoList::with_items([
        ("Review control theory, chapter 3", false),
        ("Update the personal site", true),
        ("Read one IEEE paper", false),
    ]));
    let (draft, set_draft) = signal(String::new());

    let add = move || {
        let text = draft.get_untracked();
        let mut added = false;
        todos.update(|list| added = list.add(&text).is_some());
        if added {
            set_draft.set(String::new());
        }
    };

    let items = move || {
        todos.with(|list| {
            if list.items().is_empty() {
                return view! { <div class="todo-empty">"Nothing left to do. Enjoy the day! 🎉"</div> }
                    .into_any();
            }
            list.items()
                .iter()
                .map(|item| {
                    let id = item.id;
                    view! {
                        <div class="todo-item" style="display: flex; align-items: center; gap: 0.75rem;">
                            <input
                                type="checkbox"
                                prop:checked={item.completed}
                                on:change=move |_| todos.update(|list| list.toggle(id))
                            />
                            <span class={if item.completed { "todo-text done" } else { "todo-text" }}>
                                {item.text.clone()}
                            </span>
                            <button class="todo-delete" on:click=move |_| todos.update(|list| list.remove(id))>
                                "🗑"
                            </button>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        })
    };

    view! {
        <div class="todo-widget">
            <div class="todo-summary" style="display: flex; justify-content: space-between;">
                <span>"Progress"</span>
                <span>
                    {move || todos.with(|list| format!("{} / {}", list.completed_count(), list.items().len()))}
                </span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {:.0}%;", todos.with(|list| list.progress_percent()))
                ></div>
            </div>
            <div class="todo-list">{items}</div>
            <div class="todo-add" style="display: flex; gap: 0.5rem;">
                <input
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add();
                        }
                    }
                />
                <button on:click=move |_| add()>"+"</button>
            </div>
        </div>
    }
}

#[component]
fn QuoteWidget(url: String) -> impl IntoView {
    let url = StoredValue::new(url);
    let (quote, set_quote) = signal(None::<Quote>);
    let (loading, set_loading) = signal(true);
    let (failed, set_failed) = signal(false);

    let refresh = move || {
        set_loading.set(true);
        set_failed.set(false);
        spawn_local(async move {
            match fetch::fetch_json::<Quote>(&url.get_value(), None).await {
                Ok(next) => set_quote.set(Some(next)),
                Err(err) => {
                    leptos::logging::error!("failed to fetch quote: {err}");
                    set_failed.set(true);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| refresh());

    let body = move || {
        if loading.get() {
            return skeleton(3);
        }
        if failed.get() {
            return view! { <p class="quote-error">"The box is empty, try again later..."</p> }.into_any();
        }
        match quote.get() {
            Some(quote) => view! {
                <div class="quote">
                    <blockquote>{format!("\u{201c}{}\u{201d}", quote.hitokoto)}</blockquote>
                    <p class="quote-by">"—— " {quote.attribution().to_string()}</p>
                    {quote.source().map(|work| view! { <p class="quote-source">{format!("《{work}》")}</p> })}
                </div>
            }
            .into_any(),
            None => skeleton(3),
        }
    };

    view! {
        <div class="quote-widget">
            <button
                class="quote-refresh"
                title="Another one"
                disabled=move || loading.get()
                on:click=move |_| refresh()
            >
                "↻"
            </button>
            {body}
        </div>
    }
}

#[component]
pub fn HomePage(config: SiteConfig) -> impl IntoView {
    let ui = UiState::from_context();
    let shelf = RwSignal::new(Shelf::default());
    let quote_url = StoredValue::new(config.quote_url.clone());

    let tool_body = move |tool: Tool| match tool {
        Tool::BaseConverter => view! { <BaseConverter/> }.into_any(),
        Tool::Todo => view! { <TodoWidget/> }.into_any(),
        Tool::Quote => view! { <QuoteWidget url=quote_url.get_value()/> }.into_any(),
    };

    let tools = move || {
        let order = shelf.with(|s| s.order().to_vec());
        let last = order.len().saturating_sub(1);
        order
            .into_iter()
            .enumerate()
            .map(|(index, tool)| {
                let expanded = move || shelf.with(|s| s.is_expanded(tool));
                view! {
                    <section class="tool-card">
                        <div class="tool-card-header" style="display: flex; justify-content: space-between; align-items: center;">
                            <div class="tool-heading" on:click=move |_| shelf.update(|s| s.toggle(tool))>
                                <h3>{tool.title()}</h3>
                                <p class="tool-description">{tool.description()}</p>
                            </div>
                            <div class="tool-order">
                                <button disabled={index == 0} on:click=move |_| shelf.update(|s| s.move_up(index))>
                                    "↑"
                                </button>
                                <button disabled={index == last} on:click=move |_| shelf.update(|s| s.move_down(index))>
                                    "↓"
                                </button>
                            </div>
                        </div>
                        {move || expanded().then(|| tool_body(tool))}
                    </section>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="home-page">
            <div class="hero" style="position: relative; height: 100vh; margin-top: -4rem;">
                <div class="hero-center" style="height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center;">
                    {move || (!ui.is_scrolled()).then(|| view! {
                        <img class="hero-avatar" src="/avatar.png" alt="avatar"/>
                    })}
                    <h1 class="hero-title">"Welcome to MySpace"</h1>
                    <div class="hero-scroll-hint">"⌄"</div>
                </div>
            </div>
            <div class="home-content" style="max-width: 48rem; margin: 0 auto; padding-bottom: 4rem;">
                <SearchBox default_engine=config.default_engine.clone()/>
                <h2 class="tools-title">"🛠️ Handy tools"</h2>
                <div class="tool-list" style="display: grid; gap: 1.5rem;">{tools}</div>
            </div>
        </div>
    }
}
