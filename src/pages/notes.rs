use leptos::task::spawn_local;

use leptos::html;
use leptos::prelude::*;

use super::skeleton;
use crate::catalog::{
    filter_and_sort, intro_path, list_categories, ArticleSummary, ManifestLoad, ALL_CATEGORY,
};
use crate::config::SiteConfig;
use crate::dom;
use crate::fetch::{self, InFlight};
use crate::progress::ScrollMetrics;
use crate::reader::{Loadable, NotesView, Reader};

fn category_glyph(category: &str) -> &'static str {
    let lower = category.to_lowercase();
    if lower.contains("web") {
        "💻"
    } else if lower.contains("power") || lower.contains("电力") {
        "⚡"
    } else if lower.contains("data") || lower.contains("数据库") {
        "🗄"
    } else if lower.contains("control") || lower.contains("控制") {
        "🎛"
    } else {
        "📚"
    }
}

fn document_view(body: &Loadable, article_ref: NodeRef<html::Article>, class: &'static str) -> AnyView {
    match body {
        Loadable::Loading => skeleton(4),
        Loadable::Ready(doc) => view! {
            <article node_ref=article_ref class=class inner_html=doc.html.clone()></article>
        }
        .into_any(),
        Loadable::Failed(message) => view! {
            <div class="load-error">"This note could not be loaded. " {message.clone()}</div>
        }
        .into_any(),
    }
}

fn article_view(article: &ArticleSummary, body: &Loadable, article_ref: NodeRef<html::Article>) -> AnyView {
    let length = body
        .document()
        .map(|doc| format!("{} chars", doc.char_count()));
    view! {
        <div class="article-view">
            <div class="article-header">
                <div class="article-badges">
                    <span class="badge">
                        {category_glyph(&article.category)} " " {article.category.clone()}
                    </span>
                    {article.starred.then(|| view! { <span class="badge featured">"★ Featured"</span> })}
                </div>
                <h1 class="article-title">{article.title.clone()}</h1>
                <div class="article-meta">
                    <span>"📅 " {article.date.clone()}</span>
                    {length.map(|length| view! { <span>"📄 " {length}</span> })}
                </div>
            </div>
            {document_view(body, article_ref, "prose")}
        </div>
    }
    .into_any()
}

#[component]
pub fn NotesPage(config: SiteConfig) -> impl IntoView {
    let header_threshold = config.notes_header_threshold;
    let config = StoredValue::new(config);

    let (summaries, set_summaries) = signal(Vec::<ArticleSummary>::new());
    let (manifest_loading, set_manifest_loading) = signal(true);
    let reader = RwSignal::new(Reader::default());
    let in_flight = StoredValue::new_local(InFlight::default());

    // Sticky header styling and reading progress
    let (header_scrolled, set_header_scrolled) = signal(false);
    let (progress, set_progress) = signal(0.0_f64);

    let content_ref = NodeRef::<html::Main>::new();
    let article_ref = NodeRef::<html::Article>::new();

    let active_category = Memo::new(move |_| reader.with(|r| r.category().to_string()));
    let categories = Memo::new(move |_| summaries.with(|s| list_categories(s)));
    let visible = Memo::new(move |_| {
        let category = active_category.get();
        summaries.with(|s| filter_and_sort(s, &category))
    });

    // Cancels the previous body/intro request and rewinds the reading position.
    let begin_load = move || {
        let mut abort = None;
        in_flight.update_value(|slot| abort = slot.restart());
        if let Some(el) = content_ref.get_untracked() {
            dom::scroll_to_top(&el);
        }
        set_progress.set(0.0);
        abort
    };

    let open_category = move |category: String| {
        let Some(ticket) = reader.try_update(|r| r.select_category(&category)) else {
            return;
        };
        let abort = begin_load();
        let url = config.with_value(|c| intro_path(c, &category));
        spawn_local(async move {
            let result = fetch::fetch_document(&url, abort.as_ref()).await;
            reader.maybe_update(|r| r.finish_intro(ticket, result));
        });
    };

    let open_article = move |article: ArticleSummary| {
        let url = config.with_value(|c| c.content_url(&article.filename));
        let Some(ticket) = reader.try_update(|r| r.select_article(article)) else {
            return;
        };
        let abort = begin_load();
        spawn_local(async move {
            let result = fetch::fetch_document(&url, abort.as_ref()).await;
            reader.maybe_update(|r| r.finish_body(ticket, result));
        });
    };

    Effect::new(move |_| {
        spawn_local(async move {
            let url = config.with_value(|c| c.manifest_url.clone());
            let load = ManifestLoad::from_result(fetch::fetch_json(&url, None).await);
            set_summaries.set(load.summaries);
            set_manifest_loading.set(false);
            open_category(load.initial_category);
        });
    });

    // Typeset math and highlight code whenever a new document lands.
    Effect::new(move |_| {
        reader.track();
        if let Some(el) = article_ref.get() {
            dom::enhance(&el);
        }
    });

    let on_content_scroll = move |ev: leptos::ev::Event| {
        let target: web_sys::Element = event_target(&ev);
        let metrics = ScrollMetrics::from_element(&target);
        let past = metrics.is_past(header_threshold);
        if header_scrolled.get_untracked() != past {
            set_header_scrolled.set(past);
        }
        set_progress.set(metrics.progress_percent());
    };

    let category_bar = move || {
        let active = active_category.get();
        categories
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, category)| {
                let class = if category == active { "category-tab active" } else { "category-tab" };
                let label = if category == ALL_CATEGORY {
                    "ALL".to_string()
                } else {
                    category.clone()
                };
                view! {
                    {(index > 0).then(|| view! { <span class="category-sep">"*"</span> })}
                    <button class=class on:click=move |_| open_category(category.clone())>
                        {label}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let outline_for = move |id: &str| {
        let entries = reader.with(|r| {
            if r.is_selected(id) && !r.outline().is_empty() {
                Some(r.outline().to_vec())
            } else {
                None
            }
        })?;
        Some(view! {
            <div class="outline">
                {entries
                    .into_iter()
                    .map(|entry| {
                        let label = entry.text.clone();
                        view! {
                            <button
                                class="outline-item"
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    if let Some(root) = content_ref.get_untracked() {
                                        dom::scroll_to_heading(&root, &entry.id, &entry.text);
                                    }
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        })
    };

    let article_list = move || {
        visible
            .get()
            .into_iter()
            .map(|article| {
                let id = article.id.clone();
                let outline_id = article.id.clone();
                let title = article.title.clone();
                let date = article.date.clone();
                let starred = article.starred;
                let is_selected = move || reader.with(|r| r.is_selected(&id));
                view! {
                    <div class="post-entry">
                        <div
                            class=move || if is_selected() { "post-item selected" } else { "post-item" }
                            on:click=move |_| open_article(article.clone())
                        >
                            <div class="post-title-row">
                                <h3 class="post-title">{title}</h3>
                                {starred.then(|| view! { <span class="post-star">"★"</span> })}
                            </div>
                            <div class="post-meta">"📅 " {date}</div>
                        </div>
                        {move || outline_for(&outline_id)}
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let main_view = move || {
        if manifest_loading.get() {
            return skeleton(4);
        }
        reader.with(|r| match r.view() {
            NotesView::Viewing { article, body } => article_view(article, body, article_ref),
            NotesView::Browsing { intro } => view! {
                <div class="category-intro">
                    <div class="intro-icon">"📖"</div>
                    {document_view(intro, article_ref, "prose intro-card")}
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <div class="notes-page" style="display: flex; flex-direction: column; height: calc(100vh - 4rem); overflow: hidden;">
            <div class={move || if header_scrolled.get() { "notes-header scrolled" } else { "notes-header" }}>
                <div class="reading-progress" style=move || format!("width: {:.1}%;", progress.get())></div>
                <div class="notes-header-row">
                    <div class="notes-badge">"NOTES"</div>
                    <div class="notes-divider"></div>
                    {category_bar}
                </div>
            </div>
            <div style="display: flex; flex: 1; overflow: hidden;">
                <aside class="post-list" style="width: 20rem; flex-shrink: 0; overflow-y: auto;">
                    <div class="post-list-header">
                        <span>"Contents"</span>
                        <span class="post-count">{move || visible.with(|v| v.len())}</span>
                    </div>
                    {article_list}
                </aside>
                <main
                    node_ref=content_ref
                    class="notes-content"
                    style="flex: 1; overflow-y: auto; scroll-behavior: smooth;"
                    on:scroll=on_content_scroll
                >
                    <div class="notes-content-inner" style="max-width: 56rem; margin: 0 auto; padding: 2rem;">
                        {main_view}
                    </div>
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_follows_category_keywords() {
        assert_eq!(category_glyph("Web 开发"), "💻");
        assert_eq!(category_glyph("电力系统"), "⚡");
        assert_eq!(category_glyph("Misc"), "📚");
    }
}
