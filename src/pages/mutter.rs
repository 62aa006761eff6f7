use leptos::task::spawn_local;

use leptos::prelude::*;

use super::skeleton;
use crate::config::SiteConfig;
use crate::fetch;
use crate::mutter::{self, Mutter};

#[component]
pub fn MutterPage(config: SiteConfig) -> impl IntoView {
    let url = StoredValue::new(config.mutters_url);
    let (feed, set_feed) = signal(Vec::<Mutter>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = fetch::fetch_json(&url.get_value(), None).await;
            set_feed.set(mutter::from_result(result));
            set_loading.set(false);
        });
    });

    let entries = move || {
        if loading.get() {
            return skeleton(3);
        }
        let feed = feed.get();
        if feed.is_empty() {
            return view! { <p class="mutter-empty">"Nothing muttered yet."</p> }.into_any();
        }
        feed.into_iter()
            .map(|entry| {
                view! {
                    <div class="mutter-card">
                        <p class="mutter-text">{entry.text}</p>
                        <div class="mutter-meta" style="display: flex; justify-content: space-between;">
                            <span>{entry.date}</span>
                            <span>{format!("{} comments", entry.comments)}</span>
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="mutter-page" style="max-width: 42rem; margin: 0 auto; padding: 2rem 0;">
            <h1>"Mutterings"</h1>
            <div class="mutter-feed" style="display: flex; flex-direction: column; gap: 1.5rem;">
                {entries}
            </div>
        </div>
    }
}
