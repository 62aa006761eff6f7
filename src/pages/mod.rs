use leptos::prelude::*;

mod dashboard;
mod home;
mod mutter;
mod notes;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use mutter::MutterPage;
pub use notes::NotesPage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Notes,
    Mutter,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Notes, Page::Mutter, Page::Dashboard];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Tools",
            Page::Notes => "Notes",
            Page::Mutter => "Mutter",
            Page::Dashboard => "Me",
        }
    }
}

/// Grey placeholder bars shown while a document is on its way.
fn skeleton(lines: usize) -> AnyView {
    let widths = ["75%", "100%", "83%", "66%"];
    view! {
        <div class="skeleton">
            {(0..lines)
                .map(|i| {
                    let width = widths[i % widths.len()];
                    view! { <div class="skeleton-line" style=format!("width: {width};")></div> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
