use crate::catalog::{placeholder_intro, ArticleSummary, ALL_CATEGORY};
use crate::error::FetchError;
use crate::outline::{extract_outline, OutlineEntry};
use crate::render::render_markdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

// Only the most recent ticket is current.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadTracker {
    latest: u64,
}

impl LoadTracker {
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub html: String,
    pub outline: Vec<OutlineEntry>,
}

impl Document {
    pub fn new(text: String) -> Self {
        Self {
            html: render_markdown(&text),
            outline: extract_outline(&text),
            text,
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loadable {
    Loading,
    Ready(Document),
    Failed(String),
}

impl Loadable {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            Loadable::Ready(doc) => Some(doc),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotesView {
    Browsing { intro: Loadable },
    Viewing { article: ArticleSummary, body: Loadable },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reader {
    category: String,
    view: NotesView,
    loads: LoadTracker,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new(ALL_CATEGORY)
    }
}

impl Reader {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            view: NotesView::Browsing {
                intro: Loadable::Loading,
            },
            loads: LoadTracker::default(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn view(&self) -> &NotesView {
        &self.view
    }

    pub fn selected(&self) -> Option<&ArticleSummary> {
        match &self.view {
            NotesView::Viewing { article, .. } => Some(article),
            NotesView::Browsing { .. } => None,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected().is_some_and(|article| article.id == id)
    }

    pub fn outline(&self) -> &[OutlineEntry] {
        match &self.view {
            NotesView::Viewing { body, .. } => body
                .document()
                .map(|doc| doc.outline.as_slice())
                .unwrap_or_default(),
            NotesView::Browsing { .. } => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        match &self.view {
            NotesView::Browsing { intro } => intro.is_loading(),
            NotesView::Viewing { body, .. } => body.is_loading(),
        }
    }

    pub fn select_category(&mut self, category: &str) -> LoadTicket {
        self.category = category.to_string();
        self.view = NotesView::Browsing {
            intro: Loadable::Loading,
        };
        self.loads.begin()
    }

    pub fn select_article(&mut self, article: ArticleSummary) -> LoadTicket {
        self.view = NotesView::Viewing {
            article,
            body: Loadable::Loading,
        };
        self.loads.begin()
    }

    /// Returns whether anything changed. A missing intro becomes the placeholder.
    pub fn finish_intro(&mut self, ticket: LoadTicket, result: Result<String, FetchError>) -> bool {
        if !self.loads.is_current(ticket) {
            return false;
        }
        let NotesView::Browsing { intro } = &mut self.view else {
            return false;
        };
        let text = match result {
            Ok(text) => text,
            Err(FetchError::Aborted) => return false,
            Err(err) => {
                leptos::logging::log!("no introduction for {}: {err}", self.category);
                placeholder_intro(&self.category)
            }
        };
        *intro = Loadable::Ready(Document::new(text));
        true
    }

    pub fn finish_body(&mut self, ticket: LoadTicket, result: Result<String, FetchError>) -> bool {
        if !self.loads.is_current(ticket) {
            return false;
        }
        let NotesView::Viewing { article, body } = &mut self.view else {
            return false;
        };
        *body = match result {
            Ok(text) => Loadable::Ready(Document::new(text)),
            Err(FetchError::Aborted) => return false,
            Err(err) => {
                leptos::logging::error!("failed to load {}: {err}", article.filename);
                Loadable::Failed(err.to_string())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str) -> ArticleSummary {
        ArticleSummary {
            id: id.to_string(),
            title: format!("Title {id}"),
            date: "2025-12-26".to_string(),
            category: "Control".to_string(),
            filename: format!("{id}.md"),
            summary: String::new(),
            starred: false,
        }
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin();
        assert!(tracker.is_current(first));
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn selecting_article_replaces_introduction() {
        let mut reader = Reader::new("Control");
        let intro = reader.select_category("Control");
        assert!(reader.finish_intro(intro, Ok("# Control\n".into())));

        let ticket = reader.select_article(article("kalman"));
        assert!(reader.is_selected("kalman"));
        assert!(reader.is_loading());
        assert!(matches!(reader.view(), NotesView::Viewing { .. }));

        assert!(reader.finish_body(ticket, Ok("# Intro\nbody\n# Setup\n".into())));
        let ids: Vec<&str> = reader.outline().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "setup"]);
    }

    #[test]
    fn selecting_category_clears_selection() {
        let mut reader = Reader::new("Control");
        let ticket = reader.select_article(article("kalman"));
        reader.finish_body(ticket, Ok("# Intro\n".into()));

        reader.select_category("Power");
        assert_eq!(reader.category(), "Power");
        assert!(reader.selected().is_none());
        assert!(reader.outline().is_empty());
        assert_eq!(
            reader.view(),
            &NotesView::Browsing {
                intro: Loadable::Loading
            }
        );
    }

    #[test]
    fn superseded_body_is_dropped() {
        let mut reader = Reader::new("Control");
        let slow = reader.select_article(article("slow"));
        let fast = reader.select_article(article("fast"));

        assert!(reader.finish_body(fast, Ok("# Fast\n".into())));
        assert!(!reader.finish_body(slow, Ok("# Slow\n".into())));
        assert!(reader.is_selected("fast"));
        assert_eq!(reader.outline()[0].text, "Fast");
    }

    #[test]
    fn intro_result_after_article_selection_is_dropped() {
        let mut reader = Reader::new("Control");
        let intro = reader.select_category("Control");
        reader.select_article(article("kalman"));
        assert!(!reader.finish_intro(intro, Ok("# Control\n".into())));
        assert!(reader.is_selected("kalman"));
    }

    #[test]
    fn missing_intro_becomes_placeholder() {
        let mut reader = Reader::new("All");
        let ticket = reader.select_category("Web 开发");
        let missing = FetchError::UnexpectedHtml {
            url: "/posts/intro-web-开发.md".into(),
        };
        assert!(reader.finish_intro(ticket, Err(missing)));
        let NotesView::Browsing {
            intro: Loadable::Ready(doc),
        } = reader.view()
        else {
            panic!("expected a ready introduction");
        };
        assert!(doc.text.starts_with("# Web 开发"));
        assert!(!reader.is_loading());
    }

    #[test]
    fn failed_body_is_visible_and_has_no_outline() {
        let mut reader = Reader::new("Control");
        let ticket = reader.select_article(article("gone"));
        let err = FetchError::Status {
            url: "/posts/gone.md".into(),
            status: 404,
        };
        assert!(reader.finish_body(ticket, Err(err)));
        assert!(reader.outline().is_empty());
        assert!(matches!(
            reader.view(),
            NotesView::Viewing {
                body: Loadable::Failed(_),
                ..
            }
        ));
    }

    #[test]
    fn aborted_load_leaves_state_untouched() {
        let mut reader = Reader::new("Control");
        let ticket = reader.select_article(article("kalman"));
        assert!(!reader.finish_body(ticket, Err(FetchError::Aborted)));
        assert!(reader.is_loading());
    }
}
