use leptos::prelude::*;

use crate::progress::ScrollMetrics;

// `record_scroll` is the only writer.
#[derive(Clone, Copy)]
pub struct UiState {
    scrolled: ReadSignal<bool>,
    set_scrolled: WriteSignal<bool>,
    threshold: f64,
}

impl UiState {
    pub fn new(threshold: f64) -> Self {
        let (scrolled, set_scrolled) = signal(false);
        Self {
            scrolled,
            set_scrolled,
            threshold,
        }
    }

    pub fn provide(threshold: f64) -> Self {
        let state = Self::new(threshold);
        provide_context(state);
        state
    }

    pub fn from_context() -> Self {
        expect_context::<UiState>()
    }

    pub fn record_scroll(&self, metrics: ScrollMetrics) {
        let past = metrics.is_past(self.threshold);
        if self.scrolled.get_untracked() != past {
            self.set_scrolled.set(past);
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    pub fn scrolled(&self) -> ReadSignal<bool> {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_flag_follows_threshold() {
        let owner = Owner::new();
        owner.with(|| {
            let ui = UiState::new(200.0);
            ui.record_scroll(ScrollMetrics::new(150.0, 3000.0, 800.0));
            assert!(!ui.scrolled().get_untracked());
            ui.record_scroll(ScrollMetrics::new(250.0, 3000.0, 800.0));
            assert!(ui.scrolled().get_untracked());
            ui.record_scroll(ScrollMetrics::new(0.0, 3000.0, 800.0));
            assert!(!ui.scrolled().get_untracked());
        });
    }
}
