/// Scroll geometry of a scroll container, as read from the DOM.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    pub fn from_element(el: &web_sys::Element) -> Self {
        Self::new(
            f64::from(el.scroll_top()),
            f64::from(el.scroll_height()),
            f64::from(el.client_height()),
        )
    }

    pub fn is_past(self, threshold: f64) -> bool {
        self.scroll_top > threshold
    }

    /// Reading progress in percent, 0 at the top and 100 at the bottom.
    pub fn progress_percent(self) -> f64 {
        let range = self.scroll_height - self.client_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / range * 100.0).clamp(0.0, 100.0)
    }
}
