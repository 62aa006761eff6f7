use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::progress::ScrollMetrics;

// KaTeX and highlight.js are loaded from index.html. Either may be missing
// (offline, blocked CDN); the calls then throw and the plain markup stays.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = katex, js_name = render)]
    fn katex_render(tex: &str, element: &Element, options: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = hljs, js_name = highlightElement)]
    fn hljs_highlight_element(element: &Element) -> Result<(), JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KatexOptions {
    display_mode: bool,
    throw_on_error: bool,
}

fn elements(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Typesets math and highlights tagged code blocks under `root`.
pub fn enhance(root: &Element) {
    for el in elements(root, "span.math") {
        let tex = el.text_content().unwrap_or_default();
        let options = KatexOptions {
            display_mode: el.class_name().contains("math-display"),
            throw_on_error: false,
        };
        let options = serde_wasm_bindgen::to_value(&options).unwrap_or(JsValue::UNDEFINED);
        if let Err(err) = katex_render(&tex, &el, options) {
            leptos::logging::warn!("KaTeX unavailable, leaving math as source: {err:?}");
            break;
        }
    }

    for el in elements(root, "pre code[class*=\"language-\"]") {
        if let Err(err) = hljs_highlight_element(&el) {
            leptos::logging::warn!("highlight.js unavailable: {err:?}");
            break;
        }
    }
}

/// Falls back to the first heading whose text contains `text`.
pub fn scroll_to_heading(root: &Element, id: &str, text: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .or_else(|| {
            elements(root, "h1, h2, h3")
                .into_iter()
                .find(|el| el.text_content().is_some_and(|t| t.contains(text)))
        });

    if let Some(el) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn window_scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let scroll_top = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some(ScrollMetrics::new(
        scroll_top,
        f64::from(root.scroll_height()),
        viewport,
    ))
}

pub fn scroll_to_top(el: &Element) {
    el.set_scroll_top(0);
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        leptos::logging::error!("failed to open {url}: {err:?}");
    }
}
