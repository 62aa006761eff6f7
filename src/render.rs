use std::ops::Range;

use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::outline::{heading_id, outline_entry};

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_MATH
}

// Raw HTML is escaped, math becomes `.math` markup for KaTeX, and headings
// get the same ids the outline computes.
pub fn render_markdown(text: &str) -> String {
    let mut events: Vec<(Event, Range<usize>)> = Parser::new_ext(text, options())
        .into_offset_iter()
        .map(|(event, range)| {
            let event = match event {
                Event::InlineMath(tex) => math_markup(&tex, false),
                Event::DisplayMath(tex) => math_markup(&tex, true),
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                other => other,
            };
            (event, range)
        })
        .collect();
    assign_heading_ids(text, &mut events);

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter().map(|(event, _)| event));
    out
}

fn math_markup(tex: &str, display: bool) -> Event<'static> {
    let tex = html_escape::encode_text(tex);
    let markup = if display {
        format!("<div class=\"math math-display\">{tex}</div>")
    } else {
        format!("<span class=\"math math-inline\">{tex}</span>")
    };
    Event::InlineHtml(CowStr::from(markup))
}

fn assign_heading_ids(source: &str, events: &mut [(Event, Range<usize>)]) {
    let mut idx = 0;
    while idx < events.len() {
        let level = match &events[idx].0 {
            Event::Start(Tag::Heading { id: None, level, .. }) => *level,
            _ => {
                idx += 1;
                continue;
            }
        };

        // `# ` headings take their id from the source line, like the outline.
        let from_source = (level == HeadingLevel::H1)
            .then(|| source.get(events[idx].1.clone()))
            .flatten()
            .and_then(|raw| raw.lines().next())
            .and_then(outline_entry)
            .map(|entry| entry.id);

        let mut label = String::new();
        let mut end = idx + 1;
        while end < events.len() {
            match &events[end].0 {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) | Event::Code(t) => label.push_str(t),
                _ => {}
            }
            end += 1;
        }

        let anchor = from_source.unwrap_or_else(|| heading_id(label.trim()));
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[idx].0 {
            if !anchor.is_empty() {
                *id = Some(CowStr::from(anchor));
            }
        }
        idx = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_get_outline_ids() {
        let html = render_markdown("# Kalman Filter\n\ntext\n\n## Noise Model\n");
        assert!(html.contains(r#"<h1 id="kalman-filter">Kalman Filter</h1>"#));
        assert!(html.contains(r#"<h2 id="noise-model">Noise Model</h2>"#));
    }

    #[test]
    fn level_one_ids_match_outline_for_inline_markup() {
        let body = "# Using `regex` crate\n\n# **Bold** intro\n\n# Title #\n\n# Ohm $V=IR$\n\ntext\n";
        let html = render_markdown(body);
        let outline = crate::outline::extract_outline(body);
        assert_eq!(outline.len(), 4);
        for entry in outline {
            assert!(html.contains(&format!("id=\"{}\"", entry.id)), "missing {} in {html}", entry.id);
        }
    }

    #[test]
    fn tagged_fence_keeps_language_class() {
        let html = render_markdown("```rust\nfn main() {}\n```\n");
        assert!(html.contains(r#"<pre><code class="language-rust">"#));

        let plain = render_markdown("```\nplain\n```\n\nand `inline`");
        assert!(plain.contains("<pre><code>plain"));
        assert!(plain.contains("<code>inline</code>"));
    }

    #[test]
    fn math_is_wrapped_and_escaped() {
        let html = render_markdown("Ohm: $V < IR$\n\n$$\\sum_i x_i$$\n");
        assert!(html.contains(r#"<span class="math math-inline">V &lt; IR</span>"#));
        assert!(html.contains(r#"<div class="math math-display">\sum_i x_i</div>"#));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn renders_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }
}
