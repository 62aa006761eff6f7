use regex::Regex;
use std::sync::OnceLock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    pub text: String,
    pub id: String,
}

fn h1_regex() -> &'static Regex {
    static RE_H1: OnceLock<Regex> = OnceLock::new();
    RE_H1.get_or_init(|| Regex::new(r"(?m)^#[^\S\n]+(.+?)\r?$").unwrap())
}

fn entry(text: &str) -> OutlineEntry {
    OutlineEntry {
        id: heading_id(text),
        text: text.to_string(),
    }
}

/// Every level-1 `# Heading` line, in document order. Deeper headings are skipped.
pub fn extract_outline(body: &str) -> Vec<OutlineEntry> {
    h1_regex()
        .captures_iter(body)
        .filter_map(|cap| cap.get(1))
        .map(|m| entry(m.as_str()))
        .collect()
}

/// Outline entry for a single source line, if it is a `# Heading` line.
pub fn outline_entry(line: &str) -> Option<OutlineEntry> {
    let cap = h1_regex().captures(line)?;
    let text = cap.get(1)?;
    Some(entry(text.as_str()))
}

pub fn heading_id(text: &str) -> String {
    static RE_SPACE: OnceLock<Regex> = OnceLock::new();
    let re_space = RE_SPACE.get_or_init(|| Regex::new(r"\s+").unwrap());
    re_space.replace_all(&text.to_lowercase(), "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_level_one_headings_in_order() {
        let outline = extract_outline("# Intro\nbody\n# Setup\n");
        assert_eq!(
            outline,
            vec![
                OutlineEntry {
                    text: "Intro".to_string(),
                    id: "intro".to_string()
                },
                OutlineEntry {
                    text: "Setup".to_string(),
                    id: "setup".to_string()
                },
            ]
        );
    }

    #[test]
    fn ignores_deeper_headings_and_hash_without_space() {
        assert!(extract_outline("## Sub\n### Deeper\n#tag\ntext # not a heading\n").is_empty());
        assert!(extract_outline("").is_empty());
    }

    #[test]
    fn ids_collapse_whitespace_and_keep_unicode() {
        let outline = extract_outline("# Kalman  Filter 详解\r\n");
        assert_eq!(outline[0].text, "Kalman  Filter 详解");
        assert_eq!(outline[0].id, "kalman-filter-详解");
    }

    #[test]
    fn single_line_matches_body_extraction() {
        assert_eq!(outline_entry("# Using `regex` crate\n"), extract_outline("# Using `regex` crate\n").pop());
        assert_eq!(outline_entry("## Sub"), None);
    }
}
