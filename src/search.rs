use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchEngine {
    pub name: &'static str,
    pub url_prefix: &'static str,
}

pub const ENGINES: &[SearchEngine] = &[
    SearchEngine {
        name: "Google",
        url_prefix: "https://www.google.com/search?q=",
    },
    SearchEngine {
        name: "Bing",
        url_prefix: "https://www.bing.com/search?q=",
    },
    SearchEngine {
        name: "CNKI",
        url_prefix: "https://scholar.cnki.net/result?kw=",
    },
    SearchEngine {
        name: "GitHub",
        url_prefix: "https://github.com/search?q=",
    },
];

/// Looks an engine up by name, defaulting to the first one.
pub fn find_engine(name: &str) -> SearchEngine {
    ENGINES
        .iter()
        .copied()
        .find(|engine| engine.name.eq_ignore_ascii_case(name))
        .unwrap_or(ENGINES[0])
}

impl SearchEngine {
    /// `None` for a blank query.
    pub fn url_for(&self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(format!("{}{}", self.url_prefix, utf8_percent_encode(query, URI_COMPONENT)))
    }
}

// `encodeURIComponent` leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_encoded_urls() {
        let google = find_engine("Google");
        assert_eq!(
            google.url_for(" kalman filter & rust ").as_deref(),
            Some("https://www.google.com/search?q=kalman%20filter%20%26%20rust")
        );
        assert_eq!(
            find_engine("cnki").url_for("继电保护").as_deref(),
            Some("https://scholar.cnki.net/result?kw=%E7%BB%A7%E7%94%B5%E4%BF%9D%E6%8A%A4")
        );
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(
            find_engine("GitHub").url_for("a-b_c.d!e~f*g'h(i) /?#").as_deref(),
            Some("https://github.com/search?q=a-b_c.d!e~f*g'h(i)%20%2F%3F%23")
        );
    }

    #[test]
    fn blank_query_has_no_url_and_unknown_engine_falls_back() {
        assert_eq!(find_engine("Bing").url_for("   "), None);
        assert_eq!(find_engine("AltaVista").name, "Google");
    }
}
