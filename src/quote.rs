use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub id: u64,
    pub hitokoto: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub from_who: Option<String>,
}

impl Quote {
    /// The author when known, otherwise the work it comes from.
    pub fn attribution(&self) -> &str {
        self.from_who
            .as_deref()
            .filter(|who| !who.is_empty())
            .unwrap_or(&self.from)
    }

    pub fn source(&self) -> Option<&str> {
        (!self.from.is_empty() && self.attribution() != self.from).then_some(self.from.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribution_prefers_author() {
        let quote: Quote = serde_json::from_str(
            r#"{"id":42,"hitokoto":"...","from":"Three-Body","from_who":"Liu Cixin","creator":"x"}"#,
        )
        .unwrap();
        assert_eq!(quote.attribution(), "Liu Cixin");
        assert_eq!(quote.source(), Some("Three-Body"));
    }

    #[test]
    fn falls_back_to_work_without_author() {
        let quote: Quote =
            serde_json::from_str(r#"{"id":7,"hitokoto":"...","from":"Spirited Away","from_who":null}"#)
                .unwrap();
        assert_eq!(quote.attribution(), "Spirited Away");
        assert_eq!(quote.source(), None);
    }
}
