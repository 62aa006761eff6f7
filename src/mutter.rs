use serde::{Deserialize, Serialize};

use crate::catalog::compare_dates;
use crate::error::FetchError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Mutter {
    pub id: String,
    pub date: String,
    pub text: String,
    #[serde(default)]
    pub comments: u32,
}

/// Newest first by date. Entries sharing a date keep reverse file order, so
/// later lines of the same day still come first.
pub fn newest_first(mutters: Vec<Mutter>) -> Vec<Mutter> {
    let mut indexed: Vec<(usize, Mutter)> = mutters.into_iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| compare_dates(&b.date, &a.date).then(ib.cmp(ia)));
    indexed.into_iter().map(|(_, mutter)| mutter).collect()
}

pub fn from_result(result: Result<Vec<Mutter>, FetchError>) -> Vec<Mutter> {
    match result {
        Ok(mutters) => newest_first(mutters),
        Err(err) => {
            leptos::logging::error!("failed to load mutters: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mutter(id: &str, date: &str) -> Mutter {
        Mutter {
            id: id.to_string(),
            date: date.to_string(),
            text: format!("post {id}"),
            comments: 0,
        }
    }

    #[test]
    fn sorts_by_date_not_file_order() {
        let feed = newest_first(vec![
            mutter("mid", "2025-11-02"),
            mutter("new", "2025-12-26"),
            mutter("old", "2025-01-15"),
        ]);
        let ids: Vec<&str> = feed.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn same_day_entries_show_later_lines_first() {
        let feed = newest_first(vec![
            mutter("first", "2025-12-26"),
            mutter("second", "2025-12-26"),
        ]);
        assert_eq!(feed[0].id, "second");
    }

    #[test]
    fn decodes_without_comment_count() {
        let parsed: Vec<Mutter> =
            serde_json::from_str(r#"[{"id":"1","date":"2025-12-26","text":"Hello World!"}]"#)
                .unwrap();
        assert_eq!(parsed[0].comments, 0);
        assert!(from_result(Err(FetchError::Aborted)).is_empty());
    }
}
