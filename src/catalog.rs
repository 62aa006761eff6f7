use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::FetchError;

pub const ALL_CATEGORY: &str = "All";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub filename: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub starred: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestLoad {
    pub summaries: Vec<ArticleSummary>,
    pub initial_category: String,
}

impl ManifestLoad {
    pub fn from_result(result: Result<Vec<ArticleSummary>, FetchError>) -> Self {
        match result {
            Ok(summaries) => {
                let initial_category = summaries
                    .first()
                    .map(|first| first.category.clone())
                    .unwrap_or_else(|| ALL_CATEGORY.to_string());
                Self {
                    summaries,
                    initial_category,
                }
            }
            Err(err) => {
                leptos::logging::error!("failed to load posts index: {err}");
                Self {
                    summaries: Vec::new(),
                    initial_category: ALL_CATEGORY.to_string(),
                }
            }
        }
    }
}

pub fn list_categories(summaries: &[ArticleSummary]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORY.to_string()];
    for summary in summaries {
        if summary.category.is_empty() {
            continue;
        }
        if seen.insert(summary.category.as_str()) {
            categories.push(summary.category.clone());
        }
    }
    categories
}

// Starred first, then newest first.
pub fn filter_and_sort(summaries: &[ArticleSummary], category: &str) -> Vec<ArticleSummary> {
    let mut visible: Vec<ArticleSummary> = summaries
        .iter()
        .filter(|summary| category == ALL_CATEGORY || summary.category == category)
        .cloned()
        .collect();
    visible.sort_by(|a, b| {
        b.starred
            .cmp(&a.starred)
            .then_with(|| compare_dates(&b.date, &a.date))
    });
    visible
}

pub fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Accepts `2025-12-26`, `2025-12-26 14:30[:05]` and RFC 3339 (offset dropped).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

pub fn slugify_category(label: &str) -> String {
    if label == ALL_CATEGORY {
        return "all".to_string();
    }

    static RE_SPACE: OnceLock<Regex> = OnceLock::new();
    static RE_STRIP: OnceLock<Regex> = OnceLock::new();
    let re_space = RE_SPACE.get_or_init(|| Regex::new(r"\s+").unwrap());
    let re_strip = RE_STRIP.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\-\x{4e00}-\x{9fa5}]").unwrap());

    let lowered = label.to_lowercase();
    let hyphenated = re_space.replace_all(&lowered, "-");
    re_strip.replace_all(&hyphenated, "").into_owned()
}

pub fn intro_path(config: &SiteConfig, category: &str) -> String {
    config.content_url(&format!("intro-{}.md", slugify_category(category)))
}

pub fn placeholder_intro(category: &str) -> String {
    format!(
        "# {category}\n\nThere is no summary for this category yet.\n\nPick a note from the list to start reading."
    )
}
