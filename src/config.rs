use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub manifest_url: String,
    pub content_dir: String,
    pub mutters_url: String,
    pub quote_url: String,
    pub notes_header_threshold: f64,
    pub page_header_threshold: f64,
    pub default_engine: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            manifest_url: "/posts.json".to_string(),
            content_dir: "/posts".to_string(),
            mutters_url: "/mutters.json".to_string(),
            quote_url: "https://v1.hitokoto.cn".to_string(),
            notes_header_threshold: 20.0,
            page_header_threshold: 200.0,
            default_engine: "Google".to_string(),
        }
    }
}

pub const CONFIG_URL: &str = "/site.json";

impl SiteConfig {
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<SiteConfig>(text) {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("ignoring malformed {CONFIG_URL}: {err}");
                Self::default()
            }
        }
    }

    pub fn content_url(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.content_dir.trim_end_matches('/'),
            filename.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = SiteConfig::from_json(r#"{ "content_dir": "/notes/" }"#);
        assert_eq!(config.content_dir, "/notes/");
        assert_eq!(config.manifest_url, "/posts.json");
        assert_eq!(config.content_url("a.md"), "/notes/a.md");
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        assert_eq!(SiteConfig::from_json("{ nope"), SiteConfig::default());
    }
}
