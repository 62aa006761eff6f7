use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    // SPA hosts answer missing files with index.html
    #[error("{url} was served as an HTML page")]
    UnexpectedHtml { url: String },

    #[error("failed to decode {url}: {message}")]
    Decode { url: String, message: String },

    #[error("request superseded")]
    Aborted,
}

impl FetchError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, FetchError::Aborted)
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_status_errors_with_url() {
        let err = FetchError::Status {
            url: "/posts/missing.md".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "/posts/missing.md returned HTTP 404");
        assert!(!err.is_aborted());
        assert!(FetchError::Aborted.is_aborted());
    }
}
