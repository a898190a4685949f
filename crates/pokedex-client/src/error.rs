use std::fmt;

/// Result type for catalog loading
pub type Result<T> = std::result::Result<T, FetchError>;

/// Any failure while loading the catalog.
///
/// Transport, HTTP status and decoding problems all collapse into this one
/// kind; `reason` keeps the detail for logs, `USER_MESSAGE` is what the UI
/// shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    url: String,
    reason: String,
}

impl FetchError {
    pub const USER_MESSAGE: &'static str = "Failed to fetch Pokémon data";

    pub fn new(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to fetch {}: {}", self.url, self.reason)
    }
}

impl std::error::Error for FetchError {}
