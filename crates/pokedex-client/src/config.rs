use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_ROSTER_LIMIT: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub roster_limit: usize,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            roster_limit: DEFAULT_ROSTER_LIMIT,
            user_agent: concat!("pokedex/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_roster_limit(mut self, limit: usize) -> Self {
        self.roster_limit = limit;
        self
    }

    /// `{base}/pokemon?limit={roster_limit}`
    pub fn roster_url(&self) -> String {
        format!(
            "{}/pokemon?limit={}",
            self.api_base_url.trim_end_matches('/'),
            self.roster_limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_url_default() {
        let config = ClientConfig::default();
        assert_eq!(
            config.roster_url(),
            "https://pokeapi.co/api/v2/pokemon?limit=150"
        );
    }

    #[test]
    fn test_roster_url_trims_trailing_slash() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:8080/api/v2/")
            .with_roster_limit(20);
        assert_eq!(
            config.roster_url(),
            "http://127.0.0.1:8080/api/v2/pokemon?limit=20"
        );
    }
}
