use pokedex_client::ClientConfig;
use pokedex_engine::PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Config file errors
#[derive(Debug)]
pub enum Error {
    /// Reading or writing the file failed
    Io(std::io::Error),

    /// File content is not valid config TOML
    Parse(String),

    /// Config could not be serialized
    Serialize(String),

    /// No explicit path, no env var, no config or home directory
    NoConfigDir,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse(msg) => write!(f, "Invalid config file: {}", msg),
            Error::Serialize(msg) => write!(f, "Could not serialize config: {}", msg),
            Error::NoConfigDir => write!(
                f,
                "Could not determine config path: no config or HOME directory found"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(_) | Error::Serialize(_) | Error::NoConfigDir => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. POKEDEX_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`~/.config/pokedex/config.toml` on Linux)
/// 4. ~/.pokedex/config.toml (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("POKEDEX_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("pokedex").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pokedex").join("config.toml"));
    }

    Err(Error::NoConfigDir)
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub roster_limit: usize,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            base_url: client.api_base_url,
            roster_limit: client.roster_limit,
            user_agent: client.user_agent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub roster_limit: Option<usize>,
    pub page_size: Option<usize>,
}

/// Effective settings after merging file and command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub client: ClientConfig,
    pub page_size: usize,
}

impl Config {
    /// Load `path`, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn resolve(self, overrides: &Overrides) -> Settings {
        let client = ClientConfig {
            api_base_url: overrides.api_url.clone().unwrap_or(self.api.base_url),
            roster_limit: overrides.roster_limit.unwrap_or(self.api.roster_limit),
            user_agent: self.api.user_agent,
        };

        Settings {
            client,
            page_size: overrides.page_size.unwrap_or(self.view.page_size).max(1),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().resolve(&Overrides::default())
    }
}
