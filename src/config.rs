use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://themealdb.com/api/json/v1/1";
pub const DEFAULT_CATEGORY: &str = "Dessert";

/// Client settings. Every field is optional in the TOML file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base: String,
    pub category: String,
    pub user_agent: String,
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            user_agent: concat!("dessert-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    /// Defaults, then the config file (explicit path, else the per-user one if it exists), then env.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(p) => Self::from_file(&p)?,
                None => Self::default(),
            },
        };
        cfg.apply_env();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config: {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Env overrides; unparsable numbers are ignored.
    pub fn apply_env(&mut self) {
        if let Some(v) = std::env::var("DESSERTS_API_BASE").ok().filter(|s| !s.trim().is_empty()) {
            self.api_base = v;
        }
        if let Some(v) = std::env::var("DESSERTS_CATEGORY").ok().filter(|s| !s.trim().is_empty()) {
            self.category = v;
        }
        if let Some(ms) = std::env::var("DESSERTS_TIMEOUT_MS").ok().and_then(|s| s.parse().ok()) {
            self.timeout_ms = Some(ms);
        }
    }

    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.api_base)
            .with_context(|| format!("api_base is not a valid URL: {}", self.api_base))?;
        if !matches!(base.scheme(), "http" | "https") {
            bail!("api_base must start with http:// or https://");
        }
        if self.category.trim().is_empty() {
            bail!("category must not be empty");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// `<api_base>/filter.php?c=<category>`
    pub fn summaries_url(&self) -> Result<Url> {
        let mut url = self.endpoint("filter.php")?;
        url.query_pairs_mut().append_pair("c", &self.category);
        Ok(url)
    }

    /// `<api_base>/lookup.php?i=<meal_id>`
    pub fn detail_url(&self, meal_id: &str) -> Result<Url> {
        let mut url = self.endpoint("lookup.php")?;
        url.query_pairs_mut().append_pair("i", meal_id);
        Ok(url)
    }

    fn endpoint(&self, name: &str) -> Result<Url> {
        let base = self.api_base.trim_end_matches('/');
        Url::parse(&format!("{base}/{name}")).with_context(|| format!("bad endpoint under {base}"))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dessert-fetch").map(|d| d.config_dir().join("config.toml"))
}
