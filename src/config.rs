use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SiteError};

pub const DEFAULT_SITE_URL: &str = "https://www.harborlinefreight.com";
pub const DEFAULT_RESEND_API_BASE: &str = "https://api.resend.com";
pub const DEFAULT_EMAIL_FROM: &str = "Harborline Website <website@harborlinefreight.com>";
pub const DEFAULT_CONTACT_INBOX: &str = "sales@harborlinefreight.com";
pub const DEFAULT_ANALYTICS_ENDPOINT: &str = "https://www.google-analytics.com/mp/collect";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Execution environment; decides which email strategy is wired at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(SiteError::Config(format!("Unknown environment '{}'", other))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        };
        write!(f, "{}", name)
    }
}

/// Process-wide configuration, read once at startup and injected everywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub base_url: String,
    pub environment: Environment,
    pub port: u16,
    pub email: EmailConfig,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub from: String,
    pub inbox: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub tracking_id: Option<String>,
    pub endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SITE_URL.to_string(),
            environment: Environment::default(),
            port: DEFAULT_PORT,
            email: EmailConfig {
                api_key: None,
                api_base: DEFAULT_RESEND_API_BASE.to_string(),
                from: DEFAULT_EMAIL_FROM.to_string(),
                inbox: DEFAULT_CONTACT_INBOX.to_string(),
            },
            analytics: AnalyticsConfig {
                tracking_id: None,
                endpoint: DEFAULT_ANALYTICS_ENDPOINT.to_string(),
            },
        }
    }
}

/// Shape of the optional `config.toml`; every key may be omitted.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    site_url: Option<String>,
    environment: Option<Environment>,
    port: Option<u16>,
    #[serde(default)]
    email: FileEmailConfig,
    #[serde(default)]
    analytics: FileAnalyticsConfig,
}

#[derive(Debug, Default, Deserialize)]
struct FileEmailConfig {
    api_base: Option<String>,
    from: Option<String>,
    inbox: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileAnalyticsConfig {
    tracking_id: Option<String>,
    endpoint: Option<String>,
}

impl SiteConfig {
    /// Load `.env`, the optional config file and then environment overrides.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let path = std::env::var("SITE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::default();
        if Path::new(&path).exists() {
            config = config.merge_file(&path)?;
        }
        config.apply_lookup(|key| std::env::var(key).ok())
    }

    /// Build from defaults plus an arbitrary key lookup (used by tests instead of the process env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().apply_lookup(lookup)
    }

    pub fn merge_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Self::file_error(path, e))?;
        let file: FileConfig = toml::from_str(&content)?;

        if let Some(url) = file.site_url {
            self.base_url = url;
        }
        if let Some(env) = file.environment {
            self.environment = env;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(base) = file.email.api_base {
            self.email.api_base = base;
        }
        if let Some(from) = file.email.from {
            self.email.from = from;
        }
        if let Some(inbox) = file.email.inbox {
            self.email.inbox = inbox;
        }
        if let Some(id) = file.analytics.tracking_id {
            self.analytics.tracking_id = Some(id);
        }
        if let Some(endpoint) = file.analytics.endpoint {
            self.analytics.endpoint = endpoint;
        }
        self.base_url = normalize_base_url(&self.base_url);
        Ok(self)
    }

    fn file_error(path: &Path, e: std::io::Error) -> SiteError {
        SiteError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
    }

    fn apply_lookup<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty("SITE_URL") {
            self.base_url = url;
        }
        if let Some(env) = non_empty("APP_ENV") {
            self.environment = env.parse()?;
        }
        if let Some(port) = non_empty("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| SiteError::Config(format!("PORT is not a valid port: '{}'", port)))?;
        }
        if let Some(key) = non_empty("RESEND_API_KEY") {
            self.email.api_key = Some(key);
        }
        if let Some(base) = non_empty("RESEND_API_BASE") {
            self.email.api_base = base;
        }
        if let Some(from) = non_empty("EMAIL_FROM") {
            self.email.from = from;
        }
        if let Some(inbox) = non_empty("CONTACT_INBOX") {
            self.email.inbox = inbox;
        }
        if let Some(id) = non_empty("ANALYTICS_ID") {
            self.analytics.tracking_id = Some(id);
        }
        if let Some(endpoint) = non_empty("ANALYTICS_ENDPOINT") {
            self.analytics.endpoint = endpoint;
        }

        self.base_url = normalize_base_url(&self.base_url);
        Ok(self)
    }
}

/// Trim whitespace and trailing slashes; empty input falls back to the default site URL.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_SITE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
