use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid submission: {0}")]
    Validation(String),

    #[error("Failed to send email ({status}): {body}")]
    EmailProvider { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

impl SiteError {
    /// HTTP status a handler should answer with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            SiteError::NotFound(_) => 404,
            SiteError::Validation(_) => 422,
            SiteError::EmailProvider { .. } => 502,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
