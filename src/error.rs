//! Error types for the fetch → transform → render pipeline

use thiserror::Error;

/// Result alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while producing a works page
#[derive(Debug, Error)]
pub enum Error {
    /// No CMS endpoint configured, neither in the environment nor in `_config.yml`
    #[error("Assign a value for {var} in the environment (or api_endpoint in _config.yml)")]
    MissingEndpoint { var: String },

    /// `endpoint + id` did not form a valid URL
    #[error("invalid CMS url {url:?}: {message}")]
    InvalidUrl { url: String, message: String },

    /// Network failure or a response body that is not a JSON record
    #[error("failed to fetch CMS entry: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Template rendering failed
    #[error("failed to render template: {0}")]
    Template(#[from] tera::Error),
}

impl Error {
    /// Whether this error was raised before any network activity
    pub fn is_config(&self) -> bool {
        matches!(self, Error::MissingEndpoint { .. })
    }
}
