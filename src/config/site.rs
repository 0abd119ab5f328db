//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Environment variable holding the CMS endpoint unless overridden
pub const DEFAULT_ENDPOINT_ENV: &str = "API_ENDPOINT";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,
    pub stylesheet: Option<String>,

    // CMS
    /// Base endpoint, the entry id is appended verbatim
    pub api_endpoint: Option<String>,
    /// Name of the environment variable that overrides `api_endpoint`
    pub endpoint_env: String,

    // Server
    pub route_prefix: String,
    pub static_dir: String,

    // Rendering
    pub date_format: String,
    pub job_label: String,
    pub image_width: u32,
    pub image_height: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Works".to_string(),
            language: "ja".to_string(),
            stylesheet: None,

            api_endpoint: None,
            endpoint_env: DEFAULT_ENDPOINT_ENV.to_string(),

            route_prefix: "/works".to_string(),
            static_dir: "public".to_string(),

            date_format: "YYYY-MM-DD".to_string(),
            job_label: "担当領域".to_string(),
            image_width: 1200,
            image_height: 720,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would fail every render
    pub fn validate(&self) -> Result<()> {
        if !crate::helpers::is_valid_date_format(&self.date_format) {
            anyhow::bail!(
                "date_format {:?} cannot format a calendar date",
                self.date_format
            );
        }
        Ok(())
    }

    /// Resolve the CMS endpoint from the process environment.
    ///
    /// Read on every call so a missing value surfaces per request,
    /// before any fetch is attempted.
    pub fn endpoint(&self) -> crate::Result<String> {
        self.endpoint_from(std::env::var(&self.endpoint_env).ok())
    }

    /// Resolve the CMS endpoint given the environment value, if any
    pub fn endpoint_from(&self, env_value: Option<String>) -> crate::Result<String> {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                self.api_endpoint
                    .clone()
                    .filter(|v| !v.trim().is_empty())
            })
            .ok_or_else(|| Error::MissingEndpoint {
                var: self.endpoint_env.clone(),
            })
    }

    /// Route pattern for works pages, e.g. `/works/:id`
    pub fn route(&self) -> String {
        let prefix = self.route_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            "/:id".to_string()
        } else if prefix.starts_with('/') {
            format!("{}/:id", prefix)
        } else {
            format!("/{}/:id", prefix)
        }
    }
}
