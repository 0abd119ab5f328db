//! works-page: renders portfolio works pages from a headless WordPress CMS
//!
//! Each request runs a one-shot pipeline: resolve the CMS endpoint, fetch
//! one entry, reshape its flat ACF fields into a [`content::Post`], and
//! render it with the embedded Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod helpers;
pub mod server;
pub mod templates;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use content::Post;
use fetch::CmsClient;
use templates::TemplateRenderer;

/// The works page application
#[derive(Clone)]
pub struct Works {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Static asset directory served by the server
    pub static_dir: PathBuf,
    renderer: Arc<TemplateRenderer>,
    http: reqwest::Client,
}

impl Works {
    /// Create a new instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> anyhow::Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Create a new instance from an explicit configuration
    pub fn with_config<P: AsRef<Path>>(
        base_dir: P,
        config: config::SiteConfig,
    ) -> anyhow::Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let static_dir = base_dir.join(&config.static_dir);
        let renderer = Arc::new(TemplateRenderer::new()?);

        Ok(Self {
            config,
            base_dir,
            static_dir,
            renderer,
            http: reqwest::Client::new(),
        })
    }

    /// CMS client for the currently configured endpoint.
    ///
    /// Fails with [`Error::MissingEndpoint`] before any network activity.
    pub fn client(&self) -> Result<CmsClient> {
        let endpoint = self.config.endpoint()?;
        Ok(CmsClient::with_client(endpoint, self.http.clone()))
    }

    /// Fetch entry `id` and reshape it for display
    pub async fn fetch_post(&self, id: &str) -> Result<Post> {
        let client = self.client()?;
        let record = client.fetch(id).await?;
        Ok(content::transform(&record))
    }

    /// Fetch entry `id` and render it as a complete HTML document
    pub async fn render_page(&self, id: &str) -> Result<String> {
        let post = self.fetch_post(id).await?;
        self.renderer.render_page(&post, &self.config)
    }

    /// Fetch entry `id` and render only the works `<main>` region
    pub async fn render_fragment(&self, id: &str) -> Result<String> {
        let post = self.fetch_post(id).await?;
        self.renderer.render_fragment(&post, &self.config)
    }
}
