//! CMS client - fetches one works entry from the WordPress REST API

use reqwest::Url;

use crate::content::RawRecord;
use crate::error::{Error, Result};

/// HTTP client bound to a CMS base endpoint
#[derive(Debug, Clone)]
pub struct CmsClient {
    endpoint: String,
    client: reqwest::Client,
}

impl CmsClient {
    /// Create a client for `endpoint`; entry ids are appended to it verbatim
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// URL of entry `id`
    pub fn entry_url(&self, id: &str) -> Result<Url> {
        let url = format!("{}{}", self.endpoint, id);
        Url::parse(&url).map_err(|e| Error::InvalidUrl {
            url,
            message: e.to_string(),
        })
    }

    /// Fetch and decode entry `id`
    pub async fn fetch(&self, id: &str) -> Result<RawRecord> {
        let url = self.entry_url(id)?;
        tracing::debug!("Fetching CMS entry: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            // The body is still decoded; WordPress error objects become an empty record
            tracing::warn!("CMS responded {} for {}", status, url);
        }

        let record: RawRecord = response.json().await?;
        tracing::debug!(
            "Fetched entry {:?} with {} custom fields",
            record.id,
            record.acf.len()
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, routing::get, Json, Router};
    use serde_json::json;

    async fn spawn_cms(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/wp-json/wp/v2/works/", addr)
    }

    #[test]
    fn test_entry_url_concatenates() {
        let client = CmsClient::new("https://cms.example/wp-json/wp/v2/works/");
        assert_eq!(
            client.entry_url("42").unwrap().as_str(),
            "https://cms.example/wp-json/wp/v2/works/42"
        );
    }

    #[test]
    fn test_entry_url_invalid() {
        let client = CmsClient::new("not a url/");
        let err = client.entry_url("42").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_fetch_record() {
        let app = Router::new().route(
            "/wp-json/wp/v2/works/:id",
            get(|Path(id): Path<u64>| async move {
                Json(json!({
                    "id": id,
                    "date": "2024-03-15T09:00:00",
                    "acf": { "catch-copy": "Fetched" }
                }))
            }),
        );
        let endpoint = spawn_cms(app).await;

        let record = CmsClient::new(endpoint).fetch("42").await.unwrap();
        assert_eq!(record.id, Some(42));
        assert_eq!(record.acf.text("catch-copy").as_deref(), Some("Fetched"));
    }

    #[tokio::test]
    async fn test_fetch_non_json_is_error() {
        let app = Router::new().route("/wp-json/wp/v2/works/:id", get(|| async { "<html>oops</html>" }));
        let endpoint = spawn_cms(app).await;

        let err = CmsClient::new(endpoint).fetch("1").await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }

    #[tokio::test]
    async fn test_fetch_error_status_still_decodes() {
        let app = Router::new().route(
            "/wp-json/wp/v2/works/:id",
            get(|| async {
                (
                    axum::http::StatusCode::NOT_FOUND,
                    Json(json!({ "code": "rest_post_invalid_id", "message": "Invalid post ID." })),
                )
            }),
        );
        let endpoint = spawn_cms(app).await;

        let record = CmsClient::new(endpoint).fetch("999").await.unwrap();
        assert_eq!(record, RawRecord::default());
    }
}
