use crate::movies::models::{Movie, MoviesEnvelope};
use reqwest::{Client, Error as ReqwestError, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://wc-workshop-api.herokuapp.com";

#[derive(Error, Debug)]
pub enum MoviesError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Movies API returned status {0}")]
    Status(StatusCode),
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of movie listings (allows faking the API in tests)
#[async_trait::async_trait]
pub trait MovieSource: Send + Sync {
    /// List movies, optionally filtered by a search term.
    ///
    /// `None` omits the `search` parameter entirely; `Some("")` sends it empty
    /// and leaves the meaning to the server.
    async fn list_movies(&self, search: Option<&str>) -> Result<Vec<Movie>, MoviesError>;
}

/// HTTP client for the movies API
#[derive(Clone)]
pub struct MoviesClient {
    client: Client,
    base_url: String,
}

impl MoviesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_client(Client::new(), base_url)
    }

    /// Build a client whose requests give up after `timeout`.
    /// `None` keeps the transport default.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, MoviesError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::from_client(builder.build()?, base_url))
    }

    fn from_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn movies_url(&self) -> String {
        format!("{}/v1/movies", self.base_url)
    }
}

#[async_trait::async_trait]
impl MovieSource for MoviesClient {
    async fn list_movies(&self, search: Option<&str>) -> Result<Vec<Movie>, MoviesError> {
        let url = self.movies_url();

        let mut request = self.client.get(&url);
        if let Some(term) = search {
            request = request.query(&[("search", term)]);
        }

        info!("📡 Movies API: GET {} (search={:?})", url, search);

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("✗ Movies API error: {}", status);
            return Err(MoviesError::Status(status));
        }

        let body = response.text().await?;
        let envelope: MoviesEnvelope = serde_json::from_str(&body).map_err(|e| {
            warn!("✗ Movies API sent an unreadable body: {}", e);
            MoviesError::Decode(e)
        })?;

        info!("✓ Movies API returned {} movie(s)", envelope.data.len());
        Ok(envelope.data)
    }
}
