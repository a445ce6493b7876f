use std::collections::HashMap;

use log::{debug, error};
use reqwest::{Client, StatusCode};

use crate::errors::FetchError;

// @module: Emoji table loader

/// Mapping from emoji short name (word characters, no colons) to image reference.
/// Populated once per run from the remote endpoint, immutable thereafter.
pub type EmojiTable = HashMap<String, String>;

/// Client for the remote emoji short-name table
pub struct EmojiCatalog {
    /// HTTP client for the fetch
    client: Client,
    /// Endpoint URL serving the table
    endpoint: String,
    /// Identifying User-Agent header value
    user_agent: String,
}

impl EmojiCatalog {
    /// Create a new catalog client for the given endpoint
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: Client::builder().build().unwrap_or_default(),
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Fetch the emoji table
    ///
    /// One GET, no retry, no caching. Succeeds only on status 200 with a body
    /// that parses as a flat string-to-string JSON object; anything else is a
    /// `FetchError` and the caller must not touch any file.
    pub async fn fetch(&self) -> Result<EmojiTable, FetchError> {
        let response = self.client.get(&self.endpoint)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("error getting {}, response status code: {}", self.endpoint, status.as_u16());
            return Err(FetchError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let table: EmojiTable = serde_json::from_str(&body)
            .map_err(|e| FetchError::ParseError(e.to_string()))?;

        debug!("fetched {} emoji short names from {}", table.len(), self.endpoint);
        Ok(table)
    }
}
