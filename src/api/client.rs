//! Bitsleek Daemon Client
//!
//! A client for the bitsleek daemon's REST interface, allowing snapshot
//! retrieval and status note submission.

use crate::api::TorrentApi;
use crate::api::error::ApiError;
use crate::api::types::{StatusNote, TorrentSnapshot};
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with viewer version
const USER_AGENT: &str = concat!("sleekwatch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DaemonClient {
    client: Client,
    environment: Environment,
}

impl DaemonClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()?,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.daemon_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl TorrentApi for DaemonClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Fetch the whole transfer collection from `GET /torrent`.
    async fn get_torrents(&self) -> Result<TorrentSnapshot, ApiError> {
        let url = self.build_url("/torrent");
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        // Decode by hand so a bad body is reported as Malformed, not Transport.
        let snapshot = serde_json::from_slice(&response_bytes)?;
        Ok(snapshot)
    }

    /// Post the placeholder status note to the daemon root. The response body
    /// is discarded; only the status code is returned for logging.
    async fn post_note(&self, note: StatusNote) -> Result<u16, ApiError> {
        let url = self.build_url("/");
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(&note)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_without_double_slash() {
        let client = DaemonClient::new(Environment::Custom {
            daemon_url: "http://media-box:9000/".to_string(),
        })
        .unwrap();
        assert_eq!(client.build_url("/torrent"), "http://media-box:9000/torrent");
        assert_eq!(client.build_url("torrent"), "http://media-box:9000/torrent");
    }
}
