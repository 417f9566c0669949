use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{TrexClientError, TrexClientResult};
use crate::models::{HealthStatus, Problem};

#[derive(Debug, Clone)]
/// HTTP client for a `trex-server` instance.
pub struct TrexClient {
    base_url: String,
    client: Client,
}

impl TrexClient {
    /// Creates a client for the server at `base_url`, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> TrexClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> TrexClientError {
        let status = response.status();
        let problem = response.json::<Problem>().await.ok();
        TrexClientError::from_problem(status, problem)
    }

    /// Sends `GET path` and decodes a JSON success body.
    ///
    /// Non-2xx answers are returned as [`TrexClientError::Problem`].
    pub async fn get<T>(&self, path: &str) -> TrexClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .request(Method::GET, self.endpoint(path))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        Ok(response.json::<T>().await?)
    }

    /// Calls the health endpoint.
    pub async fn health(&self) -> TrexClientResult<HealthStatus> {
        self.get("/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = TrexClient::new("http://127.0.0.1:8080/").expect("client must build");
        assert_eq!(client.endpoint("/"), "http://127.0.0.1:8080/");
        assert_eq!(
            client.endpoint("/api-docs/openapi.json"),
            "http://127.0.0.1:8080/api-docs/openapi.json"
        );
    }
}
