use crate::config::{Config, DEFAULT_BASE_URL};
use crate::http;
use crate::request::{batch_url, single_url};
use crate::types::{ApiResponse, Prediction};
use serde::de::DeserializeOwned;
use url::Url;

/// Client for the agify.io age prediction API.
///
/// Holds no mutable state; clones share the underlying connection pool and
/// can be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct AgifyClient {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

/// Overrides for [`AgifyClient`]. Unset values fall back to the public
/// endpoint, no API key and a default `reqwest::Client`.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn with_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> AgifyClient {
        AgifyClient {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: self.api_key.filter(|k| !k.is_empty()),
            http: self.http.unwrap_or_default(),
        }
    }
}

impl Default for AgifyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AgifyClient {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Client whose transport carries the configured user agent and timeout.
    pub fn from_config(cfg: &Config) -> reqwest::Result<Self> {
        let mut builder = Self::builder()
            .with_url(cfg.base_url.clone())
            .with_http_client(http::build_http_client(cfg)?);
        if let Some(key) = &cfg.api_key {
            builder = builder.with_api_key(key.clone());
        }
        Ok(builder.build())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub async fn predict(&self, name: &str) -> ApiResponse<Prediction> {
        self.predict_with_country(name, "").await
    }

    /// Predicts the age for `name`, scoped to `country` when it is non-empty.
    pub async fn predict_with_country(
        &self,
        name: &str,
        country: &str,
    ) -> ApiResponse<Prediction> {
        match single_url(&self.base_url, self.api_key(), name, country) {
            Ok(url) => self.fetch(url).await,
            Err(e) => ApiResponse::err(e, None),
        }
    }

    pub async fn batch_predict<S: AsRef<str>>(&self, names: &[S]) -> ApiResponse<Vec<Prediction>> {
        self.batch_predict_with_country(names, "").await
    }

    /// Predicts ages for all `names` in one request. Results come back in the
    /// order the service returns them.
    pub async fn batch_predict_with_country<S: AsRef<str>>(
        &self,
        names: &[S],
        country: &str,
    ) -> ApiResponse<Vec<Prediction>> {
        match batch_url(&self.base_url, self.api_key(), names, country) {
            Ok(url) => self.fetch(url).await,
            Err(e) => ApiResponse::err(e, None),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> ApiResponse<T> {
        http::get(&self.http, url)
            .await
            .and_then(|body| Ok(serde_json::from_slice(&body)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults() {
        let c = AgifyClient::new();
        assert_eq!(c.base_url(), "https://api.agify.io");
        assert_eq!(c.api_key(), None);
    }

    #[test]
    fn overrides() {
        let c = AgifyClient::builder()
            .with_url("http://localhost:8080")
            .with_http_client(reqwest::Client::new())
            .with_api_key("test-key")
            .build();
        assert_eq!(c.base_url(), "http://localhost:8080");
        assert_eq!(c.api_key(), Some("test-key"));
    }

    #[test]
    fn empty_api_key_means_none() {
        let c = AgifyClient::builder().with_api_key("").build();
        assert_eq!(c.api_key(), None);
    }

    #[test]
    fn client_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<AgifyClient>();
    }

    #[tokio::test]
    async fn malformed_base_url_fails_before_sending() {
        let c = AgifyClient::builder().with_url("::nope::").build();
        let resp = c.predict("michael").await;
        assert!(resp.rate_limit.is_none());
        assert!(matches!(resp.result, Err(Error::InvalidUrl { .. })));
    }
}
