use async_trait::async_trait;
use pubcrawl_config::{ApiConfig, AreaConfig};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};
use crate::error::SourceError;
use crate::traits::PubSource;

const SOURCE_NAME: &str = "pubcrawlapi";

/// Live source: one GET against the pubcache endpoint
pub struct HttpPubSource {
    client: Client,
    base_url: String,
    user_id: String,
    latitude: f64,
    longitude: f64,
    deg: f64,
}

impl HttpPubSource {
    pub fn new(api: &ApiConfig, area: &AreaConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_seconds))
            .build()
            .map_err(|e| SourceError::fetch_failed(SOURCE_NAME, e))?;

        Ok(Self {
            client,
            base_url: api.base_url.clone(),
            user_id: api.user_id.clone(),
            latitude: area.latitude,
            longitude: area.longitude,
            deg: area.deg,
        })
    }

    /// `{base_url}?uId=..&lng=..&lat=..&deg=..`
    pub fn request_url(&self) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            SourceError::fetch_failed(SOURCE_NAME, format!("invalid URL '{}': {}", self.base_url, e))
        })?;
        url.query_pairs_mut()
            .append_pair("uId", &self.user_id)
            .append_pair("lng", &self.longitude.to_string())
            .append_pair("lat", &self.latitude.to_string())
            .append_pair("deg", &self.deg.to_string());
        Ok(url)
    }
}

#[async_trait]
impl PubSource for HttpPubSource {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        let url = self.request_url()?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::fetch_failed(SOURCE_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Pubcache request failed with status {}", status);
            return Err(SourceError::fetch_failed(
                SOURCE_NAME,
                format!("unexpected status {}", status),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::fetch_failed(SOURCE_NAME, e))?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_from_defaults() {
        let source = HttpPubSource::new(&ApiConfig::default(), &AreaConfig::default()).unwrap();
        let url = source.request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://pubcrawlapi.appspot.com/pubcache/?uId=mike&lng=-0.141499&lat=51.496466&deg=0.003"
        );
    }

    #[test]
    fn test_request_url_encodes_user_id() {
        let api = ApiConfig {
            user_id: "ann marie".to_string(),
            ..ApiConfig::default()
        };
        let source = HttpPubSource::new(&api, &AreaConfig::default()).unwrap();
        let url = source.request_url().unwrap();
        assert!(url.as_str().contains("uId=ann+marie"));
    }

    #[test]
    fn test_invalid_base_url_is_fetch_failure() {
        let api = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        let source = HttpPubSource::new(&api, &AreaConfig::default()).unwrap();
        assert!(matches!(source.request_url(), Err(SourceError::FetchFailed { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_failure() {
        let api = ApiConfig {
            base_url: "http://127.0.0.1:1/pubcache/".to_string(),
            timeout_seconds: 2,
            ..ApiConfig::default()
        };
        let source = HttpPubSource::new(&api, &AreaConfig::default()).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::FetchFailed { .. }));
    }
}
