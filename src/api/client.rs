use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::{FetchError, Result};
use crate::media::loader::{self, LoadedImage};
use crate::state::data::ImageType;

/// Body returned by `GET {endpoint}/{type}/{category}`
#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    url: Option<String>,
}

/// Client for the random image API.
///
/// One request per call, no retries. Cheap to clone; clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct ImageClient {
    http: Client,
    endpoint: String,
}

impl ImageClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("waifu-viewer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for a type/category pair
    pub fn request_url(&self, image_type: ImageType, category: &str) -> String {
        format!("{}/{}/{}", self.endpoint, image_type.as_str(), category)
    }

    /// Ask the API for a random image URL
    pub async fn fetch_image(
        &self,
        image_type: ImageType,
        category: String,
    ) -> std::result::Result<String, FetchError> {
        let request_url = self.request_url(image_type, &category);
        tracing::debug!("GET {}", request_url);

        let response = self
            .http
            .get(&request_url)
            .send()
            .await
            .map_err(|e| FetchError::network(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::network(&e))?;
        parse_image_url(&body)
    }

    /// Download and decode an image for display
    pub async fn load_image(&self, url: String) -> std::result::Result<LoadedImage, FetchError> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::image_load(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::image_load(describe_status(status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::image_load(e.to_string()))?;

        loader::decode_async(url, bytes.to_vec()).await
    }
}

/// Extract the image URL from an API response body
fn parse_image_url(body: &[u8]) -> std::result::Result<String, FetchError> {
    let parsed: ImageResponse =
        serde_json::from_slice(body).map_err(|_| FetchError::MalformedResponse)?;

    match parsed.url {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(FetchError::MalformedResponse),
    }
}

fn describe_status(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}
