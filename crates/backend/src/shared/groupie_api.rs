use contracts::domain::a001_artist::{Artist, ArtistDates, ArtistLocations, ArtistRelation};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::config::GroupieApiConfig;

/// Ошибки обращения к Groupie Trackers API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch data from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to unmarshal data from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Клиент для работы с Groupie Trackers API
#[derive(Debug, Clone)]
pub struct GroupieClient {
    http: reqwest::Client,
    artists_url: String,
}

impl GroupieClient {
    pub fn new(config: &GroupieApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            artists_url: config.artists_url.clone(),
        })
    }

    pub fn artists_url(&self) -> &str {
        &self.artists_url
    }

    /// GET по адресу, чтение тела и разбор JSON в `T`
    pub async fn fetch_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    pub async fn fetch_artists(&self) -> Result<Vec<Artist>, FetchError> {
        self.fetch_data(&self.artists_url).await
    }

    pub async fn fetch_locations(&self, url: &str) -> Result<ArtistLocations, FetchError> {
        self.fetch_data(url).await
    }

    pub async fn fetch_dates(&self, url: &str) -> Result<ArtistDates, FetchError> {
        self.fetch_data(url).await
    }

    pub async fn fetch_relation(&self, url: &str) -> Result<ArtistRelation, FetchError> {
        self.fetch_data(url).await
    }
}
