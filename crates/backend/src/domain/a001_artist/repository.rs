use contracts::domain::a001_artist::Artist;
use once_cell::sync::OnceCell;

use crate::shared::config::GroupieApiConfig;
use crate::shared::error::AppError;
use crate::shared::groupie_api::{FetchError, GroupieClient};

static CATALOG: OnceCell<ArtistCatalog> = OnceCell::new();

/// Каталог исполнителей: загружается один раз при старте и дальше только читается
#[derive(Debug, Clone)]
pub struct ArtistCatalog {
    client: GroupieClient,
    artists: Vec<Artist>,
}

impl ArtistCatalog {
    pub fn new(client: GroupieClient, artists: Vec<Artist>) -> Self {
        Self { client, artists }
    }

    /// Загружает список исполнителей из внешнего API
    pub async fn load(client: GroupieClient) -> Result<Self, FetchError> {
        let artists = client.fetch_artists().await?;
        Ok(Self::new(client, artists))
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn client(&self) -> &GroupieClient {
        &self.client
    }
}

/// Загружает каталог и сохраняет его в глобальном хранилище.
/// Без каталога сервер не стартует.
pub async fn initialize(config: &GroupieApiConfig) -> anyhow::Result<()> {
    let client = GroupieClient::new(config)?;
    tracing::info!("Fetching artists from {}", client.artists_url());

    let catalog = ArtistCatalog::load(client)
        .await
        .map_err(|e| anyhow::anyhow!("could not fetch artists: {e}"))?;
    tracing::info!("Artist catalog loaded: {} artists", catalog.artists().len());

    CATALOG
        .set(catalog)
        .map_err(|_| anyhow::anyhow!("artist catalog is already initialized"))?;
    Ok(())
}

pub fn get_catalog() -> Result<&'static ArtistCatalog, AppError> {
    CATALOG
        .get()
        .ok_or_else(|| AppError::Internal("artist catalog is not initialized".to_string()))
}
