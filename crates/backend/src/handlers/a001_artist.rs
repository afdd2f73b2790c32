use axum::{extract::Query, Json};
use contracts::domain::a001_artist::{Artist, ArtistDetails};
use contracts::shared::search::{SearchRequest, SearchResponse};
use serde::Deserialize;

use crate::domain::a001_artist::{repository, service};
use crate::shared::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ArtistDetailsRequest {
    #[serde(default)]
    pub id: Option<String>,
}

/// GET /api/artists
pub async fn list_all() -> Result<Json<Vec<Artist>>, AppError> {
    let catalog = repository::get_catalog()?;
    Ok(Json(service::list_all(catalog)))
}

/// GET /api/artists/details?id=
pub async fn get_details(
    Query(req): Query<ArtistDetailsRequest>,
) -> Result<Json<ArtistDetails>, AppError> {
    let catalog = repository::get_catalog()?;
    let details = service::get_details(catalog, req.id.as_deref()).await?;
    Ok(Json(details))
}

/// GET /api/search?q=
pub async fn search(Query(req): Query<SearchRequest>) -> Result<Json<SearchResponse>, AppError> {
    let catalog = repository::get_catalog()?;
    Ok(Json(service::search(catalog, req.q.as_deref())?))
}
