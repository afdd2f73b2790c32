use crate::shared::api_utils::{api_url, get_json};
use contracts::domain::a001_artist::{Artist, ArtistDetails};
use contracts::shared::error::ErrorResponse;
use contracts::shared::search::{SearchRequest, SearchResponse};

const BASE_URL: &str = "/api";

/// All artists of the catalog
pub async fn fetch_artists() -> Result<Vec<Artist>, ErrorResponse> {
    get_json(&api_url(&format!("{}/artists", BASE_URL))).await
}

/// Artist with locations, dates and concerts
pub async fn fetch_details(id: i64) -> Result<ArtistDetails, ErrorResponse> {
    get_json(&api_url(&format!("{}/artists/details?id={}", BASE_URL, id))).await
}

/// Artists whose name contains `query`
pub async fn search(query: &str) -> Result<SearchResponse, ErrorResponse> {
    let params = serde_qs::to_string(&SearchRequest {
        q: Some(query.to_string()),
    })
    .map_err(|e| {
        log::error!("Failed to serialize request: {}", e);
        ErrorResponse::from_status(400)
    })?;
    get_json(&api_url(&format!("{}/search?{}", BASE_URL, params))).await
}
