use contracts::domain::a001_artist::{Artist, ArtistDetails};
use contracts::shared::search::SearchResponse;

use super::repository::ArtistCatalog;
use crate::shared::error::AppError;

pub fn list_all(catalog: &ArtistCatalog) -> Vec<Artist> {
    catalog.artists().to_vec()
}

/// Разбирает id из запроса и возвращает индекс в каталоге.
/// Допустимы только целые из диапазона `1..=count`.
pub fn parse_artist_id(raw: Option<&str>, count: usize) -> Result<usize, AppError> {
    let raw = raw.unwrap_or_default();
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid artist id: {raw:?}")))?;

    if id <= 0 || id as u64 > count as u64 {
        return Err(AppError::BadRequest(format!(
            "artist id {id} is out of range 1..={count}"
        )));
    }
    Ok(id as usize - 1)
}

/// Карточка исполнителя с локациями, датами и концертами.
/// Три документа запрашиваются параллельно; любая ошибка внешнего API → 500.
pub async fn get_details(
    catalog: &ArtistCatalog,
    raw_id: Option<&str>,
) -> Result<ArtistDetails, AppError> {
    let index = parse_artist_id(raw_id, catalog.artists().len())?;
    let artist = catalog.artists()[index].clone();
    let client = catalog.client();

    let (locations, dates, concerts) = tokio::try_join!(
        client.fetch_locations(&artist.locations),
        client.fetch_dates(&artist.concert_dates),
        client.fetch_relation(&artist.relations),
    )?;

    Ok(ArtistDetails {
        artist,
        locations,
        dates,
        concerts,
    })
}

/// Поиск по подстроке в имени без учёта регистра, порядок каталога сохраняется
pub fn search(catalog: &ArtistCatalog, query: Option<&str>) -> Result<SearchResponse, AppError> {
    let query = query.unwrap_or_default();
    if query.is_empty() {
        return Err(AppError::BadRequest("empty search query".to_string()));
    }

    let needle = query.to_lowercase();
    let results: Vec<Artist> = catalog
        .artists()
        .iter()
        .filter(|artist| artist.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    Ok(SearchResponse::new(query, results))
}
