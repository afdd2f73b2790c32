use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Upstream records
// ============================================================================

/// Исполнитель в том виде, в котором его отдаёт Groupie Trackers API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,

    #[serde(rename = "creationDate")]
    pub creation_date: i64,

    #[serde(rename = "firstAlbum")]
    pub first_album: String,

    /// URL документа с локациями
    pub locations: String,

    /// URL документа с датами концертов
    #[serde(rename = "concertDates")]
    pub concert_dates: String,

    /// URL документа со связкой "локация → даты"
    pub relations: String,
}

/// Локации концертов исполнителя
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArtistLocations {
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Даты концертов исполнителя
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArtistDates {
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Связка локаций с датами концертов
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArtistRelation {
    #[serde(rename = "datesLocations", default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

// ============================================================================
// Backend responses
// ============================================================================

/// Полная карточка исполнителя: запись каталога + три догружаемых документа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistDetails {
    pub artist: Artist,
    pub locations: ArtistLocations,
    pub dates: ArtistDates,
    pub concerts: ArtistRelation,
}
