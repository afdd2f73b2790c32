use serde::{Deserialize, Serialize};

use crate::domain::a001_artist::Artist;

/// Сообщение, которое показывается при пустом результате поиска
pub const NO_RESULTS_MESSAGE: &str = "No artists found matching your query.";

/// Параметры запроса GET /api/search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub q: Option<String>,
}

/// Результат поиска исполнителей по имени
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Artist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, results: Vec<Artist>) -> Self {
        let message = results.is_empty().then(|| NO_RESULTS_MESSAGE.to_string());
        Self {
            query: query.into(),
            results,
            message,
        }
    }
}
