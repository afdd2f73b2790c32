use crate::shared::error::AppError;
use axum::http::Uri;

/// Ответ для методов, которые маршрут не поддерживает
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Неизвестный путь под /api
pub async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
