use serde::{Deserialize, Serialize};

/// Тело любого ответа с ошибкой
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl ErrorResponse {
    /// Ответ со стандартным текстом для кода статуса
    pub fn from_status(status: u16) -> Self {
        Self {
            status,
            message: status_message(status).to_string(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.status, self.message)
    }
}

/// Текст ошибки по коду статуса. Всё, что не распознано, считается 500.
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Internal Server Error",
    }
}
