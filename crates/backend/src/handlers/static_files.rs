use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};

use crate::shared::error::AppError;

/// Content-Type по расширению. Раздаются только перечисленные типы.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    match ext {
        "css" => Some("text/css"),
        "js" => Some("application/javascript"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "otf" => Some("font/otf"),
        _ => None,
    }
}

/// Путь внутри `root`; всё, что выходит за его пределы, отбрасывается
fn resolve(root: &Path, relative: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

/// GET /static/*path
pub async fn serve(root: &Path, relative: &str) -> Result<Response, AppError> {
    let not_found = || AppError::NotFound(format!("/static/{relative}"));

    let path = resolve(root, relative).ok_or_else(not_found)?;

    let metadata = tokio::fs::metadata(&path).await.map_err(|_| not_found())?;
    if metadata.is_dir() {
        return Err(not_found());
    }

    let content_type = content_type_for(&path).ok_or_else(not_found)?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::Internal(format!("failed to read {}: {e}", path.display())))?;

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
