use axum::extract::Path as UrlPath;
use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::config::AssetsConfig;

/// JSON API под /api
fn api_routes() -> Router {
    Router::new()
        .route(
            "/artists",
            get(handlers::a001_artist::list_all).fallback(handlers::errors::method_not_allowed),
        )
        .route(
            "/artists/details",
            get(handlers::a001_artist::get_details)
                .fallback(handlers::errors::method_not_allowed),
        )
        .route(
            "/search",
            get(handlers::a001_artist::search).fallback(handlers::errors::method_not_allowed),
        )
        .fallback(handlers::errors::api_not_found)
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(assets: &AssetsConfig) -> Router {
    let static_root = assets.static_path();
    let dist = assets.dist_path();
    // Любой неизвестный путь отдаёт index.html — навигацией занимается фронтенд
    let frontend = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api_routes())
        .route(
            "/static/*path",
            get(move |UrlPath(path): UrlPath<String>| {
                let root = static_root.clone();
                async move { handlers::static_files::serve(&root, &path).await }
            })
            .fallback(handlers::errors::method_not_allowed),
        )
        .fallback_service(frontend)
}
