//! Помощники для тестов: локальный HTTP сервер вместо внешнего API

use axum::Router;

use super::config::GroupieApiConfig;
use super::groupie_api::GroupieClient;

/// Поднимает `router` на случайном порту и возвращает базовый URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{}", addr)
}

pub fn test_client(artists_url: &str) -> GroupieClient {
    GroupieClient::new(&GroupieApiConfig {
        artists_url: artists_url.to_string(),
        timeout_secs: 5,
    })
    .expect("test client")
}
