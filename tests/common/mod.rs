use axum::body::Body;
use axum::http::Request;
use axum::Router;

use cadastro_profissionais::persistence::Database;
use cadastro_profissionais::web::{create_router, state::AppState};

pub async fn app() -> Router {
    let db = Database::in_memory().await.expect("in-memory db");
    create_router(AppState::new(db))
}

pub fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
