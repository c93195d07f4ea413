// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{albums, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    routing::{delete, get, patch, post},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    // Fully open CORS with credentials. Browsers reject a wildcard origin
    // when credentials are allowed, so the layer mirrors the request origin.
    let cors = CorsLayer::very_permissive();

    Router::new()
        .route("/health", get(health))
        .route("/users/", post(users::create_user))
        .route("/users/{user_id}", get(users::get_user))
        .route("/users/{user_id}/likes", patch(users::add_like))
        .route("/users/{user_id}/deslikes", patch(users::add_deslike))
        .route(
            "/removelike/{user_id}/{album_id}",
            delete(users::remove_like),
        )
        .route(
            "/removedeslike/{user_id}/{album_id}",
            delete(users::remove_deslike),
        )
        .route("/album/{album_id}", get(albums::get_album))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
