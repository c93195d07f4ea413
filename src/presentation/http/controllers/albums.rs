// src/presentation/http/controllers/albums.rs
use crate::application::dto::AlbumCounterDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

pub async fn get_album(
    Extension(state): Extension<HttpState>,
    Path(album_id): Path<String>,
) -> HttpResult<Json<AlbumCounterDto>> {
    state
        .services
        .album_queries
        .get(&album_id)
        .await
        .into_http()
        .map(Json)
}
