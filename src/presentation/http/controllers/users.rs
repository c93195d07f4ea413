// src/presentation/http/controllers/users.rs
use crate::application::{commands::CreateUserCommand, dto::UserDto};
use crate::domain::reaction::Reaction;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub usuario: String,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub imagem: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub deslikes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReactionRequest {
    pub album_id: String,
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = CreateUserCommand {
        usuario: payload.usuario,
        nome: payload.nome,
        email: payload.email,
        senha: payload.senha,
        imagem: payload.imagem,
        likes: payload.likes,
        deslikes: payload.deslikes,
    };

    state
        .services
        .user_commands
        .create(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(user_id): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get(&user_id)
        .await
        .into_http()
        .map(Json)
}

pub async fn add_like(
    Extension(state): Extension<HttpState>,
    Path(user_id): Path<String>,
    Json(payload): Json<ReactionRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .reaction_commands
        .add(&user_id, &payload.album_id, Reaction::Like)
        .await
        .into_http()
        .map(Json)
}

pub async fn add_deslike(
    Extension(state): Extension<HttpState>,
    Path(user_id): Path<String>,
    Json(payload): Json<ReactionRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .reaction_commands
        .add(&user_id, &payload.album_id, Reaction::Deslike)
        .await
        .into_http()
        .map(Json)
}

pub async fn remove_like(
    Extension(state): Extension<HttpState>,
    Path((user_id, album_id)): Path<(String, String)>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .reaction_commands
        .remove(&user_id, &album_id, Reaction::Like)
        .await
        .into_http()
        .map(Json)
}

pub async fn remove_deslike(
    Extension(state): Extension<HttpState>,
    Path((user_id, album_id)): Path<(String, String)>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .reaction_commands
        .remove(&user_id, &album_id, Reaction::Deslike)
        .await
        .into_http()
        .map(Json)
}
