use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// Wire form of a user record. Field names match the stored document; the
/// storage id is surfaced as a string and omitted when not known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub usuario: String,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub imagem: String,
    pub likes: Vec<String>,
    pub deslikes: Vec<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            usuario: user.usuario,
            nome: user.nome,
            email: user.email,
            senha: user.senha,
            imagem: user.imagem,
            likes: user.likes,
            deslikes: user.deslikes,
        }
    }
}
