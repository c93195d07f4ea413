use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{NewUser, UserRepository},
};
use std::sync::Arc;

pub struct CreateUserCommand {
    pub usuario: String,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub imagem: String,
    pub likes: Vec<String>,
    pub deslikes: Vec<String>,
}

pub struct UserCommandService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Insert the record as given and echo it back. The handle is not
    /// checked for uniqueness; a duplicate handle is accepted and later
    /// lookups return an arbitrary match.
    pub async fn create(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let new_user = NewUser {
            usuario: command.usuario,
            nome: command.nome,
            email: command.email,
            senha: command.senha,
            imagem: command.imagem,
            likes: command.likes,
            deslikes: command.deslikes,
        };

        let user = self.user_repo.insert(new_user).await?;
        Ok(user.into())
    }
}
