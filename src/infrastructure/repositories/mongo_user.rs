// src/infrastructure/repositories/mongo_user.rs
use super::map_mongo;
use crate::domain::errors::DomainResult;
use crate::domain::reaction::Reaction;
use crate::domain::user::{NewUser, User, UserRepository};
use async_trait::async_trait;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

pub const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(USERS_COLLECTION),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    usuario: String,
    nome: String,
    email: String,
    senha: String,
    imagem: String,
    #[serde(default)]
    likes: Vec<String>,
    #[serde(default)]
    deslikes: Vec<String>,
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        User {
            id: document.id.map(|oid| oid.to_hex()),
            usuario: document.usuario,
            nome: document.nome,
            email: document.email,
            senha: document.senha,
            imagem: document.imagem,
            likes: document.likes,
            deslikes: document.deslikes,
        }
    }
}

impl From<NewUser> for UserDocument {
    fn from(new_user: NewUser) -> Self {
        UserDocument {
            id: None,
            usuario: new_user.usuario,
            nome: new_user.nome,
            email: new_user.email,
            senha: new_user.senha,
            imagem: new_user.imagem,
            likes: new_user.likes,
            deslikes: new_user.deslikes,
        }
    }
}

// Reaction lists are updated with field-level operators so the membership
// write itself is atomic; the field name is selected by the reaction kind.
fn reaction_update(operator: &str, reaction: Reaction, album_id: &str) -> Document {
    let mut fields = Document::new();
    fields.insert(reaction.field(), album_id);

    let mut update = Document::new();
    update.insert(operator, fields);
    update
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let document = UserDocument::from(new_user);
        self.collection
            .insert_one(&document)
            .await
            .map_err(map_mongo)?;

        Ok(document.into())
    }

    async fn find_by_handle(&self, handle: &str) -> DomainResult<Option<User>> {
        self.collection
            .find_one(doc! { "usuario": handle })
            .await
            .map(|found| found.map(User::from))
            .map_err(map_mongo)
    }

    async fn add_reaction(
        &self,
        handle: &str,
        reaction: Reaction,
        album_id: &str,
    ) -> DomainResult<()> {
        self.collection
            .update_one(
                doc! { "usuario": handle },
                reaction_update("$addToSet", reaction, album_id),
            )
            .await
            .map(|_| ())
            .map_err(map_mongo)
    }

    async fn remove_reaction(
        &self,
        handle: &str,
        reaction: Reaction,
        album_id: &str,
    ) -> DomainResult<()> {
        self.collection
            .update_one(
                doc! { "usuario": handle },
                reaction_update("$pull", reaction, album_id),
            )
            .await
            .map(|_| ())
            .map_err(map_mongo)
    }
}
