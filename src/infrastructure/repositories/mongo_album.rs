// src/infrastructure/repositories/mongo_album.rs
use super::map_mongo;
use crate::domain::album::{AlbumCounter, AlbumCounterRepository};
use crate::domain::errors::DomainResult;
use crate::domain::reaction::Reaction;
use async_trait::async_trait;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

pub const LEDGER_COLLECTION: &str = "likes-ledger";

#[derive(Clone)]
pub struct MongoAlbumCounterRepository {
    collection: Collection<AlbumCounterDocument>,
}

impl MongoAlbumCounterRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(LEDGER_COLLECTION),
        }
    }
}

// Counters default to zero on read so that records written with only one
// field (the lazy-created shape) deserialize cleanly.
#[derive(Debug, Serialize, Deserialize)]
struct AlbumCounterDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    album_id: String,
    #[serde(default)]
    likes: i64,
    #[serde(default)]
    deslikes: i64,
}

impl From<AlbumCounterDocument> for AlbumCounter {
    fn from(document: AlbumCounterDocument) -> Self {
        AlbumCounter {
            id: document.id.map(|oid| oid.to_hex()),
            album_id: document.album_id,
            likes: document.likes,
            deslikes: document.deslikes,
        }
    }
}

impl From<AlbumCounter> for AlbumCounterDocument {
    fn from(counter: AlbumCounter) -> Self {
        AlbumCounterDocument {
            id: None,
            album_id: counter.album_id,
            likes: counter.likes,
            deslikes: counter.deslikes,
        }
    }
}

#[async_trait]
impl AlbumCounterRepository for MongoAlbumCounterRepository {
    async fn find_by_album_id(&self, album_id: &str) -> DomainResult<Option<AlbumCounter>> {
        self.collection
            .find_one(doc! { "album_id": album_id })
            .await
            .map(|found| found.map(AlbumCounter::from))
            .map_err(map_mongo)
    }

    async fn insert(&self, counter: AlbumCounter) -> DomainResult<()> {
        let document = AlbumCounterDocument::from(counter);
        self.collection
            .insert_one(&document)
            .await
            .map(|_| ())
            .map_err(map_mongo)
    }

    async fn increment(
        &self,
        album_id: &str,
        reaction: Reaction,
        delta: i64,
    ) -> DomainResult<()> {
        let mut fields = Document::new();
        fields.insert(reaction.field(), delta);

        self.collection
            .update_one(doc! { "album_id": album_id }, doc! { "$inc": fields })
            .await
            .map(|_| ())
            .map_err(map_mongo)
    }
}
