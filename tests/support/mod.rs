// tests/support/mod.rs
// Shared in-memory repository doubles used by multiple integration test
// binaries. Some symbols are unused in individual test crates; allow the
// resulting warnings at the module level to keep CI output clean.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use groovelog::application::commands::CreateUserCommand;
use groovelog::application::services::ApplicationServices;
use groovelog::domain::album::{AlbumCounter, AlbumCounterRepository};
use groovelog::domain::errors::DomainResult;
use groovelog::domain::reaction::Reaction;
use groovelog::domain::user::{NewUser, User, UserRepository};
use groovelog::presentation::http::{routes::build_router, state::HttpState};

/// In-memory stand-in for the `users` collection. Backed by a `Vec` so that
/// duplicate handles coexist, mirroring the store's lack of a uniqueness
/// constraint; `find_by_handle` returns the first match.
pub struct InMemoryUserRepo {
    inner: Mutex<Vec<User>>,
    next_id: AtomicU64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn assign_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("{n:024x}")
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let stored = User {
            id: Some(self.assign_id()),
            usuario: new_user.usuario,
            nome: new_user.nome,
            email: new_user.email,
            senha: new_user.senha,
            imagem: new_user.imagem,
            likes: new_user.likes,
            deslikes: new_user.deslikes,
        };

        let mut echo = stored.clone();
        echo.id = None;

        self.inner.lock().unwrap().push(stored);
        Ok(echo)
    }

    async fn find_by_handle(&self, handle: &str) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users.iter().find(|u| u.usuario == handle).cloned())
    }

    async fn add_reaction(
        &self,
        handle: &str,
        reaction: Reaction,
        album_id: &str,
    ) -> DomainResult<()> {
        let mut users = self.inner.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.usuario == handle) {
            let list = match reaction {
                Reaction::Like => &mut user.likes,
                Reaction::Deslike => &mut user.deslikes,
            };
            if !list.iter().any(|id| id == album_id) {
                list.push(album_id.to_owned());
            }
        }
        Ok(())
    }

    async fn remove_reaction(
        &self,
        handle: &str,
        reaction: Reaction,
        album_id: &str,
    ) -> DomainResult<()> {
        let mut users = self.inner.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.usuario == handle) {
            let list = match reaction {
                Reaction::Like => &mut user.likes,
                Reaction::Deslike => &mut user.deslikes,
            };
            list.retain(|id| id != album_id);
        }
        Ok(())
    }
}

/// In-memory stand-in for the `likes-ledger` collection.
pub struct InMemoryAlbumRepo {
    inner: Mutex<HashMap<String, AlbumCounter>>,
    next_id: AtomicU64,
}

impl InMemoryAlbumRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl AlbumCounterRepository for InMemoryAlbumRepo {
    async fn find_by_album_id(&self, album_id: &str) -> DomainResult<Option<AlbumCounter>> {
        let counters = self.inner.lock().unwrap();
        Ok(counters.get(album_id).cloned())
    }

    async fn insert(&self, mut counter: AlbumCounter) -> DomainResult<()> {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        counter.id = Some(format!("{n:024x}"));

        let mut counters = self.inner.lock().unwrap();
        counters.insert(counter.album_id.clone(), counter);
        Ok(())
    }

    async fn increment(
        &self,
        album_id: &str,
        reaction: Reaction,
        delta: i64,
    ) -> DomainResult<()> {
        let mut counters = self.inner.lock().unwrap();
        if let Some(counter) = counters.get_mut(album_id) {
            match reaction {
                Reaction::Like => counter.likes += delta,
                Reaction::Deslike => counter.deslikes += delta,
            }
        }
        Ok(())
    }
}

pub fn make_services() -> Arc<ApplicationServices> {
    let user_repo = Arc::new(InMemoryUserRepo::new());
    let album_repo = Arc::new(InMemoryAlbumRepo::new());
    Arc::new(ApplicationServices::new(user_repo, album_repo))
}

pub fn make_test_router() -> axum::Router {
    build_router(HttpState {
        services: make_services(),
    })
}

pub fn sample_user(handle: &str) -> CreateUserCommand {
    CreateUserCommand {
        usuario: handle.to_owned(),
        nome: "Sample".into(),
        email: "sample@example.com".into(),
        senha: "secret".into(),
        imagem: "avatar.png".into(),
        likes: vec![],
        deslikes: vec![],
    }
}
