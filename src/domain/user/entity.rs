// src/domain/user/entity.rs

/// A user record as held in the `users` collection.
///
/// `usuario` is the handle, the natural key used for every lookup. The
/// remaining profile fields are opaque strings; nothing here validates or
/// interprets them. `likes` and `deslikes` hold album ids with
/// set-membership add semantics, so duplicates never enter through this
/// service, but the stored order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Storage-assigned identifier in string form; present on records read
    /// back from the store, absent on the create echo.
    pub id: Option<String>,
    pub usuario: String,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub imagem: String,
    pub likes: Vec<String>,
    pub deslikes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub usuario: String,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub imagem: String,
    pub likes: Vec<String>,
    pub deslikes: Vec<String>,
}
