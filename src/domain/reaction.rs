// src/domain/reaction.rs
use std::fmt;

/// The two reaction kinds a user can register against an album.
///
/// The field names mirror the persisted document fields: a reaction selects
/// both the membership list on the user document and the counter on the
/// album document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
    Like,
    Deslike,
}

impl Reaction {
    pub fn field(&self) -> &'static str {
        match self {
            Reaction::Like => "likes",
            Reaction::Deslike => "deslikes",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}
