//! Store traits, the single polymorphic seam of the crate.
//!
//! Two implementations exist: [`postgres`](super::postgres) for production
//! and [`memory`](super::memory) for tests and local development. Handlers
//! and services only ever see these traits.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::models::{Note, User};

/// Errors from a store backend. Business-rule failures (not found, not
/// authorized) are not represented here; callers decide those from the
/// returned `Option`s.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("Store error: {0}")]
    Other(String),
}

/// Fields required to persist a new user. The hash is computed by the
/// caller; stores never see plaintext passwords.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub description: String,
    pub tag: Option<String>,
    pub user_id: Uuid,
}

/// Partial update for a note. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl NoteChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.tag.is_none()
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create(&self, note: NewNote) -> Result<Note, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StoreError>;
    async fn find_by_owner(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError>;
    /// Apply `changes` to the note, returning its post-update state, or
    /// `None` if the id does not resolve.
    async fn update(&self, id: Uuid, changes: NoteChanges) -> Result<Option<Note>, StoreError>;
    /// Remove the note permanently, returning its last known state, or
    /// `None` if the id does not resolve.
    async fn delete(&self, id: Uuid) -> Result<Option<Note>, StoreError>;
}
