//! In-memory store used by the integration tests and for running the server
//! without a database. Maps are guarded by `tokio::sync::RwLock`; ids and
//! timestamps are assigned here, mirroring what the database would do.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Note, User};
use super::store::{NewNote, NewUser, NoteChanges, NoteStore, StoreError, UserStore};

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let record = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };

        self.users.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryNoteStore {
    notes: Arc<RwLock<HashMap<Uuid, Note>>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn create(&self, note: NewNote) -> Result<Note, StoreError> {
        let record = Note {
            id: Uuid::new_v4(),
            title: note.title,
            description: note.description,
            tag: note.tag,
            user_id: note.user_id,
            created_at: Utc::now(),
        };

        self.notes.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StoreError> {
        Ok(self.notes.read().await.get(&id).cloned())
    }

    async fn find_by_owner(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError> {
        let mut notes: Vec<Note> = self
            .notes
            .read()
            .await
            .values()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        notes.sort_by_key(|n| n.created_at);
        Ok(notes)
    }

    async fn update(&self, id: Uuid, changes: NoteChanges) -> Result<Option<Note>, StoreError> {
        let mut notes = self.notes.write().await;
        let Some(note) = notes.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            note.title = title;
        }
        if let Some(description) = changes.description {
            note.description = description;
        }
        if let Some(tag) = changes.tag {
            note.tag = Some(tag);
        }

        Ok(Some(note.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Note>, StoreError> {
        Ok(self.notes.write().await.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(user_id: Uuid) -> NewNote {
        NewNote {
            title: "Groceries".to_string(),
            description: "Buy milk and eggs".to_string(),
            tag: Some("home".to_string()),
            user_id,
        }
    }

    #[tokio::test]
    async fn create_and_fetch_by_owner() {
        let store = InMemoryNoteStore::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        let created = store.create(new_note(owner)).await.unwrap();

        let mine = store.find_by_owner(owner).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, created.id);

        assert!(store.find_by_owner(other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn partial_update_keeps_unset_fields() {
        let store = InMemoryNoteStore::new();
        let created = store.create(new_note(Uuid::new_v4())).await.unwrap();

        let updated = store
            .update(
                created.id,
                NoteChanges {
                    tag: Some("urgent".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Groceries");
        assert_eq!(updated.description, "Buy milk and eggs");
        assert_eq!(updated.tag.as_deref(), Some("urgent"));
    }

    #[tokio::test]
    async fn update_missing_note_is_none() {
        let store = InMemoryNoteStore::new();
        let result = store
            .update(Uuid::new_v4(), NoteChanges::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_returns_last_state() {
        let store = InMemoryNoteStore::new();
        let created = store.create(new_note(Uuid::new_v4())).await.unwrap();

        let deleted = store.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted.id, created.id);
        assert_eq!(store.len().await, 0);

        assert!(store.delete(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn user_email_lookup() {
        let store = InMemoryUserStore::new();
        store
            .create(NewUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password_hash: "$argon2id$stub".to_string(),
            })
            .await
            .unwrap();

        assert!(store
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .is_some());
        assert!(store.find_by_email("bob@example.com").await.unwrap().is_none());
    }
}
