//! Production store backed by PostgreSQL through sqlx.

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use uuid::Uuid;

use crate::config::DatabaseConfig;

use super::models::{Note, User};
use super::store::{NewNote, NewUser, NoteChanges, NoteStore, StoreError, UserStore};

/// Connect a pool using DATABASE_URL and the configured pool settings.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| StoreError::Other("DATABASE_URL is not set".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
        .connect(&url)
        .await?;

    tracing::info!("Connected database pool ({} max connections)", config.max_connections);
    Ok(pool)
}

/// Create the two tables if they do not exist yet. Idempotent; runs at startup.
pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            tag TEXT,
            user_id UUID NOT NULL REFERENCES users(id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}

#[derive(Clone)]
pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn create(&self, note: NewNote) -> Result<Note, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, description, tag, user_id) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&note.title)
        .bind(&note.description)
        .bind(&note.tag)
        .bind(note.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }

    async fn find_by_owner(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn update(&self, id: Uuid, changes: NoteChanges) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                tag = COALESCE($4, tag)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.tag)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>("DELETE FROM notes WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }
}
