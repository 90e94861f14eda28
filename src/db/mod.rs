pub mod memory;
pub mod pool;

pub use memory::MemoryStore;
pub use pool::create_pool;

use sqlx::PgPool;

use crate::models::mood::{MoodEntry, NewMood};

/// Handle to the `mood_logs` collection. The service runs against Postgres
/// when `DATABASE_URL` is configured and an in-memory store otherwise
/// (local development and tests).
///
/// Both backends guarantee the same contract: an insert is all-or-nothing,
/// the returned record is the acknowledged persisted state, and listings
/// are ordered `created_at` descending with ties in store-native order.
#[derive(Clone)]
pub enum MoodStore {
    Postgres(PgPool),
    Memory(MemoryStore),
}

impl MoodStore {
    pub async fn insert_mood(&self, new: NewMood) -> Result<MoodEntry, sqlx::Error> {
        match self {
            MoodStore::Postgres(pool) => {
                sqlx::query_as::<_, MoodEntry>(
                    r#"
                    INSERT INTO mood_logs (id, emotion, note, song, author, date)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING *
                    "#,
                )
                .bind(uuid::Uuid::new_v4())
                .bind(&new.emotion)
                .bind(&new.note)
                .bind(&new.song)
                .bind(&new.author)
                .bind(new.date)
                .fetch_one(pool)
                .await
            }
            MoodStore::Memory(store) => Ok(store.insert(new).await),
        }
    }

    pub async fn list_moods(&self) -> Result<Vec<MoodEntry>, sqlx::Error> {
        match self {
            MoodStore::Postgres(pool) => {
                sqlx::query_as::<_, MoodEntry>(
                    "SELECT * FROM mood_logs ORDER BY created_at DESC",
                )
                .fetch_all(pool)
                .await
            }
            MoodStore::Memory(store) => Ok(store.list().await),
        }
    }

    /// Readiness probe: cheap round-trip to the backing store.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            MoodStore::Postgres(pool) => {
                sqlx::query_scalar::<_, i32>("SELECT 1")
                    .fetch_one(pool)
                    .await?;
                Ok(())
            }
            MoodStore::Memory(_) => Ok(()),
        }
    }
}
