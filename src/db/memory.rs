use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::mood::{MoodEntry, NewMood};

/// Vec-backed mood store for local development and tests.
///
/// The record is fully built before the write lock is taken, so readers
/// never observe a partially written entry.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<Vec<MoodEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, new: NewMood) -> MoodEntry {
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            emotion: new.emotion,
            note: new.note,
            song: new.song,
            author: new.author,
            date: new.date,
            created_at: Utc::now(),
        };
        self.entries.write().await.push(entry.clone());
        entry
    }

    pub async fn list(&self) -> Vec<MoodEntry> {
        let mut entries = self.entries.read().await.clone();
        // Stable sort keeps insertion order for equal timestamps.
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft(emotion: &str) -> NewMood {
        NewMood {
            emotion: emotion.into(),
            note: None,
            song: None,
            author: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids_and_grows_by_one() {
        let store = MemoryStore::new();
        let first = store.insert(draft("happy")).await;
        assert_eq!(store.list().await.len(), 1);

        let second = store.insert(draft("sad")).await;
        assert_eq!(store.list().await.len(), 2);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn insert_round_trips_submitted_fields() {
        let store = MemoryStore::new();
        let entry = store
            .insert(NewMood {
                emotion: "happy".into(),
                note: Some("great day".into()),
                song: Some("Clair de Lune".into()),
                author: Some("Alice".into()),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            })
            .await;

        assert_eq!(entry.emotion, "happy");
        assert_eq!(entry.note.as_deref(), Some("great day"));
        assert_eq!(entry.song.as_deref(), Some("Clair de Lune"));
        assert_eq!(entry.author.as_deref(), Some("Alice"));
        assert_eq!(entry.date.to_string(), "2024-01-01");
    }

    #[tokio::test]
    async fn list_is_created_at_descending() {
        let store = MemoryStore::new();
        for emotion in ["calm", "tired", "loved"] {
            store.insert(draft(emotion)).await;
        }

        let listed = store.list().await;
        assert_eq!(listed.len(), 3);
        for pair in listed.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
