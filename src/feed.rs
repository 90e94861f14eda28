use std::sync::Arc;

use tokio::sync::broadcast;

use crate::models::mood::MoodEntry;

/// A full, ordered copy of the timeline. The feed never sends deltas.
pub type Snapshot = Arc<Vec<MoodEntry>>;

/// Fan-out channel for live timeline updates. Every write to the store is
/// followed by one `publish` of the complete re-read list; WebSocket
/// sessions and in-process subscribers each hold their own receiver.
#[derive(Clone)]
pub struct MoodFeed {
    tx: broadcast::Sender<Snapshot>,
}

impl MoodFeed {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Push the current full list to all live subscribers. Having no
    /// subscribers is not an error.
    pub fn publish(&self, entries: Vec<MoodEntry>) {
        let _ = self.tx.send(Arc::new(entries));
    }

    pub fn subscribe(&self) -> FeedSubscription {
        FeedSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for MoodFeed {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Live handle onto the feed. Dropping it releases the subscription.
pub struct FeedSubscription {
    rx: broadcast::Receiver<Snapshot>,
}

impl FeedSubscription {
    /// Next snapshot, or `None` once the feed itself is gone. A subscriber
    /// that lags skips straight to newer snapshots — each message is a full
    /// list, so the missed ones are already obsolete.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        loop {
            match self.rx.recv().await {
                Ok(snapshot) => return Some(snapshot),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mood::MoodEntry;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn entry(emotion: &str) -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            emotion: emotion.into(),
            note: None,
            song: None,
            author: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn subscribers_receive_full_snapshots() {
        let feed = MoodFeed::default();
        let mut sub = feed.subscribe();

        feed.publish(vec![entry("happy"), entry("sad")]);

        let snapshot = sub.recv().await.expect("feed closed");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].emotion, "happy");
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_fine() {
        let feed = MoodFeed::default();
        feed.publish(vec![entry("calm")]);

        // A subscription opened afterwards only sees later snapshots.
        let mut sub = feed.subscribe();
        feed.publish(vec![entry("calm"), entry("loved")]);
        let snapshot = sub.recv().await.expect("feed closed");
        assert_eq!(snapshot.len(), 2);
    }
}
