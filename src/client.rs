//! Rust client for the mood API, pull model: submit a mood, then refetch
//! the full list. The mirrored list in [`MoodState`] is replaced wholesale
//! on every successful fetch and left untouched on failure — stale data
//! beats a blank timeline.

use reqwest::StatusCode;

use crate::dto::CreateMoodRequest;
use crate::models::mood::MoodEntry;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Blocked before any network call; submitting without an emotion is a
    /// user-input problem, not a server one.
    #[error("an emotion is required")]
    MissingEmotion,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with its `{"error": ...}` envelope.
    #[error("server error ({status}): {message}")]
    Server { status: StatusCode, message: String },
}

pub struct MoodClient {
    http: reqwest::Client,
    base_url: String,
}

impl MoodClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// POST /mood. Repeated calls create repeated records.
    pub async fn submit(&self, draft: &CreateMoodRequest) -> Result<MoodEntry, ClientError> {
        if draft.emotion.trim().is_empty() {
            return Err(ClientError::MissingEmotion);
        }

        let response = self
            .http
            .post(format!("{}/mood", self.base_url))
            .json(draft)
            .send()
            .await?;
        parse(response).await
    }

    /// GET /mood — the full list, newest first.
    pub async fn fetch_all(&self) -> Result<Vec<MoodEntry>, ClientError> {
        let response = self
            .http
            .get(format!("{}/mood", self.base_url))
            .send()
            .await?;
        parse(response).await
    }

    /// Refetch and install a fresh snapshot. On failure the state keeps
    /// whatever it already had.
    pub async fn refresh(&self, state: &mut MoodState) -> Result<(), ClientError> {
        let entries = self.fetch_all().await?;
        state.replace(entries);
        Ok(())
    }

    /// The submit flow: write, then refetch. A failed refetch does not
    /// undo the submit — the entry is stored and will show up on the next
    /// successful refresh.
    pub async fn submit_and_refresh(
        &self,
        draft: &CreateMoodRequest,
        state: &mut MoodState,
    ) -> Result<MoodEntry, ClientError> {
        let entry = self.submit(draft).await?;
        if let Err(err) = self.refresh(state).await {
            tracing::warn!(error = %err, "refetch after submit failed, keeping stale list");
        }
        Ok(entry)
    }
}

async fn parse<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<crate::dto::ErrorResponse>().await {
        Ok(envelope) => envelope.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    Err(ClientError::Server { status, message })
}

/// The client-side mirror of the timeline.
///
/// Starts out loading; the first successful snapshot clears the flag for
/// good. Later refresh failures neither blank the list nor flip it back.
#[derive(Debug)]
pub struct MoodState {
    entries: Vec<MoodEntry>,
    loading: bool,
}

impl MoodState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
        }
    }

    pub fn replace(&mut self, entries: Vec<MoodEntry>) {
        self.entries = entries;
        self.loading = false;
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Default for MoodState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn state_starts_loading_until_first_snapshot() {
        let mut state = MoodState::new();
        assert!(state.is_loading());
        assert!(state.entries().is_empty());

        state.replace(vec![entry("happy")]);
        assert!(!state.is_loading());
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn replace_swaps_the_whole_list() {
        let mut state = MoodState::new();
        state.replace(vec![entry("happy"), entry("sad")]);
        state.replace(vec![entry("calm")]);
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.entries()[0].emotion, "calm");
    }

    #[tokio::test]
    async fn submit_blocks_empty_emotion_before_any_request() {
        // Deliberately unroutable base URL: the validation must fire first.
        let client = MoodClient::new("http://127.0.0.1:1");
        let draft = CreateMoodRequest {
            emotion: "  ".into(),
            ..Default::default()
        };
        match client.submit(&draft).await {
            Err(ClientError::MissingEmotion) => {}
            other => panic!("expected MissingEmotion, got {other:?}"),
        }
    }
}
