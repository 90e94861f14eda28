use axum::{extract::State, Json};
use chrono::Utc;
use validator::Validate;

use crate::dto::CreateMoodRequest;
use crate::error::{AppError, AppResult};
use crate::models::mood::{MoodEntry, NewMood};
use crate::AppState;

/// POST /mood — store one entry and answer with the persisted record.
/// No duplicate detection: submitting twice stores twice.
pub async fn create_mood(
    State(state): State<AppState>,
    Json(body): Json<CreateMoodRequest>,
) -> AppResult<Json<MoodEntry>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let date = body.date.unwrap_or_else(|| Utc::now().date_naive());

    let entry = state
        .store
        .insert_mood(NewMood {
            emotion: body.emotion,
            note: body.note,
            song: body.song,
            author: body.author,
            date,
        })
        .await?;

    // The write is acknowledged; push the new full snapshot to live
    // subscribers. A failed re-read only degrades the feed, never the
    // submit response.
    match state.store.list_moods().await {
        Ok(entries) => state.feed.publish(entries),
        Err(err) => tracing::warn!(error = %err, "could not rebuild feed snapshot"),
    }

    Ok(Json(entry))
}

/// GET /mood — every entry, newest first by `createdAt`.
pub async fn list_moods(State(state): State<AppState>) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = state.store.list_moods().await?;
    Ok(Json(entries))
}
