use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One journaled mood record. Records are immutable once stored — there is
/// no update or delete surface anywhere in the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: Uuid,
    /// Open label set: recognized labels get a color/emoji from `palette`,
    /// anything else is stored as-is and displayed neutrally.
    pub emotion: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub song: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,
    /// The day the mood was felt, not the day it was written.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Fields of a record the store has not yet assigned an identity to.
/// `id` and `created_at` are filled in by the store on insert.
#[derive(Debug, Clone)]
pub struct NewMood {
    pub emotion: String,
    pub note: Option<String>,
    pub song: Option<String>,
    pub author: Option<String>,
    pub date: NaiveDate,
}
