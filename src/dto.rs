//! # Lunaria — Request/Response DTOs
//!
//! API contract types shared by the handlers and the Rust client.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body
//! - `*Response` → serialized to client JSON
//! - All validation is expressed via `validator` derive macros
//!
//! Successful mood responses are the stored `MoodEntry` verbatim, so the
//! only response type here is the error envelope.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// POST /mood
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateMoodRequest {
    #[validate(length(min = 1, max = 64, message = "emotion is required"))]
    pub emotion: String,

    #[validate(length(max = 2000, message = "note too long"))]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,

    #[validate(length(max = 256, message = "song too long"))]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub song: Option<String>,

    #[validate(length(max = 100, message = "author name too long"))]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,

    /// Defaults to the submission day when omitted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<NaiveDate>,
}

/// Stable error envelope — every error response uses this shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
