//! Game-session data models.
//!
//! `GameSession` is the wire record submitted to the backend session
//! endpoint (snake_case JSON, ISO-8601 timestamps). `StoredSession` is the
//! backend's created-record representation echoed back on success.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSession {
    pub user_id: String,
    pub game_id: String,
    pub started_at: DateTime<Utc>,
    pub success: bool,
    pub points: u32,
    pub duration_seconds: u64,
    /// Opaque per-game telemetry; the backend stores it verbatim.
    pub raw_data: Value,
    /// Client-generated correlation id so the backend can spot duplicate
    /// submissions of the same play-through.
    pub client_ref: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub id: String,
    pub user_id: String,
    pub game_id: String,
    pub started_at: DateTime<Utc>,
    pub success: bool,
    pub points: u32,
    pub duration_seconds: u64,
    pub raw_data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The resolved user exposed by the auth collaborator. Only `id` is
/// required; the display name rides along for logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
        }
    }
}
