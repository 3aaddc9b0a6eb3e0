use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for saving a note.
///
/// With no `id` (or an `id` that matches nothing) a new note is inserted and
/// the store picks the id. With the `id` of an existing note, that note's
/// title and content are replaced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveNoteRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
