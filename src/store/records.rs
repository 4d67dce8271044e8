//! Persisted document shapes for thoughts and their embedded reactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reaction embedded in a thought document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub reaction_id: Uuid,
    pub reaction_body: String,
    pub user_id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A thought document as stored in the thought collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub thought_text: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    /// Documents written without reactions deserialize as an empty list
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl ThoughtRecord {
    /// Creates a reaction-less thought stamped with the current time.
    pub fn new(thought_text: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            thought_text: thought_text.into(),
            username: username.into(),
            user_id: None,
            created_at: Utc::now(),
            reactions: Vec::new(),
        }
    }
}
