//! Request DTOs for the thought feed API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;
use uuid::Uuid;

use crate::store::ThoughtUpdate;

/// Maximum thought length in characters
pub const MAX_THOUGHT_LENGTH: usize = 280;

/// Raw pagination query for `GET /api/thoughts`.
///
/// Both values stay as strings here; `Pagination::from_query` turns them into
/// effective integers so malformed input defaults instead of being rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl PageQuery {
    /// Builds a query from raw `name=value` pairs.
    ///
    /// When a name repeats, the first occurrence wins; unknown names are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Request body for `POST /api/thoughts` and `PUT /api/thoughts/:id`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThoughtRequest {
    pub thought_text: String,
    pub username: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

impl CreateThoughtRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let length = self.thought_text.chars().count();
        if length == 0 {
            return Some("thoughtText cannot be empty".to_string());
        }
        if length > MAX_THOUGHT_LENGTH {
            return Some(format!(
                "thoughtText exceeds maximum length of {} characters",
                MAX_THOUGHT_LENGTH
            ));
        }
        if self.username.trim().is_empty() {
            return Some("username cannot be empty".to_string());
        }
        None
    }

    /// Field replacements for an existing thought.
    pub fn into_update(self) -> ThoughtUpdate {
        ThoughtUpdate {
            thought_text: self.thought_text,
            username: self.username,
            user_id: self.user_id,
        }
    }
}
