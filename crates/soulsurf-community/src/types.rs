//! Post, comment, and session-log types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A community post attached to a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub location_id: String,
    pub author: String,
    pub date: NaiveDateTime,
    pub image_url: String,
    pub content: String,
    pub likes: u32,
}

/// A comment attached to a location, optionally referencing a post.
///
/// `post_id` is a weak reference: it is only ever used for lookup and no
/// ownership or cascade semantics hang off it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub location_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    pub author: String,
    pub date: NaiveDateTime,
    pub content: String,
    pub likes: u32,
}

/// Payload produced by the session-logging form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location_id: String,
    pub notes: String,
    /// Session rating, 1 to 5.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Errors rejected at the community-store boundary.
#[derive(Debug, Error)]
pub enum CommunityError {
    #[error("Comment text cannot be empty")]
    EmptyComment,

    #[error("Session notes cannot be empty")]
    EmptyNotes,

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

impl CommunityError {
    /// User-friendly message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            CommunityError::EmptyComment => "Write something before posting your comment.",
            CommunityError::EmptyNotes => "Write a few notes about your session first.",
            CommunityError::RatingOutOfRange(_) => "Pick a rating between 1 and 5.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_fixture_shaped_dates() {
        let post = Post {
            id: "post-1".to_string(),
            location_id: "beach-1".to_string(),
            author: "Medina".to_string(),
            date: "2025-06-09T08:30:00".parse().unwrap(),
            image_url: "https://example.com/p.jpg".to_string(),
            content: "Hoje tava dificil viu".to_string(),
            likes: 152,
        };
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("2025-06-09T08:30:00"));
        assert!(json.contains("\"likes\":152"));
    }

    #[test]
    fn comment_without_post_reference_omits_field() {
        let comment = Comment {
            id: "comment-3".to_string(),
            location_id: "beach-1".to_string(),
            post_id: None,
            author: "Lucas Martins".to_string(),
            date: "2025-06-09T08:45:00".parse().unwrap(),
            content: "Tava impossivel".to_string(),
            likes: 42,
        };
        let json = serde_json::to_string(&comment).unwrap();
        assert!(!json.contains("post_id"));
    }

    #[test]
    fn error_messages_are_actionable() {
        assert!(CommunityError::EmptyComment.user_message().contains("comment"));
        assert!(CommunityError::RatingOutOfRange(9).user_message().contains("1 and 5"));
    }
}
