//! In-memory community store with seeded fixtures.
//!
//! Seeded posts and comments are immutable; session logs and new comments are
//! appended at the head of their lists and live only as long as the process.
//! Likes are an overlay (a per-session set of liked ids) so the base records
//! are never written, only read.

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::select;
use crate::types::{Comment, CommunityError, Post, SessionLog};

/// Per-session "liked by me" view-state over immutable records.
#[derive(Debug, Default)]
pub struct LikeOverlay {
    liked: HashSet<String>,
}

impl LikeOverlay {
    /// Flip the liked state for a record id. Returns the new state.
    pub fn toggle(&mut self, record_id: &str) -> bool {
        if self.liked.remove(record_id) {
            false
        } else {
            self.liked.insert(record_id.to_string());
            true
        }
    }

    pub fn is_liked(&self, record_id: &str) -> bool {
        self.liked.contains(record_id)
    }

    /// Like count as the UI should display it: base count plus my own like.
    pub fn effective_likes(&self, record_id: &str, base_likes: u32) -> u32 {
        if self.is_liked(record_id) {
            base_likes + 1
        } else {
            base_likes
        }
    }
}

#[derive(Debug)]
struct Inner {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    likes: LikeOverlay,
    next_session_id: u64,
    next_comment_id: u64,
}

/// Thread-safe store over the community collections.
#[derive(Debug)]
pub struct CommunityStore {
    inner: RwLock<Inner>,
}

impl CommunityStore {
    /// Build a store from explicit collections.
    pub fn new(posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                posts,
                comments,
                likes: LikeOverlay::default(),
                next_session_id: 1,
                next_comment_id: 1,
            }),
        }
    }

    /// Store preloaded with the built-in fixture posts and comments.
    pub fn seed() -> Self {
        Self::new(seed_posts(), seed_comments())
    }

    /// The highest-liked post for a location, if any.
    pub fn top_post(&self, location_id: &str) -> Option<Post> {
        let inner = self.inner.read();
        select::top_post(&inner.posts, location_id).cloned()
    }

    /// The highest-liked comment for a location, if any.
    pub fn top_comment(&self, location_id: &str) -> Option<Comment> {
        let inner = self.inner.read();
        select::top_comment(&inner.comments, location_id).cloned()
    }

    /// Up to `limit` comments for a location, newest first.
    pub fn recent_comments(&self, location_id: &str, limit: usize) -> Vec<Comment> {
        let inner = self.inner.read();
        select::recent_comments(&inner.comments, location_id, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Append a new comment at the head of the comment list.
    ///
    /// Empty or whitespace-only content is rejected before it reaches the
    /// collection.
    pub fn add_comment(
        &self,
        location_id: &str,
        author: &str,
        content: &str,
        post_id: Option<&str>,
        date: chrono::NaiveDateTime,
    ) -> Result<Comment, CommunityError> {
        if content.trim().is_empty() {
            return Err(CommunityError::EmptyComment);
        }

        let mut inner = self.inner.write();
        let id = format!("comment-local-{}", inner.next_comment_id);
        inner.next_comment_id += 1;

        let comment = Comment {
            id,
            location_id: location_id.to_string(),
            post_id: post_id.map(str::to_string),
            author: author.to_string(),
            date,
            content: content.trim().to_string(),
            likes: 0,
        };
        inner.comments.insert(0, comment.clone());
        tracing::debug!("Added comment {} for {}", comment.id, location_id);
        Ok(comment)
    }

    /// Record a surf session as a regular post.
    ///
    /// The resulting post is structurally identical to seeded ones, so the
    /// selectors pick it up with no special casing.
    pub fn log_session(&self, log: SessionLog, author: &str) -> Result<Post, CommunityError> {
        if log.notes.trim().is_empty() {
            return Err(CommunityError::EmptyNotes);
        }
        if !(1..=5).contains(&log.rating) {
            return Err(CommunityError::RatingOutOfRange(log.rating));
        }

        let mut inner = self.inner.write();
        let id = format!("session-{}", inner.next_session_id);
        inner.next_session_id += 1;

        let post = Post {
            id,
            location_id: log.location_id,
            author: author.to_string(),
            date: log.date.and_time(log.time),
            image_url: log.image_url.unwrap_or_default(),
            content: log.notes.trim().to_string(),
            likes: 0,
        };
        inner.posts.insert(0, post.clone());
        tracing::info!("Logged session {} at {}", post.id, post.location_id);
        Ok(post)
    }

    /// Flip my like on a record. Returns the new liked state.
    pub fn toggle_like(&self, record_id: &str) -> bool {
        self.inner.write().likes.toggle(record_id)
    }

    /// Like count for display: the base count plus my session-local like.
    pub fn effective_likes(&self, record_id: &str, base_likes: u32) -> u32 {
        self.inner.read().likes.effective_likes(record_id, base_likes)
    }

    pub fn post_count(&self) -> usize {
        self.inner.read().posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.inner.read().comments.len()
    }
}

impl Default for CommunityStore {
    fn default() -> Self {
        Self::seed()
    }
}

fn date(s: &str) -> chrono::NaiveDateTime {
    // Fixture timestamps are compile-time constants; a parse failure here is
    // a programming error surfaced on first use in tests.
    s.parse().unwrap_or_default()
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "post-1".to_string(),
            location_id: "beach-1".to_string(),
            author: "Medina".to_string(),
            date: date("2025-06-09T08:30:00"),
            image_url: "https://agenciabrasil.ebc.com.br/surf/praia-do-futuro.jpeg".to_string(),
            content: "Hoje tava dificil viu haha, praia do futuro tem dia que tá com raiva"
                .to_string(),
            likes: 152,
        },
        Post {
            id: "post-2".to_string(),
            location_id: "beach-2".to_string(),
            author: "Thiago Pinheiro".to_string(),
            date: date("2025-06-06T16:45:00"),
            image_url: "https://i.imgur.com/zGjg3wR.jpeg".to_string(),
            content: "Iracema entregando umas ondas maneiras depois do trabalho! Nem tá muito \
                      cheio."
                .to_string(),
            likes: 89,
        },
        Post {
            id: "post-3".to_string(),
            location_id: "beach-3".to_string(),
            author: "Kelly Slater".to_string(),
            date: date("2025-06-04T07:15:00"),
            image_url: "https://image-cdn.essentiallysports.com/surf/titanzinho.jpg".to_string(),
            content: "The best experience I ever had in a long time, love u Fortaleza".to_string(),
            likes: 217,
        },
    ]
}

fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "comment-1".to_string(),
            location_id: "beach-1".to_string(),
            post_id: Some("post-1".to_string()),
            author: "João Pedro".to_string(),
            date: date("2025-04-01T09:15:00"),
            content: "Hoje tava muito dificil".to_string(),
            likes: 24,
        },
        Comment {
            id: "comment-2".to_string(),
            location_id: "beach-1".to_string(),
            post_id: Some("post-1".to_string()),
            author: "Carla Mendes".to_string(),
            date: date("2025-04-01T10:30:00"),
            content: "Como tava o crowd? Pensando em ir.".to_string(),
            likes: 8,
        },
        Comment {
            id: "comment-3".to_string(),
            location_id: "beach-1".to_string(),
            post_id: None,
            author: "Lucas Martins".to_string(),
            date: date("2025-06-09T08:45:00"),
            content: "Tava impossivel".to_string(),
            likes: 42,
        },
        Comment {
            id: "comment-4".to_string(),
            location_id: "beach-2".to_string(),
            post_id: Some("post-2".to_string()),
            author: "Pedro Alves".to_string(),
            date: date("2025-06-09T17:30:00"),
            content: "as ondas hojes tão muito boas!".to_string(),
            likes: 5,
        },
        Comment {
            id: "comment-5".to_string(),
            location_id: "beach-3".to_string(),
            post_id: Some("post-3".to_string()),
            author: "Bianca Lima".to_string(),
            date: date("2025-06-09T08:00:00"),
            content: "Titanzinho absolutamente perfeito! Hoje mandei meu primeiro aéreo"
                .to_string(),
            likes: 31,
        },
        Comment {
            id: "comment-6".to_string(),
            location_id: "beach-3".to_string(),
            post_id: None,
            author: "Fernando Sousa".to_string(),
            date: date("2025-04-02T11:20:00"),
            content: "Alguém sabe se vale a pena dar um drop essa tarde? O swell ainda tá \
                      segurando?"
                .to_string(),
            likes: 14,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_store_selectors_match_fixtures() {
        let store = CommunityStore::seed();
        assert_eq!(store.top_post("beach-1").unwrap().id, "post-1");
        assert_eq!(store.top_post("beach-3").unwrap().id, "post-3");
        assert_eq!(store.top_comment("beach-1").unwrap().id, "comment-3");
        assert!(store.top_post("beach-404").is_none());
    }

    #[test]
    fn recent_comments_from_seed() {
        let store = CommunityStore::seed();
        let recent = store.recent_comments("beach-1", 5);
        let ids: Vec<&str> = recent.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["comment-3", "comment-2", "comment-1"]);
    }

    #[test]
    fn add_comment_appears_first() {
        let store = CommunityStore::seed();
        let added = store
            .add_comment(
                "beach-1",
                "Rafaela",
                "Bora amanhã cedo?",
                None,
                date("2025-06-10T07:00:00"),
            )
            .unwrap();
        let recent = store.recent_comments("beach-1", 5);
        assert_eq!(recent[0].id, added.id);
    }

    #[test]
    fn empty_comment_rejected() {
        let store = CommunityStore::seed();
        let before = store.comment_count();
        let err = store
            .add_comment("beach-1", "Rafaela", "   ", None, date("2025-06-10T07:00:00"))
            .unwrap_err();
        assert!(matches!(err, CommunityError::EmptyComment));
        assert_eq!(store.comment_count(), before);
    }

    #[test]
    fn logged_session_feeds_selectors() {
        let store = CommunityStore::new(Vec::new(), Vec::new());
        let log = SessionLog {
            date: "2025-06-10".parse().unwrap(),
            time: "06:30:00".parse().unwrap(),
            location_id: "beach-2".to_string(),
            notes: "Sessão curta mas as direitas estavam rolando".to_string(),
            rating: 4,
            image_url: None,
        };
        let post = store.log_session(log, "Rafaela").unwrap();
        assert_eq!(store.top_post("beach-2").unwrap().id, post.id);
        assert_eq!(post.date, date("2025-06-10T06:30:00"));
    }

    #[test]
    fn session_validation_rejects_bad_input() {
        let store = CommunityStore::seed();
        let log = SessionLog {
            date: "2025-06-10".parse().unwrap(),
            time: "06:30:00".parse().unwrap(),
            location_id: "beach-2".to_string(),
            notes: String::new(),
            rating: 4,
            image_url: None,
        };
        assert!(matches!(
            store.log_session(log.clone(), "x"),
            Err(CommunityError::EmptyNotes)
        ));

        let log = SessionLog {
            notes: "ok".to_string(),
            rating: 6,
            ..log
        };
        assert!(matches!(
            store.log_session(log, "x"),
            Err(CommunityError::RatingOutOfRange(6))
        ));
    }

    #[test]
    fn like_overlay_never_mutates_base_records() {
        let store = CommunityStore::seed();
        let base = store.top_post("beach-1").unwrap().likes;

        assert!(store.toggle_like("post-1"));
        assert_eq!(store.effective_likes("post-1", base), base + 1);
        // Base record unchanged
        assert_eq!(store.top_post("beach-1").unwrap().likes, base);

        assert!(!store.toggle_like("post-1"));
        assert_eq!(store.effective_likes("post-1", base), base);
    }

    #[test]
    fn like_overlay_unit() {
        let mut overlay = LikeOverlay::default();
        assert!(!overlay.is_liked("post-9"));
        assert!(overlay.toggle("post-9"));
        assert!(overlay.is_liked("post-9"));
        assert_eq!(overlay.effective_likes("post-9", 10), 11);
        assert!(!overlay.toggle("post-9"));
        assert_eq!(overlay.effective_likes("post-9", 10), 10);
    }
}
