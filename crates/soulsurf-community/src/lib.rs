//! Community content for Soul Surf: posts, comments, and surf-session logs.
//!
//! The backing collections are seeded fixtures; session logs and new comments
//! are appended in memory for the lifetime of the process and never persisted.

pub mod select;
pub mod store;
pub mod types;

pub use select::{recent_comments, top_comment, top_post};
pub use store::{CommunityStore, LikeOverlay};
pub use types::{Comment, CommunityError, Post, SessionLog};
