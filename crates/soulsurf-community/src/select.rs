//! Pure query functions over post and comment collections.
//!
//! All three selectors are deterministic: same input slice and arguments,
//! same output. They never allocate new records and perform no I/O. Unknown
//! location ids simply produce empty results.

use crate::types::{Comment, Post};

/// The highest-liked post for a location.
///
/// Ties are broken by position: the post appearing first in the source slice
/// wins.
pub fn top_post<'a>(posts: &'a [Post], location_id: &str) -> Option<&'a Post> {
    posts
        .iter()
        .filter(|p| p.location_id == location_id)
        .fold(None, |best: Option<&Post>, p| match best {
            Some(b) if p.likes > b.likes => Some(p),
            None => Some(p),
            _ => best,
        })
}

/// The highest-liked comment for a location; same tie rule as [`top_post`].
pub fn top_comment<'a>(comments: &'a [Comment], location_id: &str) -> Option<&'a Comment> {
    comments
        .iter()
        .filter(|c| c.location_id == location_id)
        .fold(None, |best: Option<&Comment>, c| match best {
            Some(b) if c.likes > b.likes => Some(c),
            None => Some(c),
            _ => best,
        })
}

/// Up to `limit` comments for a location, newest first.
///
/// The sort is stable, so comments sharing a timestamp keep their source
/// order. `limit == 0` yields an empty vec.
pub fn recent_comments<'a>(
    comments: &'a [Comment],
    location_id: &str,
    limit: usize,
) -> Vec<&'a Comment> {
    let mut matched: Vec<&Comment> = comments
        .iter()
        .filter(|c| c.location_id == location_id)
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched.truncate(limit);
    matched
}
