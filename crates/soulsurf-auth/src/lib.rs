//! Mock authentication for Soul Surf.
//!
//! The product has no real accounts: logging in flips a single flag that
//! survives restarts, nothing more. The flag lives behind the
//! [`SessionStore`] trait so callers never touch process-global state and a
//! real identity provider can slot in later.

pub mod session;

pub use session::{FileSessionStore, SessionError, SessionStore};
