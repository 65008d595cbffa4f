//! Location reference data for Soul Surf.
//!
//! Beaches, board-repair services, and surf shops around Fortaleza-CE.
//! Everything here is immutable reference data: seeded once at startup and
//! only ever read afterwards.

pub mod catalog;
pub mod types;

pub use catalog::{CategoryFilter, LocationCatalog};
pub use types::{ContactInfo, Coordinates, Location, LocationCategory, LocationDetails};
