//! Shipment records and their validated construction.
//!
//! A [`ShipmentRecord`] is an immutable value describing one cargo item.
//! Its dispatch score is derived once, at construction time:
//!
//! ```text
//! priority = urgency * 10 + weight * 2 + category * 5
//! ```
//!
//! Construction is the only way to obtain a record and it either yields a
//! fully valid record or a [`ValidationError`]. The set of recognized
//! category codes is supplied explicitly through a [`CategorySet`]
//! (default `{9, 5, 3}`), so callers can extend it without touching the
//! scoring code.

mod config;
mod types;

pub use config::{CategoryParseError, CategorySet, DEFAULT_CATEGORIES};
pub use types::{ShipmentRecord, ValidationError, MAX_URGENCY, MIN_URGENCY};
