//! Batch import of shipment records from delimited text.
//!
//! Input is comma-separated, five fields per line:
//!
//! ```text
//! id,category,urgency,weight,description
//! 1,9,3,5,vaccines
//! 2,5,3,5,"gauze, sterile"
//! ```
//!
//! - blank lines are ignored
//! - a first line whose first field is not an integer is a header and is skipped
//! - a line with fewer than five fields, a non-integer numeric field, or
//!   values that fail [`ShipmentRecord`](crate::shipment::ShipmentRecord)
//!   validation is reported in the [`LoadReport`] and skipped
//!
//! A bad line never aborts the batch. Only I/O failures end a load early.

mod reader;
mod types;

pub use reader::Loader;
pub use types::{LoadError, LoadReport, ParseError, RejectReason, RejectedLine};
