//! Interactive dispatch console.
//!
//! A [`Session`] owns the heap and a [`Loader`](crate::loader::Loader)
//! and drives them from a line-oriented menu over any `BufRead` /
//! `Write` pair:
//!
//! ```text
//! 1 - Load shipments from CSV file
//! 2 - Insert shipment
//! 3 - Show most urgent shipment
//! 4 - Remove most urgent shipment
//! 5 - Show all shipments by priority
//! 6 - Exit
//! ```
//!
//! There is no process-wide state; everything lives in the session value.

mod menu;
mod runner;

pub use menu::{MenuAction, UnknownAction};
pub use runner::{Flow, Session, SessionError};
