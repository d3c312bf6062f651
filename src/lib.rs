//! Priority dispatch engine for pending shipments.
//!
//! Selects, among pending shipment requests, the one needing the most
//! urgent dispatch:
//!
//! - **Shipment**: immutable, validated records with a derived priority
//!   score (`urgency * 10 + weight * 2 + category * 5`).
//! - **Ordering**: the tie-break chain (priority, urgency, weight, then
//!   lowest id) as a pluggable total order.
//! - **Heap**: array-backed max-heap with doubling growth, peek/extract
//!   and a non-destructive sorted snapshot.
//! - **Loader**: batch import from comma-separated text, reporting bad
//!   lines without aborting.
//! - **Session**: interactive menu over any input/output pair.
//!
//! # Architecture
//!
//! `shipment` and `ordering` are leaves; `heap` depends only on
//! `ordering`'s trait (and defaults to shipments). `loader` and `session`
//! are front ends: they build records through validated construction and
//! talk to the heap only through its public operations.
//!
//! # Example
//!
//! ```
//! use u_dispatch::heap::PriorityHeap;
//! use u_dispatch::shipment::{CategorySet, ShipmentRecord};
//!
//! let categories = CategorySet::default();
//! let mut heap = PriorityHeap::new();
//!
//! for (id, category, urgency, weight) in [(3, 5, 2, 4), (7, 5, 2, 4), (1, 3, 1, 0)] {
//!     heap.insert(ShipmentRecord::new(id, category, urgency, weight, None, &categories).unwrap());
//! }
//!
//! let order: Vec<i64> = heap.snapshot_sorted_descending().iter().map(|r| r.id()).collect();
//! assert_eq!(order, vec![3, 7, 1]);
//! assert_eq!(heap.size(), 3);
//! ```

pub mod heap;
pub mod loader;
pub mod ordering;
pub mod session;
pub mod shipment;
