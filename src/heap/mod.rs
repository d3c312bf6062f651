//! Array-backed max-heap over dispatchable items.
//!
//! [`PriorityHeap`] keeps the most urgent item (under a pluggable
//! [`UrgencyOrder`](crate::ordering::UrgencyOrder)) at the root of an
//! implicit binary tree stored in a contiguous array:
//!
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! ```
//!
//! # Complexity
//!
//! | Operation                    | Cost                         |
//! |------------------------------|------------------------------|
//! | `insert`                     | O(log n), growth O(n) amortized |
//! | `extract_max`                | O(log n)                     |
//! | `peek`, `size`               | O(1)                         |
//! | `snapshot_sorted_descending` | O(n log n), source untouched |
//!
//! Storage grows by doubling and never shrinks.
//!
//! # References
//!
//! Williams (1964), "Algorithm 232: Heapsort"

mod config;
mod engine;

pub use config::{HeapConfig, DEFAULT_INITIAL_CAPACITY};
pub use engine::PriorityHeap;
