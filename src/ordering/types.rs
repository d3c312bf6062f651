//! Core trait for urgency orderings.

use std::cmp::Ordering;

/// A comparison deciding which of two items must be dispatched first.
///
/// `compare(a, b)` returns [`Ordering::Greater`] when `a` is **more**
/// urgent than `b`. Implementations must be a total order: consistent,
/// antisymmetric and transitive, otherwise heap operations will not
/// maintain their ordering guarantees.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_dispatch::ordering::UrgencyOrder;
///
/// // Smallest number first.
/// struct Ascending;
///
/// impl UrgencyOrder<u32> for Ascending {
///     fn compare(&self, a: &u32, b: &u32) -> Ordering {
///         b.cmp(a)
///     }
/// }
///
/// assert!(Ascending.is_more_urgent(&1, &2));
/// ```
pub trait UrgencyOrder<T> {
    /// Compares two items by urgency. `Greater` means `a` goes first.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` is strictly more urgent than `b`.
    fn is_more_urgent(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}
