//! Dispatch tie-break chain for shipment records.

use std::cmp::Ordering;

use super::types::UrgencyOrder;
use crate::shipment::ShipmentRecord;

/// Orders [`ShipmentRecord`]s by priority, urgency, weight, then id.
///
/// # Examples
///
/// ```
/// use u_dispatch::ordering::{DispatchOrder, UrgencyOrder};
/// use u_dispatch::shipment::{CategorySet, ShipmentRecord};
///
/// let set = CategorySet::default();
/// let a = ShipmentRecord::new(3, 5, 2, 4, None, &set).unwrap();
/// let b = ShipmentRecord::new(7, 5, 2, 4, None, &set).unwrap();
///
/// // Full tie on score, urgency and weight: lower id wins.
/// assert!(DispatchOrder.is_more_urgent(&a, &b));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOrder;

impl UrgencyOrder<ShipmentRecord> for DispatchOrder {
    fn compare(&self, a: &ShipmentRecord, b: &ShipmentRecord) -> Ordering {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| a.urgency().cmp(&b.urgency()))
            .then_with(|| a.weight().cmp(&b.weight()))
            // Reversed: the lower id is the more urgent one.
            .then_with(|| b.id().cmp(&a.id()))
    }
}
