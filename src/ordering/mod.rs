//! Total ordering of shipments by dispatch urgency.
//!
//! Records are ranked by a tie-break chain. Each key is only consulted
//! when every earlier key ties:
//!
//! 1. higher `priority`
//! 2. higher `urgency`
//! 3. higher `weight`
//! 4. lower `id`
//!
//! The last key makes the relation a strict total order for records with
//! distinct ids, so dispatch order is reproducible for any input.
//!
//! The heap is generic over [`UrgencyOrder`]; [`DispatchOrder`] is the
//! chain above for [`ShipmentRecord`](crate::shipment::ShipmentRecord).

mod policy;
mod types;

pub use policy::DispatchOrder;
pub use types::UrgencyOrder;
