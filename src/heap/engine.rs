//! Max-heap engine.
//!
//! # Algorithm
//!
//! - **Insert**: append at the first free slot (doubling storage when
//!   full), then sift up while the new item beats its parent.
//! - **Extract**: take the root, move the last item into the root slot,
//!   then sift down, swapping with the most urgent child while that child
//!   beats the current node.

use super::config::HeapConfig;
use crate::ordering::{DispatchOrder, UrgencyOrder};
use crate::shipment::ShipmentRecord;

/// Max-heap ordered by an [`UrgencyOrder`].
///
/// The heap exclusively owns its storage; items leave it only through
/// [`extract_max`](Self::extract_max), which hands them to the caller by
/// value.
///
/// # Examples
///
/// ```
/// use u_dispatch::heap::PriorityHeap;
/// use u_dispatch::shipment::{CategorySet, ShipmentRecord};
///
/// let set = CategorySet::default();
/// let mut heap = PriorityHeap::new();
/// heap.insert(ShipmentRecord::new(1, 9, 3, 5, None, &set).unwrap());
/// heap.insert(ShipmentRecord::new(2, 5, 3, 5, None, &set).unwrap());
///
/// assert_eq!(heap.extract_max().map(|r| r.id()), Some(1));
/// assert_eq!(heap.extract_max().map(|r| r.id()), Some(2));
/// assert!(heap.extract_max().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityHeap<T, P = DispatchOrder> {
    slots: Vec<T>,
    capacity: usize,
    policy: P,
}

impl PriorityHeap<ShipmentRecord, DispatchOrder> {
    /// Creates an empty shipment heap with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&HeapConfig::default())
    }

    /// Creates an empty shipment heap with the given configuration.
    pub fn with_config(config: &HeapConfig) -> Self {
        Self::with_policy(config, DispatchOrder)
    }
}

impl Default for PriorityHeap<ShipmentRecord, DispatchOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: UrgencyOrder<T>> PriorityHeap<T, P> {
    /// Creates an empty heap ordered by `policy`.
    pub fn with_policy(config: &HeapConfig, policy: P) -> Self {
        let capacity = config.effective_capacity();
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    /// Inserts an item and restores heap order.
    pub fn insert(&mut self, item: T) {
        if self.slots.len() == self.capacity {
            self.grow();
        }
        self.slots.push(item);
        self.sift_up(self.slots.len() - 1);
    }

    /// Removes and returns the most urgent item, or `None` if empty.
    pub fn extract_max(&mut self) -> Option<T> {
        if self.slots.is_empty() {
            return None;
        }
        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let root = self.slots.pop();
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        root
    }

    /// Returns the most urgent item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.slots.first()
    }

    /// Number of stored items.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current logical capacity. Only ever grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates stored items in heap layout order (not sorted).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Checks that no parent is less urgent than either of its children.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.slots.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self
                .policy
                .is_more_urgent(&self.slots[i], &self.slots[parent])
        })
    }

    fn grow(&mut self) {
        let new_capacity = (self.capacity * 2).max(1);
        log::debug!(
            "heap full at {} items, growing capacity {} -> {}",
            self.slots.len(),
            self.capacity,
            new_capacity
        );
        self.slots.reserve_exact(new_capacity - self.slots.len());
        self.capacity = new_capacity;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self
                .policy
                .is_more_urgent(&self.slots[index], &self.slots[parent])
            {
                break;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut best = index;
            if self.policy.is_more_urgent(&self.slots[left], &self.slots[best]) {
                best = left;
            }
            if right < len && self.policy.is_more_urgent(&self.slots[right], &self.slots[best]) {
                best = right;
            }

            if best == index {
                break;
            }
            self.slots.swap(index, best);
            index = best;
        }
    }
}

impl<T: Clone, P: UrgencyOrder<T> + Clone> PriorityHeap<T, P> {
    /// Returns every item, most urgent first, leaving `self` untouched.
    ///
    /// Works on an independent copy of the heap, so the source keeps its
    /// size, root and internal layout.
    pub fn snapshot_sorted_descending(&self) -> Vec<T> {
        let mut copy = self.clone();
        let mut sorted = Vec::with_capacity(copy.size());
        while let Some(item) = copy.extract_max() {
            sorted.push(item);
        }
        sorted
    }
}
