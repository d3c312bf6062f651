//! Heap configuration.

/// Initial capacity used when none (or zero) is requested.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Configuration for a [`PriorityHeap`](super::PriorityHeap).
///
/// # Examples
///
/// ```
/// use u_dispatch::heap::HeapConfig;
///
/// let config = HeapConfig::default().with_initial_capacity(4);
/// assert_eq!(config.effective_capacity(), 4);
///
/// // Zero is coerced to the default.
/// let config = HeapConfig::default().with_initial_capacity(0);
/// assert_eq!(config.effective_capacity(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapConfig {
    /// Number of slots allocated up front. `0` means the default.
    pub initial_capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl HeapConfig {
    pub fn with_initial_capacity(mut self, n: usize) -> Self {
        self.initial_capacity = n;
        self
    }

    /// The capacity a new heap actually starts with. Always positive.
    pub fn effective_capacity(&self) -> usize {
        if self.initial_capacity == 0 {
            DEFAULT_INITIAL_CAPACITY
        } else {
            self.initial_capacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HeapConfig::default();
        assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
        assert_eq!(config.effective_capacity(), DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn test_explicit_capacity() {
        assert_eq!(HeapConfig::default().with_initial_capacity(1).effective_capacity(), 1);
    }

    #[test]
    fn test_zero_capacity_coerced() {
        let config = HeapConfig { initial_capacity: 0 };
        assert_eq!(config.effective_capacity(), DEFAULT_INITIAL_CAPACITY);
    }
}
