//! The shipment record value type.

use std::fmt;

use super::config::CategorySet;

/// Lowest accepted urgency level.
pub const MIN_URGENCY: i64 = 1;

/// Highest accepted urgency level.
pub const MAX_URGENCY: i64 = 3;

/// Reason a [`ShipmentRecord`] could not be constructed.
///
/// Each variant carries the offending value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown category {category}")]
    UnknownCategory { category: i64 },

    #[error("urgency {urgency} outside [1, 3]")]
    UrgencyOutOfRange { urgency: i64 },

    #[error("negative weight {weight}")]
    NegativeWeight { weight: i64 },

    /// The derived score does not fit in an `i64`.
    #[error("priority overflows for category {category}, urgency {urgency}, weight {weight}")]
    PriorityOverflow {
        category: i64,
        urgency: i64,
        weight: i64,
    },
}

/// One cargo item awaiting dispatch.
///
/// Fields are private and there are no setters: once built, a record
/// (including its derived `priority`) never changes.
///
/// # Examples
///
/// ```
/// use u_dispatch::shipment::{CategorySet, ShipmentRecord};
///
/// let categories = CategorySet::default();
/// let record = ShipmentRecord::new(1, 9, 3, 5, Some("vaccines".into()), &categories).unwrap();
/// assert_eq!(record.priority(), 85);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShipmentRecord {
    id: i64,
    category: i64,
    urgency: i64,
    weight: i64,
    description: Option<String>,
    priority: i64,
}

impl ShipmentRecord {
    /// Validates the inputs and builds a record.
    ///
    /// Checks run in order: category membership, urgency range, weight
    /// sign, then score overflow. The first failing check is reported.
    pub fn new(
        id: i64,
        category: i64,
        urgency: i64,
        weight: i64,
        description: Option<String>,
        categories: &CategorySet,
    ) -> Result<Self, ValidationError> {
        if !categories.contains(category) {
            return Err(ValidationError::UnknownCategory { category });
        }
        if !(MIN_URGENCY..=MAX_URGENCY).contains(&urgency) {
            return Err(ValidationError::UrgencyOutOfRange { urgency });
        }
        if weight < 0 {
            return Err(ValidationError::NegativeWeight { weight });
        }
        let priority = Self::compute_priority(category, urgency, weight).ok_or(
            ValidationError::PriorityOverflow {
                category,
                urgency,
                weight,
            },
        )?;

        Ok(Self {
            id,
            category,
            urgency,
            weight,
            description,
            priority,
        })
    }

    /// Dispatch score: `urgency * 10 + weight * 2 + category * 5`.
    ///
    /// Returns `None` on `i64` overflow.
    pub fn compute_priority(category: i64, urgency: i64, weight: i64) -> Option<i64> {
        urgency
            .checked_mul(10)?
            .checked_add(weight.checked_mul(2)?)?
            .checked_add(category.checked_mul(5)?)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn category(&self) -> i64 {
        self.category
    }

    pub fn urgency(&self) -> i64 {
        self.urgency
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }
}

impl fmt::Display for ShipmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} priority={} category={} urgency={} weight={}",
            self.id, self.priority, self.category, self.urgency, self.weight
        )?;
        if let Some(description) = &self.description {
            write!(f, " \"{description}\"")?;
        }
        Ok(())
    }
}
