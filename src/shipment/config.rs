//! Recognized category codes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Category codes recognized when no explicit set is configured.
pub const DEFAULT_CATEGORIES: [i64; 3] = [9, 5, 3];

/// Error returned when a category list cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryParseError {
    /// The list contained no codes at all.
    #[error("category list is empty")]
    Empty,

    /// One of the comma-separated items is not an integer.
    #[error("invalid category code '{0}'")]
    InvalidCode(String),
}

/// The explicit set of category codes a [`ShipmentRecord`] may carry.
///
/// # Examples
///
/// ```
/// use u_dispatch::shipment::CategorySet;
///
/// let defaults = CategorySet::default();
/// assert!(defaults.contains(9));
/// assert!(!defaults.contains(4));
///
/// let custom: CategorySet = "9, 5, 3, 1".parse().unwrap();
/// assert_eq!(custom.len(), 4);
/// ```
///
/// [`ShipmentRecord`]: super::ShipmentRecord
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategorySet {
    codes: BTreeSet<i64>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::from_codes(DEFAULT_CATEGORIES)
    }
}

impl CategorySet {
    /// Builds a set from any collection of codes. Duplicates collapse.
    pub fn from_codes<I: IntoIterator<Item = i64>>(codes: I) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    pub fn contains(&self, code: i64) -> bool {
        self.codes.contains(&code)
    }

    /// Codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.codes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.codes.is_empty() {
            return Err("category set must contain at least one code".into());
        }
        Ok(())
    }
}

impl FromStr for CategorySet {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut codes = BTreeSet::new();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let code = item
                .parse::<i64>()
                .map_err(|_| CategoryParseError::InvalidCode(item.to_string()))?;
            codes.insert(code);
        }
        if codes.is_empty() {
            return Err(CategoryParseError::Empty);
        }
        Ok(Self { codes })
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for code in self.codes.iter().rev() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{code}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let set = CategorySet::default();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 5, 9]);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_from_codes_collapses_duplicates() {
        let set = CategorySet::from_codes([9, 5, 3, 1, 9]);
        assert_eq!(set.len(), 4);
        assert!(set.contains(1));
    }

    #[test]
    fn test_parse_list() {
        let set: CategorySet = " 2 ,4,,8 ".parse().unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 4, 8]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "9,x".parse::<CategorySet>(),
            Err(CategoryParseError::InvalidCode("x".into()))
        );
        assert_eq!(" , ".parse::<CategorySet>(), Err(CategoryParseError::Empty));
    }

    #[test]
    fn test_validate_empty() {
        let set = CategorySet::from_codes(Vec::<i64>::new());
        assert!(set.is_empty());
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_display_descending() {
        assert_eq!(CategorySet::default().to_string(), "9,5,3");
    }
}
