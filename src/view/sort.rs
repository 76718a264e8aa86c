use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single sortable cell.
///
/// Text that parses as a number on both sides of a comparison is compared
/// numerically — formatted percentage strings like `"12.50"` sort by value,
/// not lexically. Everything else compares as text.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    fn as_number(&self) -> Option<f64> {
        match self {
            SortValue::Number(n) => Some(*n),
            SortValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn compare(&self, other: &SortValue) -> Ordering {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        }
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            // Mixed unparseable text vs number: numbers sort first.
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
        }
    }
}

/// Extracts the sortable cell for a column of a table row.
pub trait SortColumn<T> {
    fn value(&self, row: &T) -> SortValue;
}

/// Columns sort borrowed rows too; filtered views hold `&KeywordRecord`.
impl<T, K: SortColumn<T>> SortColumn<&T> for K {
    fn value(&self, row: &&T) -> SortValue {
        SortColumn::value(self, *row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current sort key and direction for one table.
///
/// `request` carries the header-click semantics: a repeated key flips the
/// direction, a new key resets to ascending. With no key set the table keeps
/// its natural order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SortConfig<K> {
    pub key: Option<K>,
    pub direction: SortDirection,
}

impl<K> Default for SortConfig<K> {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl<K: PartialEq + Copy> SortConfig<K> {
    pub fn request(&self, key: K) -> Self {
        let direction = if self.key == Some(key) {
            self.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        Self {
            key: Some(key),
            direction,
        }
    }
}

/// Stable, direction-aware sort of a table by its configured column.
///
/// Stability is load-bearing: ties keep their prior relative order, so a
/// previous sort acts as the secondary key the analyst expects.
pub fn apply_sort<T, K>(rows: &mut [T], config: &SortConfig<K>)
where
    K: SortColumn<T>,
{
    let Some(key) = &config.key else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = key.value(a).compare(&key.value(b));
        match config.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
