//! Sort dispatch.
//!
//! Provides [`Dir`] for sort direction and [`Order`], the ordering a
//! [`SortSpec`](crate::SortSpec) resolves to against a field table.

use std::cmp::Ordering;

use tracing::debug;

use crate::field::{Field, FieldTable};
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Maps an `ascending` flag to a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Dir::Asc
        } else {
            Dir::Desc
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved ordering over records of one entity kind.
#[derive(Debug)]
pub enum Order<'t, T> {
    /// Keep the order the records arrived in.
    Natural,
    /// Sort by one field.
    By { field: &'t Field<T>, dir: Dir },
}

impl<'t, T> Order<'t, T> {
    /// Resolves a sort key against `table`.
    ///
    /// Absent, blank, unknown and non-sortable keys all resolve to
    /// [`Order::Natural`].
    pub fn resolve(table: &'t FieldTable<T>, key: Option<&str>, dir: Dir) -> Self {
        let Some(key) = key.map(str::trim).filter(|key| !key.is_empty()) else {
            return Order::Natural;
        };
        match table.sort_key(key) {
            Some(field) => Order::By { field, dir },
            None => {
                debug!(
                    entity = table.entity(),
                    key,
                    "unrecognized sort key, keeping natural order"
                );
                Order::Natural
            }
        }
    }

    pub fn is_natural(&self) -> bool {
        matches!(self, Order::Natural)
    }

    /// Compares two records. `Natural` treats every pair as equal.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Order::Natural => Ordering::Equal,
            Order::By { field, dir } => {
                dir.apply(compare_values(&field.resolve(a), &field.resolve(b)))
            }
        }
    }

    /// Sorts records in place. The sort is stable.
    pub fn sort<R>(&self, records: &mut [R])
    where
        R: std::ops::Deref<Target = T>,
    {
        if !self.is_natural() {
            records.sort_by(|a, b| self.compare(a, b));
        }
    }
}

impl<T> Clone for Order<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Order::Natural => Order::Natural,
            Order::By { field, dir } => Order::By {
                field: *field,
                dir: *dir,
            },
        }
    }
}

/// Compares two field values in ascending order.
///
/// `None` is the smallest value, so records with a null field or an unset
/// navigation reference sort first. NaN sorts after `None` and before every
/// other number. Values of different kinds compare equal and keep their
/// input order.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::None, Value::None) => Ordering::Equal,
        (Value::None, _) => Ordering::Less,
        (_, Value::None) => Ordering::Greater,

        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.sort_cmp(*b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
        (Value::Date(_) | Value::DateTime(_), Value::Date(_) | Value::DateTime(_)) => {
            a.as_date().cmp(&b.as_date())
        }

        _ => Ordering::Equal,
    }
}
