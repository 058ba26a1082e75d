//! Filter predicates.
//!
//! A [`Predicate`] pairs a field from a [`FieldTable`](crate::FieldTable)
//! with a [`Criterion`] compiled from the raw filter string. Evaluation is
//! pure and total: a null field value, a type mismatch or a criterion that
//! failed to parse all evaluate to `false`.

use chrono::NaiveDate;
use tracing::debug;

use crate::field::Field;
use crate::mode::MatchMode;
use crate::value::{Number, Value};

/// Typed comparison target compiled from a raw filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// String equality, case-sensitive.
    Equals(String),
    /// Substring containment, case-sensitive.
    Contains(String),
    /// Date component equality.
    OnDate(NaiveDate),
    /// Boolean equality.
    Is(bool),
    /// Integer equality.
    Int(i64),
    /// Unparseable input; matches nothing.
    Never,
}

impl Criterion {
    /// Evaluates this criterion against a field value.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match (self, value) {
            (Criterion::Equals(expected), Value::String(s)) => s == expected,
            (Criterion::Contains(needle), Value::String(s)) => s.contains(needle.as_str()),
            (Criterion::OnDate(expected), Value::Date(_) | Value::DateTime(_)) => {
                value.as_date() == Some(*expected)
            }
            (Criterion::Is(expected), Value::Bool(b)) => b == expected,
            (Criterion::Int(expected), Value::Number(n)) => {
                n.compare(Number::I64(*expected)) == Some(std::cmp::Ordering::Equal)
            }
            // Null fields never satisfy a filter.
            (_, Value::None) => false,
            (Criterion::Never, _) => false,
            _ => false,
        }
    }
}

/// A compiled filter on one field.
#[derive(Debug)]
pub struct Predicate<'t, T> {
    field: &'t Field<T>,
    criterion: Criterion,
}

impl<'t, T> Predicate<'t, T> {
    pub fn new(field: &'t Field<T>, criterion: Criterion) -> Self {
        Predicate { field, criterion }
    }

    /// Compiles a raw filter value for `field` using `mode`.
    ///
    /// Returns `None` when the value is absent, empty or whitespace only:
    /// no constraint. A value that does not parse for `mode` yields a
    /// predicate that matches nothing.
    pub fn compile(field: &'t Field<T>, mode: MatchMode, raw: Option<&str>) -> Option<Self> {
        let raw = raw.filter(|value| !value.trim().is_empty())?;
        let criterion = match mode.criterion(raw) {
            Ok(criterion) => criterion,
            Err(err) => {
                debug!(
                    field = field.name(),
                    error = %err,
                    "filter value rejected, matching nothing"
                );
                Criterion::Never
            }
        };
        Some(Predicate::new(field, criterion))
    }

    pub fn field(&self) -> &'t Field<T> {
        self.field
    }

    pub fn criterion(&self) -> &Criterion {
        &self.criterion
    }

    /// Returns `true` if this predicate can never match.
    pub fn is_never(&self) -> bool {
        self.criterion == Criterion::Never
    }

    /// Evaluates this predicate against a record.
    pub fn matches(&self, record: &T) -> bool {
        self.criterion.matches(&self.field.resolve(record))
    }
}

impl<T> Clone for Predicate<'_, T> {
    fn clone(&self) -> Self {
        Predicate {
            field: self.field,
            criterion: self.criterion.clone(),
        }
    }
}
