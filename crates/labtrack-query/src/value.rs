//! Runtime value types for field comparison.
//!
//! The [`Value`] enum is what a field accessor hands back to the engine:
//! a borrowed view of one field of one record, or [`Value::None`] when the
//! field is null or sits behind a navigation reference that is not set.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use labtrack_query::{Number, Value};
///
/// struct Product {
///     name: String,
///     revision: i32,
/// }
///
/// fn name<'a>(p: &'a Product) -> Value<'a> {
///     Value::String(&p.name)
/// }
///
/// let p = Product { name: "Resin".into(), revision: 2 };
/// assert_eq!(name(&p), Value::String("Resin"));
/// assert_eq!(Value::from(p.revision), Value::Number(Number::I64(2)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Calendar date without time of day.
    Date(NaiveDate),
    /// Date and time of day, without timezone.
    DateTime(NaiveDateTime),
    /// Boolean value.
    Bool(bool),
    /// Null field, or unset navigation reference.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the calendar date of a `Date` or `DateTime` value.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            Value::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDate> for Value<'_> {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value<'_> {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

macro_rules! value_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

value_from_number!(i32, i64, u32, f32, f64);

impl From<Option<NaiveDate>> for Value<'_> {
    fn from(opt: Option<NaiveDate>) -> Self {
        opt.map_or(Value::None, Value::Date)
    }
}

impl From<Option<NaiveDateTime>> for Value<'_> {
    fn from(opt: Option<NaiveDateTime>) -> Self {
        opt.map_or(Value::None, Value::DateTime)
    }
}

/// Numeric value.
///
/// Integers and floats are kept apart to preserve precision; comparisons
/// across the two go through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Total order used for sorting. NaN ranks below every other number.
    pub fn sort_cmp(self, other: Number) -> Ordering {
        if let (Number::I64(a), Number::I64(b)) = (self, other) {
            return a.cmp(&b);
        }
        let (a, b) = (self.to_f64(), other.to_f64());
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn value_extractors() {
        assert_eq!(Value::String("hello").as_str(), Some("hello"));
        assert_eq!(
            Value::Number(Number::I64(42)).as_number(),
            Some(Number::I64(42))
        );
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Date(date(2024, 1, 15)).as_date(), Some(date(2024, 1, 15)));

        // Wrong type returns None
        assert_eq!(Value::String("test").as_number(), None);
        assert_eq!(Value::Number(Number::I64(1)).as_str(), None);
        assert_eq!(Value::None.as_bool(), None);
    }

    #[test]
    fn datetime_exposes_its_date() {
        let dt = date(2024, 1, 15).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(Value::DateTime(dt).as_date(), Some(date(2024, 1, 15)));
    }

    #[test]
    fn option_conversion_maps_none() {
        let missing: Option<NaiveDate> = None;
        assert_eq!(Value::from(missing), Value::None);
        assert_eq!(
            Value::from(Some(date(2024, 1, 15))),
            Value::Date(date(2024, 1, 15))
        );
        assert_eq!(Value::from(3i64), Value::Number(Number::I64(3)));
    }

    #[test]
    fn number_comparisons() {
        assert_eq!(Number::I64(5).compare(Number::I64(10)), Some(Ordering::Less));
        assert_eq!(
            Number::F64(10.0).compare(Number::F64(5.0)),
            Some(Ordering::Greater)
        );
        assert_eq!(Number::I64(5).compare(Number::F64(5.0)), Some(Ordering::Equal));
    }

    #[test]
    fn number_nan_comparison() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
        assert_eq!(Number::I64(1).compare(Number::F64(f64::NAN)), None);
    }

    #[test]
    fn nan_sorts_below_numbers() {
        let nan = Number::F64(f64::NAN);
        assert_eq!(nan.sort_cmp(Number::F64(-1.0e300)), Ordering::Less);
        assert_eq!(Number::I64(i64::MIN).sort_cmp(nan), Ordering::Greater);
        assert_eq!(nan.sort_cmp(Number::F64(f64::NAN)), Ordering::Equal);
        assert_eq!(Number::I64(2).sort_cmp(Number::F64(1.5)), Ordering::Greater);
    }
}
