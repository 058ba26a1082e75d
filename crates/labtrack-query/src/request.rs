//! Per-request filter and sort parameters.
//!
//! Both types are built fresh for each query from loosely-typed input
//! (query strings, positional arguments, command-line flags) and are only
//! read afterwards.

use crate::ordering::Dir;

/// Ordered list of logical field names and their raw filter values.
///
/// An absent value, an empty string and a whitespace-only string all mean
/// "no filter" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    entries: Vec<(String, Option<String>)>,
}

impl FilterSpec {
    /// Creates an empty filter specification.
    pub fn new() -> Self {
        FilterSpec::default()
    }

    /// Adds a field with a possibly absent raw value.
    pub fn field(mut self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.entries.push((name.into(), value.map(Into::into)));
        self
    }

    /// Adds a field with a present raw value.
    pub fn set(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(name, Some(value))
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Returns `true` if no entry carries a non-blank value.
    pub fn is_blank(&self) -> bool {
        self.iter()
            .all(|(_, value)| !value.is_some_and(|v| !v.trim().is_empty()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, Option<V>)> for FilterSpec
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, Option<V>)>>(iter: I) -> Self {
        FilterSpec {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.map(Into::into)))
                .collect(),
        }
    }
}

/// Sort key and direction.
///
/// The key is matched case-insensitively. `ascending` defaults to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    key: Option<String>,
    ascending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            key: None,
            ascending: true,
        }
    }
}

impl SortSpec {
    /// Sort by `key` in the given direction.
    pub fn new(key: Option<impl Into<String>>, ascending: bool) -> Self {
        SortSpec {
            key: key.map(Into::into),
            ascending,
        }
    }

    /// Ascending by `key`.
    pub fn asc(key: impl Into<String>) -> Self {
        SortSpec::new(Some(key), true)
    }

    /// Descending by `key`.
    pub fn desc(key: impl Into<String>) -> Self {
        SortSpec::new(Some(key), false)
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn dir(&self) -> Dir {
        Dir::from_ascending(self.ascending)
    }
}
