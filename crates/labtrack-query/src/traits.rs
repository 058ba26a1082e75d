//! The [`Filterable`] trait ties an entity type to its field table.

use crate::error::Result;
use crate::field::FieldTable;
use crate::query::Query;
use crate::request::{FilterSpec, SortSpec};

/// An entity kind that can be filtered and sorted by logical field name.
///
/// Implementors return a table built once and kept for the life of the
/// program, typically held in a `static` behind `once_cell::sync::Lazy`.
///
/// # Example
///
/// ```
/// use std::sync::OnceLock;
///
/// use labtrack_query::{Field, FieldPath, FieldTable, Filterable, MatchMode, Value};
///
/// struct Operator {
///     name: String,
/// }
///
/// impl Filterable for Operator {
///     fn field_table() -> &'static FieldTable<Self> {
///         static TABLE: OnceLock<FieldTable<Operator>> = OnceLock::new();
///         TABLE.get_or_init(|| {
///             FieldTable::new("operator").with(
///                 Field::new("name", FieldPath::column(|o: &Operator| Value::String(&o.name)))
///                     .matching(MatchMode::Exact)
///                     .sortable(),
///             )
///         })
///     }
/// }
///
/// assert_eq!(Operator::field_table().entity(), "operator");
/// ```
pub trait Filterable: Sized + 'static {
    /// Returns the entity's field table.
    fn field_table() -> &'static FieldTable<Self>;

    /// Compiles a query against this entity's table.
    fn query(filters: &FilterSpec, sort: &SortSpec) -> Result<Query<'static, Self>> {
        Query::compile(Self::field_table(), filters, sort)
    }
}
